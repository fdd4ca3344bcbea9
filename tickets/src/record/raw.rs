//! Raw delimited records.

/// Field separator used by the query API.
pub const DELIMITER: &str = "|";

/// One train line split into its positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    /// Split a single line on [`DELIMITER`], keeping empty fields.
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    ///
    /// A record built from a line always has at least one (possibly empty)
    /// field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at a position, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// All fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Re-join the fields with [`DELIMITER`].
    pub fn to_line(&self) -> String {
        self.fields.join(DELIMITER)
    }
}

/// Split every response line into a [`RawRecord`].
pub fn parse<I, S>(rows: I) -> Vec<RawRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| RawRecord::from_line(row.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_pipe() {
        let record = RawRecord::from_line("a|b|c");
        assert_eq!(record.fields(), ["a", "b", "c"]);
    }

    #[test]
    fn keeps_empty_fields() {
        let record = RawRecord::from_line("a||c|");
        assert_eq!(record.fields(), ["a", "", "c", ""]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        let record = RawRecord::from_line("");
        assert_eq!(record.fields(), [""]);
        assert!(!record.is_empty());
    }

    #[test]
    fn no_other_normalisation() {
        let record = RawRecord::from_line(" G1 | 08:00 ");
        assert_eq!(record.get(0), Some(" G1 "));
        assert_eq!(record.get(1), Some(" 08:00 "));
        assert_eq!(record.get(2), None);
    }

    #[test]
    fn parse_preserves_order() {
        let records = parse(["x|1", "y|2"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(0), Some("x"));
        assert_eq!(records[1].get(0), Some("y"));
    }

    #[test]
    fn parse_accepts_owned_strings() {
        let rows = vec!["a|b".to_string()];
        assert_eq!(parse(&rows)[0].len(), 2);
    }
}

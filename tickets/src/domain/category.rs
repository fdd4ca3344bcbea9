//! Train categories and category filters.

use std::collections::BTreeSet;
use std::fmt;

/// Train category, identified by the first letter of the train number.
///
/// Only the categories the command line can filter on are modelled. Train
/// numbers starting with anything else (digits, `C`, `S`, ...) have no
/// category and never match a non-empty filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrainCategory {
    /// `G`: high-speed.
    HighSpeed,
    /// `D`: bullet (EMU).
    Bullet,
    /// `T`: express.
    Express,
    /// `K`: fast.
    Fast,
    /// `Z`: direct.
    Direct,
}

impl TrainCategory {
    /// All filterable categories.
    pub const ALL: [TrainCategory; 5] = [
        TrainCategory::HighSpeed,
        TrainCategory::Bullet,
        TrainCategory::Express,
        TrainCategory::Fast,
        TrainCategory::Direct,
    ];

    /// Look up a category by its letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(TrainCategory::HighSpeed),
            'd' => Some(TrainCategory::Bullet),
            't' => Some(TrainCategory::Express),
            'k' => Some(TrainCategory::Fast),
            'z' => Some(TrainCategory::Direct),
            _ => None,
        }
    }

    /// Derive the category of a train number such as `G101`.
    pub fn of_train(train_number: &str) -> Option<Self> {
        train_number.chars().next().and_then(Self::from_letter)
    }

    /// The lower-case letter for this category.
    pub fn letter(self) -> char {
        match self {
            TrainCategory::HighSpeed => 'g',
            TrainCategory::Bullet => 'd',
            TrainCategory::Express => 't',
            TrainCategory::Fast => 'k',
            TrainCategory::Direct => 'z',
        }
    }
}

impl fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The set of categories requested by the caller.
///
/// An empty set means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    categories: BTreeSet<TrainCategory>,
}

impl FilterOptions {
    /// A filter that accepts every train.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a category to the filter.
    pub fn with(mut self, category: TrainCategory) -> Self {
        self.categories.insert(category);
        self
    }

    /// Returns true if no category was requested.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns true if a train with this number should be shown.
    pub fn accepts(&self, train_number: &str) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        TrainCategory::of_train(train_number).is_some_and(|c| self.categories.contains(&c))
    }

    /// The requested categories, in a stable order.
    pub fn categories(&self) -> impl Iterator<Item = TrainCategory> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<TrainCategory> for FilterOptions {
    fn from_iter<I: IntoIterator<Item = TrainCategory>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_roundtrip() {
        for category in TrainCategory::ALL {
            assert_eq!(TrainCategory::from_letter(category.letter()), Some(category));
        }
    }

    #[test]
    fn category_is_case_insensitive() {
        assert_eq!(TrainCategory::of_train("G101"), Some(TrainCategory::HighSpeed));
        assert_eq!(TrainCategory::of_train("g101"), Some(TrainCategory::HighSpeed));
        assert_eq!(TrainCategory::of_train("K1234"), Some(TrainCategory::Fast));
    }

    #[test]
    fn unknown_prefix_has_no_category() {
        assert_eq!(TrainCategory::of_train("C2001"), None);
        assert_eq!(TrainCategory::of_train("1461"), None);
        assert_eq!(TrainCategory::of_train(""), None);
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = FilterOptions::all();
        assert!(filter.accepts("G101"));
        assert!(filter.accepts("C2001"));
        assert!(filter.accepts(""));
    }

    #[test]
    fn filter_matches_requested_categories_only() {
        let filter = FilterOptions::all()
            .with(TrainCategory::HighSpeed)
            .with(TrainCategory::Bullet);
        assert!(filter.accepts("G101"));
        assert!(filter.accepts("D312"));
        assert!(!filter.accepts("T110"));
        assert!(!filter.accepts("C2001"));
        assert!(!filter.accepts(""));
    }

    #[test]
    fn categories_are_ordered() {
        let filter: FilterOptions = [TrainCategory::Direct, TrainCategory::HighSpeed]
            .into_iter()
            .collect();
        let letters: String = filter.categories().map(|c| c.letter()).collect();
        assert_eq!(letters, "gz");
    }
}

//! Query API response DTOs.

use serde::Deserialize;

/// Envelope returned by `leftTicket/query`.
///
/// On success `data` is present. When the request is refused, `status` is
/// false, `data` is missing and `messages` explains why.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub data: Option<QueryData>,

    pub status: Option<bool>,

    /// HTTP-like status code echoed in the body.
    pub httpstatus: Option<u16>,

    /// Either a list of strings or a single string, depending on the error.
    pub messages: Option<serde_json::Value>,
}

/// Payload of a successful query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryData {
    /// One pipe-delimited line per train.
    #[serde(default)]
    pub result: Vec<String>,
}

impl QueryResponse {
    /// Human-readable text from `messages`, if any.
    pub fn message_text(&self) -> Option<String> {
        match self.messages.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_success() {
        let json = r#"{
            "httpstatus": 200,
            "status": true,
            "messages": "",
            "data": {
                "flag": "1",
                "map": {"VNP": "北京南", "AOH": "上海虹桥"},
                "result": ["a|b|G1", "c|d|G3"]
            }
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.result, ["a|b|G1", "c|d|G3"]);
        assert_eq!(response.status, Some(true));
    }

    #[test]
    fn deserialize_without_result() {
        let response: QueryResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(response.data.unwrap().result.is_empty());
    }

    #[test]
    fn message_text_from_list() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"status": false, "messages": ["选择的查询日期不在预售日期范围内", "x"]}"#,
        )
        .unwrap();
        assert!(response.data.is_none());
        assert_eq!(
            response.message_text().as_deref(),
            Some("选择的查询日期不在预售日期范围内; x")
        );
    }

    #[test]
    fn message_text_from_string_or_nothing() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"status": false, "messages": "busy"}"#).unwrap();
        assert_eq!(response.message_text().as_deref(), Some("busy"));

        let response: QueryResponse = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert_eq!(response.message_text(), None);
    }
}

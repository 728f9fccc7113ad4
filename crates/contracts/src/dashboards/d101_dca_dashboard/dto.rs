use serde::{Deserialize, Serialize};

/// Response of `GET /dca/{id}/dashboard`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaDashboardResponse {
    /// Echo of the requested agent id (not sent by every backend version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dca_id: Option<i64>,
    /// Greeting, e.g. "Welcome, DCA Agent #1"
    pub message: String,
    /// Pre-formatted case lines, see `domain::a001_case::parser`
    #[serde(default)]
    pub assigned_cases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_response() {
        let json = r#"{
            "dca_id": 1,
            "message": "Welcome, DCA Agent #1",
            "assigned_cases": ["Jane Doe - $1234.50 (45 days overdue)"]
        }"#;
        let response: DcaDashboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.dca_id, Some(1));
        assert_eq!(response.message, "Welcome, DCA Agent #1");
        assert_eq!(response.assigned_cases.len(), 1);
    }

    #[test]
    fn test_missing_optional_fields() {
        let response: DcaDashboardResponse =
            serde_json::from_str(r#"{"message": "Hi"}"#).unwrap();
        assert_eq!(response.dca_id, None);
        assert!(response.assigned_cases.is_empty());
    }
}

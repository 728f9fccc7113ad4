use serde::{Deserialize, Serialize};

/// Response of `GET /admin/dashboard`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_dcas: i64,
    pub active_cases: i64,
    pub resolved_today: i64,
}

/// Body of `POST /admin/case`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCaseRequest {
    pub customer_name: String,
    pub amount: f64,
    pub days_overdue: i64,
}

/// Response of `POST /admin/case`.
///
/// Only logged by the client, so every field is optional on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCaseResponse {
    pub message: String,
    pub case: Option<CaseRecord>,
}

/// Case as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub id: i64,
    pub customer_name: String,
    pub amount: f64,
    pub days_overdue: i64,
    /// "active" for freshly created cases
    pub status: String,
    pub resolved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_from_backend_json() {
        let json = r#"{"total_dcas": 5, "active_cases": 12, "resolved_today": 3}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_dcas: 5,
                active_cases: 12,
                resolved_today: 3,
            }
        );
    }

    #[test]
    fn test_create_case_request_field_names() {
        let request = CreateCaseRequest {
            customer_name: "John Doe".to_string(),
            amount: 1500.25,
            days_overdue: 42,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["customer_name"], "John Doe");
        assert_eq!(value["amount"], 1500.25);
        assert_eq!(value["days_overdue"], 42);
    }

    #[test]
    fn test_create_case_response_tolerates_partial_body() {
        let full = r#"{
            "message": "Case created successfully",
            "case": {"id": 1, "customer_name": "Jane", "amount": 10.0,
                     "days_overdue": 3, "status": "active", "resolved": false}
        }"#;
        let response: CreateCaseResponse = serde_json::from_str(full).unwrap();
        let case = response.case.unwrap();
        assert_eq!(case.id, 1);
        assert_eq!(case.status, "active");
        assert!(!case.resolved);

        let empty: CreateCaseResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CreateCaseResponse::default());
    }
}

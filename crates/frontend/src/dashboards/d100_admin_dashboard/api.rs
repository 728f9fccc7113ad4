use contracts::dashboards::d100_admin_dashboard::{CreateCaseRequest, DashboardStats};

use crate::shared::api_client::DashboardApi;

pub const CASE_CREATED_MESSAGE: &str = "Case created successfully!";
/// Shown for every failed submit, whatever went wrong
pub const CASE_FAILED_MESSAGE: &str = "Failed to create case. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsState {
    Loading,
    Ready(DashboardStats),
    Failed(String),
}

impl StatsState {
    pub fn stats(&self) -> Option<&DashboardStats> {
        match self {
            StatsState::Ready(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Raw text of the create-case inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseForm {
    pub customer_name: String,
    pub amount: String,
    pub days_overdue: String,
}

impl CaseForm {
    /// Numeric fields follow `Number()` semantics for blank input (0);
    /// anything unparseable also becomes 0. Days are truncated.
    pub fn to_request(&self) -> CreateCaseRequest {
        CreateCaseRequest {
            customer_name: self.customer_name.clone(),
            amount: parse_number_input(&self.amount),
            days_overdue: parse_number_input(&self.days_overdue).trunc() as i64,
        }
    }
}

fn parse_number_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created)
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created => CASE_CREATED_MESSAGE,
            SubmitOutcome::Failed => CASE_FAILED_MESSAGE,
        }
    }
}

/// Fetch the admin statistics
pub async fn load_stats(api: &impl DashboardApi) -> StatsState {
    match api.admin_dashboard().await {
        Ok(stats) => StatsState::Ready(stats),
        Err(e) => {
            log::error!("Failed to load admin dashboard: {}", e);
            StatsState::Failed(e.to_string())
        }
    }
}

/// Create a case. The stats refresh is left to the caller so the outcome
/// can be shown without waiting for it.
pub async fn submit_case(api: &impl DashboardApi, form: &CaseForm) -> SubmitOutcome {
    let request = form.to_request();

    match api.create_case(&request).await {
        Ok(response) => {
            match &response.case {
                Some(case) => log::debug!(
                    "Created case {} for {}: {}",
                    case.id,
                    case.customer_name,
                    response.message
                ),
                None => log::debug!(
                    "Created case for {}: {}",
                    request.customer_name,
                    response.message
                ),
            }
            SubmitOutcome::Created
        }
        Err(e) => {
            log::error!("Failed to create case for {}: {}", request.customer_name, e);
            SubmitOutcome::Failed
        }
    }
}

/// Re-fetch the statistics after a successful create. `None` keeps the
/// stats already on screen.
pub async fn refresh_stats(api: &impl DashboardApi) -> Option<DashboardStats> {
    match api.admin_dashboard().await {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::warn!("Case created but stats refresh failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use async_trait::async_trait;
    use contracts::dashboards::d100_admin_dashboard::{CaseRecord, CreateCaseResponse};
    use contracts::dashboards::d101_dca_dashboard::DcaDashboardResponse;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Replays queued stats responses and records created cases
    struct FakeApi {
        stats: RefCell<VecDeque<Result<DashboardStats, ApiError>>>,
        create_result: Result<CreateCaseResponse, ApiError>,
        stats_calls: Cell<usize>,
        created: RefCell<Vec<CreateCaseRequest>>,
    }

    impl FakeApi {
        fn new(
            stats: Vec<Result<DashboardStats, ApiError>>,
            create_result: Result<CreateCaseResponse, ApiError>,
        ) -> Self {
            Self {
                stats: RefCell::new(stats.into()),
                create_result,
                stats_calls: Cell::new(0),
                created: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeApi {
        async fn admin_dashboard(&self) -> Result<DashboardStats, ApiError> {
            self.stats_calls.set(self.stats_calls.get() + 1);
            self.stats
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ApiError::Status(500)))
        }

        async fn create_case(
            &self,
            request: &CreateCaseRequest,
        ) -> Result<CreateCaseResponse, ApiError> {
            self.created.borrow_mut().push(request.clone());
            self.create_result.clone()
        }

        async fn dca_dashboard(&self, _dca_id: &str) -> Result<DcaDashboardResponse, ApiError> {
            Err(ApiError::Status(404))
        }
    }

    fn stats(active_cases: i64) -> DashboardStats {
        DashboardStats {
            total_dcas: 5,
            active_cases,
            resolved_today: 0,
        }
    }

    fn created() -> CreateCaseResponse {
        CreateCaseResponse {
            message: "Case created successfully".to_string(),
            case: Some(CaseRecord {
                id: 7,
                customer_name: "John Doe".to_string(),
                amount: 1500.5,
                days_overdue: 45,
                status: "active".to_string(),
                resolved: false,
            }),
        }
    }

    fn filled_form() -> CaseForm {
        CaseForm {
            customer_name: "John Doe".to_string(),
            amount: "1500.50".to_string(),
            days_overdue: "45".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_stats_ready() {
        let api = FakeApi::new(vec![Ok(stats(3))], Ok(created()));
        assert_eq!(load_stats(&api).await, StatsState::Ready(stats(3)));
    }

    #[tokio::test]
    async fn test_load_stats_server_error_is_failed_state() {
        let api = FakeApi::new(vec![Err(ApiError::Status(500))], Ok(created()));
        let state = load_stats(&api).await;
        assert_eq!(state, StatsState::Failed("API error: 500".to_string()));
        assert!(state.stats().is_none());
    }

    #[tokio::test]
    async fn test_load_stats_transport_error() {
        let api = FakeApi::new(
            vec![Err(ApiError::Transport("connection refused".to_string()))],
            Ok(created()),
        );
        assert!(matches!(load_stats(&api).await, StatsState::Failed(_)));
    }

    #[tokio::test]
    async fn test_submit_success_does_not_wait_for_stats() {
        let api = FakeApi::new(vec![Ok(stats(1))], Ok(created()));
        let outcome = submit_case(&api, &filled_form()).await;

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(outcome.message(), "Case created successfully!");
        assert_eq!(api.stats_calls.get(), 0);
        assert_eq!(
            api.created.borrow().as_slice(),
            &[CreateCaseRequest {
                customer_name: "John Doe".to_string(),
                amount: 1500.5,
                days_overdue: 45,
            }]
        );
    }

    #[tokio::test]
    async fn test_submit_success_with_empty_response_body() {
        let api = FakeApi::new(vec![], Ok(CreateCaseResponse::default()));
        assert!(submit_case(&api, &filled_form()).await.is_success());
    }

    #[tokio::test]
    async fn test_refresh_stats_fetches_once() {
        let api = FakeApi::new(vec![Ok(stats(1)), Ok(stats(2))], Ok(created()));
        assert_eq!(refresh_stats(&api).await, Some(stats(1)));
        assert_eq!(api.stats_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refresh_stats_failure_keeps_old_stats() {
        let api = FakeApi::new(vec![Err(ApiError::Status(503))], Ok(created()));
        assert_eq!(refresh_stats(&api).await, None);
    }

    #[tokio::test]
    async fn test_submit_status_failure_does_not_refresh() {
        let api = FakeApi::new(vec![Ok(stats(1))], Err(ApiError::Status(422)));
        let outcome = submit_case(&api, &filled_form()).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(outcome.message(), CASE_FAILED_MESSAGE);
        assert_eq!(api.stats_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_submit_transport_failure_uses_same_message() {
        let api = FakeApi::new(
            vec![],
            Err(ApiError::Transport("network down".to_string())),
        );
        let outcome = submit_case(&api, &filled_form()).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), CASE_FAILED_MESSAGE);
    }

    #[test]
    fn test_form_number_conversion() {
        let form = CaseForm {
            customer_name: "A".to_string(),
            amount: "  ".to_string(),
            days_overdue: "12.9".to_string(),
        };
        let request = form.to_request();
        assert_eq!(request.amount, 0.0);
        assert_eq!(request.days_overdue, 12);

        let form = CaseForm {
            amount: "abc".to_string(),
            days_overdue: "-3".to_string(),
            ..CaseForm::default()
        };
        let request = form.to_request();
        assert_eq!(request.amount, 0.0);
        assert_eq!(request.days_overdue, -3);
    }
}

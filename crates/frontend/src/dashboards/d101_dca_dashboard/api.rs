use contracts::domain::a001_case::{parse_case_line, CaseLine};

use crate::shared::api_client::DashboardApi;

/// Agent dashboard content with every case line already parsed
#[derive(Debug, Clone, PartialEq)]
pub struct CaseListView {
    pub message: String,
    /// In backend order
    pub cases: Vec<CaseLine>,
}

impl CaseListView {
    pub fn has_cases(&self) -> bool {
        !self.cases.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CasesState {
    Loading,
    Ready(CaseListView),
    /// Error text shown to the agent as-is
    Failed(String),
}

/// Orders case-list requests so only the newest one may update the page.
///
/// Every request takes a ticket from [`begin`](Self::begin); a response is
/// applied only while its ticket is still the latest. Comparing agent ids is
/// not enough: after navigating A, B, A the first A response carries the
/// current id but is older than the request still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Fetch and parse the cases assigned to `dca_id`
pub async fn load_cases(api: &impl DashboardApi, dca_id: &str) -> CasesState {
    match api.dca_dashboard(dca_id).await {
        Ok(response) => {
            let cases: Vec<CaseLine> = response
                .assigned_cases
                .iter()
                .map(|raw| parse_case_line(raw))
                .collect();

            let unmatched = cases.iter().filter(|c| !c.is_matched()).count();
            if unmatched > 0 {
                log::warn!(
                    "DCA {}: {} of {} case lines did not match the expected format",
                    dca_id,
                    unmatched,
                    cases.len()
                );
            }

            CasesState::Ready(CaseListView {
                message: response.message,
                cases,
            })
        }
        Err(e) => {
            log::error!("Failed to load dashboard for DCA {}: {}", dca_id, e);
            CasesState::Failed(e.to_string())
        }
    }
}

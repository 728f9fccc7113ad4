//! Backend access for the dashboards.
//!
//! [`DashboardApi`] is the seam between the pages and the network: pages run
//! their flows against the trait, the browser build plugs in
//! [`HttpDashboardApi`]. Every call is a single unauthenticated attempt.

use async_trait::async_trait;
use contracts::dashboards::d100_admin_dashboard::{
    CreateCaseRequest, CreateCaseResponse, DashboardStats,
};
use contracts::dashboards::d101_dca_dashboard::DcaDashboardResponse;
use gloo_net::http::{Request, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::{api_url, dca_dashboard_path};
use crate::shared::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response: connection refused, CORS, DNS, serialization
    #[error("Request failed: {0}")]
    Transport(String),
    /// Response with a non-2xx status
    #[error("API error: {0}")]
    Status(u16),
    /// 2xx response whose body is not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait DashboardApi {
    /// `GET /admin/dashboard`
    async fn admin_dashboard(&self) -> Result<DashboardStats, ApiError>;

    /// `POST /admin/case`
    async fn create_case(
        &self,
        request: &CreateCaseRequest,
    ) -> Result<CreateCaseResponse, ApiError>;

    /// `GET /dca/{id}/dashboard`
    async fn dca_dashboard(&self, dca_id: &str) -> Result<DcaDashboardResponse, ApiError>;
}

/// [`DashboardApi`] over `fetch`
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the backend named by the [`AppConfig`] in context
    pub fn from_context() -> Self {
        let config = use_context::<AppConfig>().unwrap_or_default();
        Self::new(config.api.base_url)
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

fn get(url: &str) -> Result<Request, ApiError> {
    Request::get(url)
        .build()
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn admin_dashboard(&self) -> Result<DashboardStats, ApiError> {
        let response = send(get(&self.url("/admin/dashboard"))?).await?;
        read_json(response).await
    }

    async fn create_case(
        &self,
        request: &CreateCaseRequest,
    ) -> Result<CreateCaseResponse, ApiError> {
        let http_request = Request::post(&self.url("/admin/case"))
            .json(request)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;

        let response = send(http_request).await?;
        // The write already succeeded; an unreadable body is not a failure
        Ok(read_json(response).await.unwrap_or_else(|e| {
            log::warn!("Case created but response body was not readable: {}", e);
            CreateCaseResponse::default()
        }))
    }

    async fn dca_dashboard(&self, dca_id: &str) -> Result<DcaDashboardResponse, ApiError> {
        let url = self.url(&dca_dashboard_path(dca_id));
        let response = send(get(&url)?).await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(500).to_string(), "API error: 500");
        assert_eq!(ApiError::Status(404).to_string(), "API error: 404");
    }

    #[test]
    fn test_transport_error_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_client_urls() {
        let api = HttpDashboardApi::new("http://127.0.0.1:8000/");
        assert_eq!(
            api.url("/admin/dashboard"),
            "http://127.0.0.1:8000/admin/dashboard"
        );
    }
}

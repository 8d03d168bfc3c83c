use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{extract_error_message, CreateDebtRequest, DashboardSummary, Debt, Installment, UpdateInstallmentRequest};
use thiserror::Error;

use super::logging::Logger;
use crate::config::AppConfig;

const LOG_COMPONENT: &str = "API";

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request could not be built or its body serialized
    #[error("Invalid request: {0}")]
    Request(String),
    /// The request was sent but no response arrived
    #[error("No response received: {0}")]
    NoResponse(String),
    /// The backend answered with a non-success status
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },
    /// A response arrived but its body could not be read
    #[error("Failed to read response body (HTTP {status}): {message}")]
    Body { status: u16, message: String },
    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message from the backend's error body, if it sent one
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Server { body, .. } => extract_error_message(body),
            _ => None,
        }
    }

    /// Text for an alert: the server's message, or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or_else(|| fallback.to_string())
    }
}

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&AppConfig::from_env())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Request::get(&self.url(path));
        let body = self.dispatch("GET", path, request.build()).await?;
        decode(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path)).json(body);
        let body = self.dispatch("POST", path, request).await?;
        decode(&body)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = Request::put(&self.url(path)).json(body);
        let body = self.dispatch("PUT", path, request).await?;
        decode(&body)
    }

    /// Issue a DELETE; any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = Request::delete(&self.url(path));
        self.dispatch("DELETE", path, request.build()).await?;
        Ok(())
    }

    /// Send a prepared request and return the raw body of a successful
    /// response. Every request and every failure is logged.
    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        request: Result<Request, gloo::net::Error>,
    ) -> Result<String, ApiError> {
        Logger::info_with_component(LOG_COMPONENT, &format!("{} {}", method, path));

        let request = request.map_err(|e| {
            Logger::error_with_component(LOG_COMPONENT, &e.to_string());
            ApiError::Request(e.to_string())
        })?;

        let response = request.send().await.map_err(|e| {
            Logger::error_with_component(LOG_COMPONENT, "No response received");
            ApiError::NoResponse(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let err = unreadable_body(status, &e.to_string());
            Logger::error_with_component(LOG_COMPONENT, &err.to_string());
            err
        })?;

        if !response.ok() {
            let logged = if body.is_empty() { format!("HTTP {}", status) } else { body.clone() };
            Logger::error_with_component(LOG_COMPONENT, &logged);
            return Err(ApiError::Server { status, body });
        }

        Ok(body)
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/api/dashboard/summary").await
    }

    /// All debts, each with its installments
    pub async fn list_debts(&self) -> Result<Vec<Debt>, ApiError> {
        self.get("/api/admin/debts?includeInstallments=true").await
    }

    /// A single debt without its installment list
    pub async fn debt_detail(&self, debt_id: i64) -> Result<Debt, ApiError> {
        self.get(&format!("/api/admin/debts/{}?includeInstallments=false", debt_id))
            .await
    }

    pub async fn create_debt(&self, request: &CreateDebtRequest) -> Result<Debt, ApiError> {
        self.post("/api/admin/debts", request).await
    }

    pub async fn update_installment(
        &self,
        installment_id: i64,
        request: &UpdateInstallmentRequest,
    ) -> Result<Installment, ApiError> {
        self.put(&format!("/api/admin/installments/{}", installment_id), request)
            .await
    }

    pub async fn delete_debt(&self, debt_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/debts/{}", debt_id)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn unreadable_body(status: u16, message: &str) -> ApiError {
    ApiError::Body {
        status,
        message: message.to_string(),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        Logger::error_with_component(LOG_COMPONENT, &format!("Unexpected response body: {}", e));
        ApiError::Decode(e.to_string())
    })
}

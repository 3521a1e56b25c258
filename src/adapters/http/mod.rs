//! HTTP adapters - REST API implementations.

pub mod reservation;

use serde::Serialize;

use crate::domain::foundation::ErrorCode;

pub use reservation::{api_router, ReservationAppState};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn feature_disabled(feature: &str) -> Self {
        Self::new(
            ErrorCode::FeatureDisabled,
            format!("{} is not enabled", feature),
        )
    }
}

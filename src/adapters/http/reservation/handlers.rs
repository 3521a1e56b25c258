//! HTTP handlers for reservation endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::reservation::{
    AdvanceWizardCommand, AdvanceWizardHandler, AssistantError, AssistantTurnCommand,
    AssistantTurnHandler,
};
use crate::config::FeatureFlags;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::reservation::FieldError;
use crate::domain::wizard::WizardError;

use super::dto::{
    AssistantMessageRequest, AssistantMessageResponse, HealthResponse, WizardFieldsResponse,
    WizardStepRequest, WizardStepResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the reservation endpoints. Holds no session data.
#[derive(Clone)]
pub struct ReservationAppState {
    wizard: Arc<AdvanceWizardHandler>,
    assistant: Option<Arc<AssistantTurnHandler>>,
    features: FeatureFlags,
}

impl ReservationAppState {
    pub fn new(features: FeatureFlags) -> Self {
        Self {
            wizard: Arc::new(AdvanceWizardHandler::new()),
            assistant: None,
            features,
        }
    }

    pub fn with_assistant(mut self, handler: AssistantTurnHandler) -> Self {
        self.assistant = Some(Arc::new(handler));
        self
    }

    fn assistant(&self) -> Option<&AssistantTurnHandler> {
        if self.features.assistant_enabled {
            self.assistant.as_deref()
        } else {
            None
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/reservations/wizard/fields - Ordered wizard fields
pub async fn list_wizard_fields(State(state): State<ReservationAppState>) -> Response {
    if !state.features.wizard_enabled {
        return feature_disabled("wizard");
    }
    (StatusCode::OK, Json(WizardFieldsResponse::all())).into_response()
}

/// POST /api/reservations/wizard/steps - Submit the answer for one field
pub async fn submit_wizard_step(
    State(state): State<ReservationAppState>,
    payload: Result<Json<WizardStepRequest>, JsonRejection>,
) -> Response {
    if !state.features.wizard_enabled {
        return feature_disabled("wizard");
    }
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection),
    };
    let session_id = match resolve_session(req.session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AdvanceWizardCommand {
        session_id,
        draft: req.draft,
        field_index: req.field_index,
        input: req.input,
    };

    match state.wizard.handle(cmd) {
        Ok(result) => (StatusCode::OK, Json(WizardStepResponse::from(result))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// POST /api/reservations/assistant/messages - One conversational turn
pub async fn send_assistant_message(
    State(state): State<ReservationAppState>,
    payload: Result<Json<AssistantMessageRequest>, JsonRejection>,
) -> Response {
    let Some(assistant) = state.assistant() else {
        return feature_disabled("assistant");
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection),
    };
    let session_id = match resolve_session(req.session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AssistantTurnCommand {
        session_id,
        history: req.history,
        message: req.message,
    };

    match assistant.handle(cmd).await {
        Ok(result) => {
            tracing::debug!(
                session_id = %result.session_id,
                total_tokens = result.usage.total_tokens,
                "assistant turn served"
            );
            (StatusCode::OK, Json(AssistantMessageResponse::from(result))).into_response()
        }
        Err(e) => handle_assistant_error(e, state.features.verbose_errors),
    }
}

/// Uses the caller's session id, or generates one for a new session.
fn resolve_session(raw: Option<String>) -> Result<SessionId, Response> {
    match raw {
        None => Ok(SessionId::generate()),
        Some(raw) => SessionId::new(raw).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn feature_disabled(feature: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::feature_disabled(feature)),
    )
        .into_response()
}

fn bad_json(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn field_error_response(error: &FieldError) -> ErrorResponse {
    let field = error.field();
    ErrorResponse::new(ErrorCode::ValidationFailed, error.to_string()).with_details(json!({
        "field": field,
        "fieldIndex": field.order_index(),
        "prompt": field.prompt(),
    }))
}

fn handle_wizard_error(error: WizardError) -> Response {
    match error {
        WizardError::Invalid(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(field_error_response(&e)),
        )
            .into_response(),
        WizardError::InconsistentDraft(e) => {
            tracing::warn!(error = %e, "wizard draft failed final validation");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(field_error_response(&e)),
            )
                .into_response()
        }
        WizardError::AlreadyComplete => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(ErrorCode::WizardComplete, error.to_string())),
        )
            .into_response(),
        WizardError::InvalidFieldIndex { max, .. } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::new(ErrorCode::InvalidFieldIndex, error.to_string())
                    .with_details(json!({ "max": max })),
            ),
        )
            .into_response(),
    }
}

fn handle_assistant_error(error: AssistantError, verbose: bool) -> Response {
    match &error {
        AssistantError::EmptyMessage => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        AssistantError::Service(_) | AssistantError::Timeout { .. } => {
            let retryable = match &error {
                AssistantError::Service(e) => e.is_retryable(),
                _ => true,
            };
            let message = if verbose {
                error.to_string()
            } else {
                "The assistant is temporarily unavailable".to_string()
            };
            (
                StatusCode::BAD_GATEWAY,
                Json(
                    ErrorResponse::new(ErrorCode::AssistantUnavailable, message)
                        .with_details(json!({ "retryable": retryable })),
                ),
            )
                .into_response()
        }
    }
}

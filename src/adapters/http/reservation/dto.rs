//! HTTP DTOs for reservation endpoints.
//!
//! Callers own the session: every request carries the full draft (wizard) or
//! the full history (assistant), and every response hands it back.

use serde::{Deserialize, Serialize};

use crate::application::handlers::reservation::{AdvanceWizardResult, AssistantTurnResult};
use crate::domain::assistant::{AssistantReply, Turn};
use crate::domain::reservation::{FieldKey, ReservationDraft, ReservationRecord};
use crate::domain::wizard::{WizardController, WizardOutcome, WizardStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One wizard answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStepRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub draft: ReservationDraft,
    #[serde(default)]
    pub field_index: usize,
    #[serde(default)]
    pub input: String,
}

/// One customer message plus everything said before it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessageRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub history: Vec<Turn>,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A wizard field as shown to the customer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardFieldResponse {
    pub index: usize,
    pub key: FieldKey,
    pub label: &'static str,
    pub prompt: &'static str,
    pub accepts_empty: bool,
}

impl From<FieldKey> for WizardFieldResponse {
    fn from(key: FieldKey) -> Self {
        Self {
            index: key.order_index(),
            key,
            label: key.label(),
            prompt: key.prompt(),
            accepts_empty: key.accepts_empty(),
        }
    }
}

/// Field listing plus the question a fresh session starts with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardFieldsResponse {
    pub first_field: FieldKey,
    pub first_prompt: &'static str,
    pub fields: Vec<WizardFieldResponse>,
    pub total: usize,
}

impl WizardFieldsResponse {
    pub fn all() -> Self {
        let (first_field, first_prompt) = WizardController::new().first_prompt();
        Self {
            first_field,
            first_prompt,
            fields: FieldKey::ORDER.iter().copied().map(Into::into).collect(),
            total: FieldKey::COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressResponse {
    pub answered: usize,
    pub total: usize,
}

impl From<WizardStep> for ProgressResponse {
    fn from(step: WizardStep) -> Self {
        let (answered, total) = step.progress();
        Self { answered, total }
    }
}

/// Result of an accepted wizard answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStepResponse {
    pub session_id: String,
    pub draft: ReservationDraft,
    pub field_index: usize,
    pub progress: ProgressResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_field: Option<FieldKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<AdvanceWizardResult> for WizardStepResponse {
    fn from(result: AdvanceWizardResult) -> Self {
        let turn = result.turn;
        let (next_field, prompt, reservation) = match turn.outcome {
            WizardOutcome::NextField { field, prompt } => (Some(field), Some(prompt), None),
            WizardOutcome::Complete(record) => (None, None, Some(record)),
        };

        Self {
            session_id: result.session_id.to_string(),
            draft: turn.draft,
            field_index: turn.step.index(),
            progress: turn.step.into(),
            next_field,
            prompt,
            complete: reservation.is_some(),
            summary: reservation.as_ref().map(ReservationRecord::summary),
            reservation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Completion,
    Clarification,
}

/// Classified assistant turn. `message` is what the caller appends to its
/// history as the assistant's turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessageResponse {
    pub session_id: String,
    pub status: ReplyStatus,
    pub message: String,
    pub missing_fields: Vec<FieldKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationRecord>,
}

impl From<AssistantTurnResult> for AssistantMessageResponse {
    fn from(result: AssistantTurnResult) -> Self {
        let message = result.reply.message();
        let session_id = result.session_id.to_string();
        match result.reply {
            AssistantReply::Completion { record } => Self {
                session_id,
                status: ReplyStatus::Completion,
                message,
                missing_fields: Vec::new(),
                reservation: Some(record),
            },
            AssistantReply::Clarification { missing_fields, .. } => Self {
                session_id,
                status: ReplyStatus::Clarification,
                message,
                missing_fields,
                reservation: None,
            },
        }
    }
}

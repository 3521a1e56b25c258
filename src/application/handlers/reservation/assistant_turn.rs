//! AssistantTurnHandler - Command handler for one conversational turn.
//!
//! Builds the inference request from the fixed system instruction and the
//! caller's full history, calls the provider under a timeout and hands the
//! raw reply to the extractor.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::assistant::{system_instruction, AssistantReply, ConversationalExtractor, Turn, TurnRole};
use crate::domain::foundation::SessionId;
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, MessageRole, RequestMetadata, TokenUsage};

/// Command carrying the caller's history and the new message.
#[derive(Debug, Clone)]
pub struct AssistantTurnCommand {
    pub session_id: SessionId,
    /// Turns before `message`, oldest first.
    pub history: Vec<Turn>,
    pub message: String,
}

/// Result of a turn the provider answered.
#[derive(Debug, Clone)]
pub struct AssistantTurnResult {
    pub session_id: SessionId,
    pub reply: AssistantReply,
    pub usage: TokenUsage,
}

/// Errors that prevent a turn from being classified.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("message cannot be empty")]
    EmptyMessage,

    /// The inference call failed.
    #[error("assistant service failed: {0}")]
    Service(#[from] AIError),

    #[error("assistant service timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// Settings for the inference call.
#[derive(Debug, Clone)]
pub struct AssistantHandlerConfig {
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AssistantHandlerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            temperature: 0.2,
            max_tokens: 1024,
        }
    }
}

/// Handler for assistant turns.
pub struct AssistantTurnHandler {
    provider: Arc<dyn AIProvider>,
    extractor: ConversationalExtractor,
    config: AssistantHandlerConfig,
    today: Option<NaiveDate>,
}

impl AssistantTurnHandler {
    pub fn new(provider: Arc<dyn AIProvider>, config: AssistantHandlerConfig) -> Self {
        Self {
            provider,
            extractor: ConversationalExtractor::new(),
            config,
            today: None,
        }
    }

    /// Pins the date shown in the system instruction instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub async fn handle(&self, cmd: AssistantTurnCommand) -> Result<AssistantTurnResult, AssistantError> {
        if cmd.message.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let mut turns = cmd.history;
        turns.push(Turn::user(cmd.message));

        let (reply, usage) = self.extract(&cmd.session_id, &turns).await?;
        Ok(AssistantTurnResult {
            session_id: cmd.session_id,
            reply,
            usage,
        })
    }

    /// Classifies the conversation so far.
    ///
    /// Every turn is forwarded in order after the system instruction. Every
    /// call is independent: the same turns and the same model output always
    /// give the same reply.
    pub async fn extract(
        &self,
        session_id: &SessionId,
        turns: &[Turn],
    ) -> Result<(AssistantReply, TokenUsage), AssistantError> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let trace_id = Uuid::new_v4().to_string();

        let messages = turns.iter().map(|t| {
            let role = match t.role {
                TurnRole::User => MessageRole::User,
                TurnRole::Assistant => MessageRole::Assistant,
            };
            Message::new(role, t.content.clone())
        });
        let request = CompletionRequest::new(RequestMetadata::new(session_id.clone(), &trace_id))
            .with_system_prompt(system_instruction(today))
            .with_messages(messages)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let provider = self.provider.provider_info();
        tracing::debug!(
            session_id = %session_id,
            trace_id = %trace_id,
            provider = %provider.name,
            turns = request.messages.len(),
            "requesting assistant completion"
        );

        let response = match tokio::time::timeout(self.config.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                tracing::warn!(session_id = %session_id, trace_id = %trace_id, error = %err, "assistant provider failed");
                return Err(AssistantError::Service(err));
            }
            Err(_) => {
                tracing::warn!(session_id = %session_id, trace_id = %trace_id, "assistant provider timed out");
                return Err(AssistantError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                });
            }
        };

        let reply = self.extractor.interpret(&response.content);
        match &reply {
            AssistantReply::Completion { .. } => {
                tracing::info!(session_id = %session_id, trace_id = %trace_id, "assistant reservation complete");
            }
            AssistantReply::Clarification { missing_fields, .. } => {
                tracing::debug!(
                    session_id = %session_id,
                    trace_id = %trace_id,
                    missing = ?missing_fields,
                    "assistant asked for clarification"
                );
            }
        }

        Ok((reply, response.usage))
    }
}

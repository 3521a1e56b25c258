//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler is stateless; the caller supplies the full session state on
//! each command.

pub mod handlers;

pub use handlers::{
    AdvanceWizardCommand, AdvanceWizardHandler, AdvanceWizardResult, AssistantError,
    AssistantHandlerConfig, AssistantTurnCommand, AssistantTurnHandler, AssistantTurnResult,
};

//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod reservation;

pub use reservation::{
    AdvanceWizardCommand, AdvanceWizardHandler, AdvanceWizardResult, AssistantError,
    AssistantHandlerConfig, AssistantTurnCommand, AssistantTurnHandler, AssistantTurnResult,
};

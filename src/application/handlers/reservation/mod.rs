//! Reservation command handlers, one per acquisition mode.

mod advance_wizard;
mod assistant_turn;

pub use advance_wizard::{AdvanceWizardCommand, AdvanceWizardHandler, AdvanceWizardResult};
pub use assistant_turn::{
    AssistantError, AssistantHandlerConfig, AssistantTurnCommand, AssistantTurnHandler,
    AssistantTurnResult,
};

//! AdvanceWizardHandler - Command handler for one wizard answer.

use crate::domain::foundation::SessionId;
use crate::domain::reservation::ReservationDraft;
use crate::domain::wizard::{WizardController, WizardError, WizardOutcome, WizardTurn};

/// Command carrying the caller's state and the new answer.
#[derive(Debug, Clone)]
pub struct AdvanceWizardCommand {
    pub session_id: SessionId,
    pub draft: ReservationDraft,
    pub field_index: usize,
    pub input: String,
}

/// Result of an accepted answer.
#[derive(Debug, Clone)]
pub struct AdvanceWizardResult {
    pub session_id: SessionId,
    pub turn: WizardTurn,
}

/// Handler for wizard answers. Holds no session state.
#[derive(Debug, Clone, Default)]
pub struct AdvanceWizardHandler {
    controller: WizardController,
}

impl AdvanceWizardHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self, cmd: AdvanceWizardCommand) -> Result<AdvanceWizardResult, WizardError> {
        let span = tracing::debug_span!(
            "wizard_step",
            session_id = %cmd.session_id,
            field_index = cmd.field_index
        );
        let _guard = span.enter();

        match self.controller.next(&cmd.draft, cmd.field_index, &cmd.input) {
            Ok(turn) => {
                match &turn.outcome {
                    WizardOutcome::NextField { field, .. } => {
                        tracing::debug!(next_field = %field, "wizard answer accepted");
                    }
                    WizardOutcome::Complete(_) => {
                        tracing::info!("wizard reservation complete");
                    }
                }
                Ok(AdvanceWizardResult {
                    session_id: cmd.session_id,
                    turn,
                })
            }
            Err(err) => {
                tracing::debug!(error = %err, "wizard answer rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reservation::{one_way_draft, FieldError, FieldKey};

    fn command(draft: ReservationDraft, field_index: usize, input: &str) -> AdvanceWizardCommand {
        AdvanceWizardCommand {
            session_id: SessionId::new("wizard-1").unwrap(),
            draft,
            field_index,
            input: input.to_string(),
        }
    }

    #[test]
    fn accepted_answer_returns_updated_draft() {
        let result = AdvanceWizardHandler::new()
            .handle(command(ReservationDraft::new(), 0, "Kadıköy"))
            .unwrap();

        assert_eq!(result.session_id.as_str(), "wizard-1");
        assert_eq!(result.turn.draft.from_location.as_deref(), Some("Kadıköy"));
        assert_eq!(result.turn.step.index(), 1);
    }

    #[test]
    fn last_answer_completes_reservation() {
        let mut draft = one_way_draft();
        draft.notes = None;

        let result = AdvanceWizardHandler::new()
            .handle(command(draft, FieldKey::Notes.order_index(), "Valiz çok"))
            .unwrap();

        assert!(result.turn.is_complete());
        let WizardOutcome::Complete(record) = result.turn.outcome else {
            panic!("expected completion");
        };
        assert_eq!(record.notes(), "Valiz çok");
    }

    #[test]
    fn rejected_answer_is_returned_as_error() {
        let err = AdvanceWizardHandler::new()
            .handle(command(ReservationDraft::new(), 0, ""))
            .unwrap_err();

        assert_eq!(
            err,
            WizardError::Invalid(FieldError::Empty {
                field: FieldKey::FromLocation
            })
        );
    }
}

//! WizardStep - the wizard's position in the field sequence.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::reservation::FieldKey;

/// Index into [`FieldKey::ORDER`]; `FieldKey::COUNT` is the terminal state.
///
/// The only transition is `i -> i + 1`. There is no way back: revising an
/// earlier answer means starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardStep(usize);

impl WizardStep {
    /// First field of a fresh session.
    pub fn start() -> Self {
        Self(0)
    }

    /// Terminal step reached after the last field is accepted.
    pub fn complete() -> Self {
        Self(FieldKey::COUNT)
    }

    /// Step for a caller-supplied index, or None if it lies past the terminal step.
    pub fn at(index: usize) -> Option<Self> {
        (index <= FieldKey::COUNT).then_some(Self(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Field collected at this step; None once complete.
    pub fn field(&self) -> Option<FieldKey> {
        FieldKey::at(self.0)
    }

    /// Number of answered fields and the total, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.0, FieldKey::COUNT)
    }

    /// Moves to the following step.
    pub fn advance(&self) -> Result<Self, ValidationError> {
        self.transition_to(Self(self.0 + 1))
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.0 < FieldKey::COUNT && target.0 == self.0 + 1
    }

    fn valid_transitions(&self) -> Vec<Self> {
        if self.0 < FieldKey::COUNT {
            vec![Self(self.0 + 1)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_collects_first_field() {
        assert_eq!(WizardStep::start().field(), Some(FieldKey::FromLocation));
    }

    #[test]
    fn advance_moves_forward_by_one() {
        let step = WizardStep::start().advance().unwrap();
        assert_eq!(step.index(), 1);
        assert_eq!(step.field(), Some(FieldKey::ToLocation));
    }

    #[test]
    fn skipping_and_going_back_are_rejected() {
        let step = WizardStep::at(3).unwrap();
        assert!(step.transition_to(WizardStep(5)).is_err());
        assert!(step.transition_to(WizardStep(2)).is_err());
        assert!(step.transition_to(step).is_err());
    }

    #[test]
    fn complete_is_terminal() {
        let done = WizardStep::complete();
        assert!(done.is_terminal());
        assert!(done.field().is_none());
        assert!(done.advance().is_err());
        assert!(!WizardStep::start().is_terminal());
    }

    #[test]
    fn at_rejects_indices_past_terminal() {
        assert_eq!(WizardStep::at(FieldKey::COUNT), Some(WizardStep::complete()));
        assert_eq!(WizardStep::at(FieldKey::COUNT + 1), None);
    }

    #[test]
    fn walking_every_step_reaches_complete() {
        let mut step = WizardStep::start();
        while !step.is_terminal() {
            step = step.advance().unwrap();
        }
        assert_eq!(step, WizardStep::complete());
        assert_eq!(step.progress(), (FieldKey::COUNT, FieldKey::COUNT));
    }
}

//! WizardController - deterministic, one-field-at-a-time reservation form.
//!
//! `next(draft, field_index, raw_input)` validates the input against the field
//! at `field_index` only. On success the value is written, the index advances
//! and the caller should clear its input box; on failure nothing changes.

use thiserror::Error;

use super::WizardStep;
use crate::domain::reservation::validator::{self, ScheduleFormat};
use crate::domain::reservation::{FieldError, FieldKey, ReservationDraft, ReservationRecord};

/// Errors returned by [`WizardController::next`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The answer failed the current field's rule; re-ask the same field.
    #[error(transparent)]
    Invalid(#[from] FieldError),

    /// The caller is already past the last field.
    #[error("all reservation fields have been collected")]
    AlreadyComplete,

    #[error("field index {index} is out of range (0..={max})")]
    InvalidFieldIndex { index: usize, max: usize },

    /// The final check failed, which only happens when the caller altered the
    /// draft between turns.
    #[error("draft failed final validation: {0}")]
    InconsistentDraft(FieldError),
}

/// What the caller should do after an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Ask the next field.
    NextField { field: FieldKey, prompt: &'static str },
    /// Every field is collected; show the record for confirmation.
    Complete(ReservationRecord),
}

/// Result of an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTurn {
    pub draft: ReservationDraft,
    pub step: WizardStep,
    pub outcome: WizardOutcome,
}

impl WizardTurn {
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, WizardOutcome::Complete(_))
    }
}

/// Stateless controller; every call receives the full draft and position.
#[derive(Debug, Clone, Copy, Default)]
pub struct WizardController;

impl WizardController {
    pub fn new() -> Self {
        Self
    }

    /// First question of a new session.
    pub fn first_prompt(&self) -> (FieldKey, &'static str) {
        let field = FieldKey::ORDER[0];
        (field, field.prompt())
    }

    /// Validates `raw_input` for the field at `field_index` and advances.
    pub fn next(
        &self,
        draft: &ReservationDraft,
        field_index: usize,
        raw_input: &str,
    ) -> Result<WizardTurn, WizardError> {
        let step = WizardStep::at(field_index).ok_or(WizardError::InvalidFieldIndex {
            index: field_index,
            max: FieldKey::COUNT,
        })?;
        let field = step.field().ok_or(WizardError::AlreadyComplete)?;

        let mut draft = draft.clone();
        apply_answer(&mut draft, field, raw_input)?;

        // `step` is before the terminal index here, so advancing cannot fail.
        let step = step.advance().map_err(|_| WizardError::AlreadyComplete)?;

        let outcome = match step.field() {
            Some(next) => WizardOutcome::NextField {
                field: next,
                prompt: next.prompt(),
            },
            None => WizardOutcome::Complete(
                draft
                    .promote(ScheduleFormat::AsGiven)
                    .map_err(WizardError::InconsistentDraft)?,
            ),
        };

        Ok(WizardTurn {
            draft,
            step,
            outcome,
        })
    }
}

/// Parses and validates one answer, writing it into the draft on success.
fn apply_answer(
    draft: &mut ReservationDraft,
    field: FieldKey,
    raw: &str,
) -> Result<(), FieldError> {
    let format = ScheduleFormat::AsGiven;

    match field {
        FieldKey::FromLocation => {
            draft.from_location = Some(validator::required_text(field, raw)?);
        }
        FieldKey::ToLocation => {
            draft.to_location = Some(validator::required_text(field, raw)?);
        }
        FieldKey::TripType => {
            draft.trip_type = Some(validator::trip_type(raw)?);
        }
        FieldKey::DepartureDate => {
            draft.departure_date = Some(validator::schedule_date(field, raw, format, true)?);
        }
        FieldKey::DepartureTime => {
            draft.departure_time = Some(validator::schedule_time(field, raw, format, true)?);
        }
        FieldKey::ReturnDate => {
            let required = return_required(draft, field)?;
            draft.return_date = Some(validator::schedule_date(field, raw, format, required)?);
        }
        FieldKey::ReturnTime => {
            let required = return_required(draft, field)?;
            draft.return_time = Some(validator::schedule_time(field, raw, format, required)?);
        }
        FieldKey::VehicleType => {
            draft.vehicle_type = Some(validator::vehicle_type(raw)?);
        }
        FieldKey::Passengers => {
            let count = validator::parse_integer(field, raw)?;
            draft.passengers = Some(validator::passenger_count(count)?);
        }
        FieldKey::PassengerNames => {
            let expected = draft.passengers.ok_or(FieldError::Prerequisite {
                field,
                requires: FieldKey::Passengers,
            })?;
            draft.passenger_names = Some(validator::passenger_names(
                validator::split_list(raw),
                expected,
            )?);
        }
        FieldKey::ExtraServices => {
            draft.extra_services = Some(validator::extra_services(validator::split_list(raw))?);
        }
        FieldKey::CustomerName => {
            draft.customer_name = Some(validator::required_text(field, raw)?);
        }
        FieldKey::CustomerEmail => {
            draft.customer_email = Some(validator::required_text(field, raw)?);
        }
        FieldKey::CustomerPhone => {
            draft.customer_phone = Some(validator::required_text(field, raw)?);
        }
        FieldKey::Notes => {
            draft.notes = Some(validator::optional_text(raw));
        }
    }

    Ok(())
}

fn return_required(draft: &ReservationDraft, field: FieldKey) -> Result<bool, FieldError> {
    draft
        .trip_type
        .map(|t| t.requires_return())
        .ok_or(FieldError::Prerequisite {
            field,
            requires: FieldKey::TripType,
        })
}

//! Model output interpretation for the conversational assistant.
//!
//! The inference provider's reply is untrusted text. [`ConversationalExtractor`]
//! turns it into an [`AssistantReply`] in two stages: locate a JSON object
//! inside the text, then validate any reservation it carries with the same
//! field rules the wizard uses. A reply is only a `Completion` if every field
//! passes; everything else degrades to a `Clarification`.

use serde_json::{Map, Value};

use crate::domain::reservation::validator::{self, ScheduleFormat};
use crate::domain::reservation::{FieldError, FieldKey, ReservationDraft, ReservationRecord};

/// Longest model reply scanned for a JSON object (100KB). Anything longer is
/// returned to the caller untouched.
pub const MAX_RESPONSE_LENGTH: usize = 100_000;

/// Classification of one assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantReply {
    /// Every field passed validation.
    Completion { record: ReservationRecord },
    /// More information is needed. `message` is shown to the customer and
    /// appended to the history; `missing_fields` is empty when the model
    /// asked in free text.
    Clarification {
        message: String,
        missing_fields: Vec<FieldKey>,
    },
}

impl AssistantReply {
    pub fn clarification(message: impl Into<String>) -> Self {
        Self::Clarification {
            message: message.into(),
            missing_fields: Vec::new(),
        }
    }

    /// Re-prompt for one field whose value was missing or invalid.
    pub fn ask_for(field: FieldKey) -> Self {
        Self::Clarification {
            message: field.prompt().to_string(),
            missing_fields: vec![field],
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion { .. })
    }

    /// Text to show and to append to the history as the assistant's turn.
    pub fn message(&self) -> String {
        match self {
            Self::Completion { record } => record.summary(),
            Self::Clarification { message, .. } => message.clone(),
        }
    }
}

/// Interprets raw model output. Stateless: the same input always yields the
/// same reply.
///
/// Text is never rewritten: a `message` is surfaced exactly as the model
/// wrote it, and every fallback returns the raw reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversationalExtractor;

impl ConversationalExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn interpret(&self, raw: &str) -> AssistantReply {
        if raw.len() > MAX_RESPONSE_LENGTH {
            tracing::warn!(len = raw.len(), max = MAX_RESPONSE_LENGTH, "model output too long to scan");
            return AssistantReply::clarification(raw);
        }

        let Some(object) = locate_object(raw) else {
            tracing::debug!("model output carries no JSON object");
            return AssistantReply::clarification(raw);
        };

        if let Some(reservation) = object.get("reservation") {
            let Value::Object(fields) = reservation else {
                tracing::warn!("reservation is not a JSON object");
                return AssistantReply::clarification(raw);
            };
            return match read_reservation(fields) {
                Ok(record) => AssistantReply::Completion { record },
                Err(err) => {
                    tracing::warn!(field = %err.field(), error = %err, "reservation failed validation");
                    AssistantReply::ask_for(err.field())
                }
            };
        }

        match object.get("message") {
            Some(Value::String(message)) => AssistantReply::clarification(message.as_str()),
            _ => AssistantReply::clarification(raw),
        }
    }
}

/// Finds the first JSON object in `text`.
///
/// Tries the balanced-brace substring starting at the first `{`, then the
/// span from the first `{` to the last `}`.
fn locate_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;

    let balanced = balanced_object(text, start);
    let widest = text.rfind('}').filter(|end| *end > start).map(|end| &text[start..=end]);

    [balanced, widest]
        .into_iter()
        .flatten()
        .find_map(|candidate| match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
}

/// Substring from `start` to its matching close brace, skipping braces inside
/// string literals.
fn balanced_object(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Validates a `reservation` object field by field in collection order.
fn read_reservation(fields: &Map<String, Value>) -> Result<ReservationRecord, FieldError> {
    let mut draft = ReservationDraft::new();
    for field in FieldKey::ORDER {
        read_field(&mut draft, field, fields.get(field.as_str()))?;
    }
    draft.promote(ScheduleFormat::Iso)
}

fn read_field(
    draft: &mut ReservationDraft,
    field: FieldKey,
    value: Option<&Value>,
) -> Result<(), FieldError> {
    let format = ScheduleFormat::Iso;

    match field {
        FieldKey::FromLocation => {
            draft.from_location = Some(validator::required_text(field, json_text(field, value)?)?);
        }
        FieldKey::ToLocation => {
            draft.to_location = Some(validator::required_text(field, json_text(field, value)?)?);
        }
        FieldKey::TripType => {
            draft.trip_type = Some(validator::trip_type(json_text(field, value)?)?);
        }
        FieldKey::DepartureDate => {
            draft.departure_date =
                Some(validator::schedule_date(field, json_text(field, value)?, format, true)?);
        }
        FieldKey::DepartureTime => {
            draft.departure_time =
                Some(validator::schedule_time(field, json_text(field, value)?, format, true)?);
        }
        FieldKey::ReturnDate => {
            // Ignored on one-way trips, placeholders included.
            draft.return_date = Some(if return_required(draft, field)? {
                validator::schedule_date(field, json_text(field, value)?, format, true)?
            } else {
                String::new()
            });
        }
        FieldKey::ReturnTime => {
            draft.return_time = Some(if return_required(draft, field)? {
                validator::schedule_time(field, json_text(field, value)?, format, true)?
            } else {
                String::new()
            });
        }
        FieldKey::VehicleType => {
            draft.vehicle_type = Some(validator::vehicle_type(json_text(field, value)?)?);
        }
        FieldKey::Passengers => {
            draft.passengers = Some(validator::passenger_count(json_integer(field, value)?)?);
        }
        FieldKey::PassengerNames => {
            let names = json_text_list(field, value)?.ok_or(FieldError::Missing { field })?;
            let expected = draft.passengers.ok_or(FieldError::Prerequisite {
                field,
                requires: FieldKey::Passengers,
            })?;
            draft.passenger_names = Some(validator::passenger_names(names, expected)?);
        }
        FieldKey::ExtraServices => {
            let items = json_text_list(field, value)?.unwrap_or_default();
            draft.extra_services = Some(validator::extra_services(items)?);
        }
        FieldKey::CustomerName => {
            draft.customer_name = Some(validator::required_text(field, json_text(field, value)?)?);
        }
        FieldKey::CustomerEmail => {
            draft.customer_email = Some(validator::required_text(field, json_text(field, value)?)?);
        }
        FieldKey::CustomerPhone => {
            draft.customer_phone = Some(validator::required_text(field, json_text(field, value)?)?);
        }
        FieldKey::Notes => {
            draft.notes = Some(validator::optional_text(
                json_optional_text(field, value)?.unwrap_or_default(),
            ));
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

/// A present JSON string.
fn json_text(field: FieldKey, value: Option<&Value>) -> Result<&str, FieldError> {
    json_optional_text(field, value)?.ok_or(FieldError::Missing { field })
}

/// A JSON string, or None when absent or null.
fn json_optional_text(field: FieldKey, value: Option<&Value>) -> Result<Option<&str>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(FieldError::WrongType {
            field,
            expected: "metin",
        }),
    }
}

fn json_integer(field: FieldKey, value: Option<&Value>) -> Result<i64, FieldError> {
    match value {
        None | Some(Value::Null) => Err(FieldError::Missing { field }),
        Some(Value::Number(n)) => n.as_i64().ok_or(FieldError::WrongType {
            field,
            expected: "tam sayı",
        }),
        Some(_) => Err(FieldError::WrongType {
            field,
            expected: "tam sayı",
        }),
    }
}

/// A JSON array of strings, or None when absent or null.
fn json_text_list(field: FieldKey, value: Option<&Value>) -> Result<Option<Vec<String>>, FieldError> {
    let wrong_type = || FieldError::WrongType {
        field,
        expected: "metin listesi",
    };
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(wrong_type))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(wrong_type()),
    }
}

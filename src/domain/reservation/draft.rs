//! ReservationDraft and its promoted, immutable form ReservationRecord.

use serde::{Deserialize, Serialize};

use super::validator::{self, ScheduleFormat};
use super::{ExtraService, FieldError, FieldKey, TripType, VehicleType};

/// A partially filled reservation.
///
/// Owned by the caller between turns and passed back whole on every call.
/// Unanswered fields are `None`; optional fields answered empty are `Some("")`
/// (or an empty list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<TripType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_services: Option<Vec<ExtraService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReservationDraft {
    /// Creates an empty draft for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every field in collection order and promotes the draft.
    ///
    /// Returns the first missing or invalid field otherwise. `returnDate` and
    /// `returnTime` are only read for round trips and are cleared on one-way
    /// trips; `extraServices` and `notes` default to empty.
    pub fn promote(&self, format: ScheduleFormat) -> Result<ReservationRecord, FieldError> {
        let from_location = validator::required_text(
            FieldKey::FromLocation,
            required(&self.from_location, FieldKey::FromLocation)?,
        )?;
        let to_location = validator::required_text(
            FieldKey::ToLocation,
            required(&self.to_location, FieldKey::ToLocation)?,
        )?;
        let trip_type = self.trip_type.ok_or(FieldError::Missing {
            field: FieldKey::TripType,
        })?;
        let departure_date = validator::schedule_date(
            FieldKey::DepartureDate,
            required(&self.departure_date, FieldKey::DepartureDate)?,
            format,
            true,
        )?;
        let departure_time = validator::schedule_time(
            FieldKey::DepartureTime,
            required(&self.departure_time, FieldKey::DepartureTime)?,
            format,
            true,
        )?;

        // One-way trips carry no return schedule, whatever was written there.
        let (return_date, return_time) = if trip_type.requires_return() {
            (
                validator::schedule_date(
                    FieldKey::ReturnDate,
                    required(&self.return_date, FieldKey::ReturnDate)?,
                    format,
                    true,
                )?,
                validator::schedule_time(
                    FieldKey::ReturnTime,
                    required(&self.return_time, FieldKey::ReturnTime)?,
                    format,
                    true,
                )?,
            )
        } else {
            (String::new(), String::new())
        };

        let vehicle_type = self.vehicle_type.ok_or(FieldError::Missing {
            field: FieldKey::VehicleType,
        })?;
        let passengers = validator::passenger_count(i64::from(self.passengers.ok_or(
            FieldError::Missing {
                field: FieldKey::Passengers,
            },
        )?))?;
        let passenger_names = validator::passenger_names(
            self.passenger_names.clone().ok_or(FieldError::Missing {
                field: FieldKey::PassengerNames,
            })?,
            passengers,
        )?;
        let extra_services = validator::extra_services(
            self.extra_services
                .iter()
                .flatten()
                .map(|s| s.as_str().to_string())
                .collect(),
        )?;

        let customer_name = validator::required_text(
            FieldKey::CustomerName,
            required(&self.customer_name, FieldKey::CustomerName)?,
        )?;
        let customer_email = validator::required_text(
            FieldKey::CustomerEmail,
            required(&self.customer_email, FieldKey::CustomerEmail)?,
        )?;
        let customer_phone = validator::required_text(
            FieldKey::CustomerPhone,
            required(&self.customer_phone, FieldKey::CustomerPhone)?,
        )?;
        let notes = validator::optional_text(self.notes.as_deref().unwrap_or_default());

        Ok(ReservationRecord {
            from_location,
            to_location,
            trip_type,
            departure_date,
            departure_time,
            return_date,
            return_time,
            vehicle_type,
            passengers,
            passenger_names,
            extra_services,
            customer_name,
            customer_email,
            customer_phone,
            notes,
        })
    }
}

fn required(value: &Option<String>, field: FieldKey) -> Result<&str, FieldError> {
    value.as_deref().ok_or(FieldError::Missing { field })
}

/// A complete, validated reservation.
///
/// Only obtainable through [`ReservationDraft::promote`], so every instance
/// satisfies all field rules. Serializes to the camelCase record shape that
/// downstream consumers (notification, persistence) expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    from_location: String,
    to_location: String,
    trip_type: TripType,
    departure_date: String,
    departure_time: String,
    return_date: String,
    return_time: String,
    vehicle_type: VehicleType,
    passengers: u32,
    passenger_names: Vec<String>,
    extra_services: Vec<ExtraService>,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    notes: String,
}

impl ReservationRecord {
    pub fn from_location(&self) -> &str {
        &self.from_location
    }

    pub fn to_location(&self) -> &str {
        &self.to_location
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn departure_date(&self) -> &str {
        &self.departure_date
    }

    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    /// Empty for one-way trips unless the customer gave one anyway.
    pub fn return_date(&self) -> &str {
        &self.return_date
    }

    pub fn return_time(&self) -> &str {
        &self.return_time
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn passenger_names(&self) -> &[String] {
        &self.passenger_names
    }

    pub fn extra_services(&self) -> &[ExtraService] {
        &self.extra_services
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Human-readable Turkish summary for the caller's confirmation step.
    ///
    /// One `Label: value` line per field; return lines are omitted for one-way
    /// trips and empty optional fields read "-".
    pub fn summary(&self) -> String {
        let dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

        let mut lines = vec![
            (FieldKey::FromLocation, self.from_location.clone()),
            (FieldKey::ToLocation, self.to_location.clone()),
            (FieldKey::TripType, self.trip_type.label().to_string()),
            (FieldKey::DepartureDate, self.departure_date.clone()),
            (FieldKey::DepartureTime, self.departure_time.clone()),
        ];
        if self.trip_type.requires_return() {
            lines.push((FieldKey::ReturnDate, self.return_date.clone()));
            lines.push((FieldKey::ReturnTime, self.return_time.clone()));
        }
        let extras = self
            .extra_services
            .iter()
            .map(ExtraService::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        lines.extend([
            (FieldKey::VehicleType, self.vehicle_type.to_string()),
            (FieldKey::Passengers, self.passengers.to_string()),
            (FieldKey::PassengerNames, self.passenger_names.join(", ")),
            (FieldKey::ExtraServices, dash(&extras)),
            (FieldKey::CustomerName, self.customer_name.clone()),
            (FieldKey::CustomerEmail, self.customer_email.clone()),
            (FieldKey::CustomerPhone, self.customer_phone.clone()),
            (FieldKey::Notes, dash(&self.notes)),
        ]);

        lines
            .into_iter()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

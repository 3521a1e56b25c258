//! Field rules shared by the wizard and the conversational extractor.
//!
//! Each rule takes an already-typed value (the wizard parses raw text, the
//! extractor reads JSON) and returns the normalized value or a [`FieldError`].
//! Normalization is limited to trimming surrounding whitespace.

use chrono::{NaiveDate, NaiveTime};

use super::values::literal_list;
use super::{ExtraService, FieldError, FieldKey, TripType, VehicleType};

/// How strictly schedule fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    /// Any non-empty text (wizard input).
    AsGiven,
    /// `YYYY-MM-DD` dates and 24h `HH:MM` times (extractor output).
    Iso,
}

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_TIME: &str = "%H:%M";

/// Non-empty free text.
pub fn required_text(field: FieldKey, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Free text that may be empty.
pub fn optional_text(value: &str) -> String {
    value.trim().to_string()
}

pub fn trip_type(value: &str) -> Result<TripType, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty {
            field: FieldKey::TripType,
        });
    }
    trimmed.parse().map_err(|_| FieldError::NotAllowed {
        field: FieldKey::TripType,
        value: trimmed.to_string(),
        allowed: literal_list(&TripType::ALL),
    })
}

pub fn vehicle_type(value: &str) -> Result<VehicleType, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty {
            field: FieldKey::VehicleType,
        });
    }
    trimmed.parse().map_err(|_| FieldError::NotAllowed {
        field: FieldKey::VehicleType,
        value: trimmed.to_string(),
        allowed: literal_list(&VehicleType::ALL),
    })
}

/// Parses typed-in text as a signed integer for [`passenger_count`].
pub fn parse_integer(field: FieldKey, raw: &str) -> Result<i64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    trimmed.parse::<i64>().map_err(|_| FieldError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Passenger count must be at least one.
pub fn passenger_count(value: i64) -> Result<u32, FieldError> {
    if value < 1 {
        return Err(FieldError::BelowMinimum {
            field: FieldKey::Passengers,
            min: 1,
            actual: value,
        });
    }
    u32::try_from(value).map_err(|_| FieldError::NotANumber {
        field: FieldKey::Passengers,
        value: value.to_string(),
    })
}

/// Splits a comma-separated answer, trimming tokens and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// One non-empty name per passenger, order preserved.
pub fn passenger_names(names: Vec<String>, expected: u32) -> Result<Vec<String>, FieldError> {
    let field = FieldKey::PassengerNames;
    let names = names
        .into_iter()
        .map(|name| required_text(field, &name))
        .collect::<Result<Vec<_>, _>>()?;

    let expected = expected as usize;
    if names.len() != expected {
        return Err(FieldError::CountMismatch {
            field,
            expected,
            actual: names.len(),
        });
    }
    Ok(names)
}

/// Catalogue items, each at most once. An empty list is valid.
pub fn extra_services(items: Vec<String>) -> Result<Vec<ExtraService>, FieldError> {
    let field = FieldKey::ExtraServices;
    let mut services = Vec::with_capacity(items.len());

    for item in items {
        let trimmed = item.trim();
        let service: ExtraService = trimmed.parse().map_err(|_| FieldError::NotAllowed {
            field,
            value: trimmed.to_string(),
            allowed: literal_list(&ExtraService::CATALOGUE),
        })?;
        if services.contains(&service) {
            return Err(FieldError::Duplicate {
                field,
                value: trimmed.to_string(),
            });
        }
        services.push(service);
    }

    Ok(services)
}

/// Departure or return date. Empty input is only accepted when `required` is false.
pub fn schedule_date(
    field: FieldKey,
    value: &str,
    format: ScheduleFormat,
    required: bool,
) -> Result<String, FieldError> {
    schedule_value(field, value, format, required, "YYYY-MM-DD", |v| {
        v.len() == 10 && NaiveDate::parse_from_str(v, ISO_DATE).is_ok()
    })
}

/// Departure or return time. Empty input is only accepted when `required` is false.
pub fn schedule_time(
    field: FieldKey,
    value: &str,
    format: ScheduleFormat,
    required: bool,
) -> Result<String, FieldError> {
    schedule_value(field, value, format, required, "HH:MM", |v| {
        v.len() == 5 && NaiveTime::parse_from_str(v, ISO_TIME).is_ok()
    })
}

fn schedule_value(
    field: FieldKey,
    value: &str,
    format: ScheduleFormat,
    required: bool,
    expected: &'static str,
    is_iso: impl Fn(&str) -> bool,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required {
            Err(FieldError::Empty { field })
        } else {
            Ok(String::new())
        };
    }
    if format == ScheduleFormat::Iso && !is_iso(trimmed) {
        return Err(FieldError::BadFormat {
            field,
            value: trimmed.to_string(),
            expected,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(
            required_text(FieldKey::FromLocation, "  Kadıköy "),
            Ok("Kadıköy".to_string())
        );
        assert_eq!(
            required_text(FieldKey::FromLocation, "   "),
            Err(FieldError::Empty {
                field: FieldKey::FromLocation
            })
        );
    }

    #[test]
    fn vehicle_type_lists_allowed_literals_on_error() {
        let err = vehicle_type("Minibüs").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Araç tipi şunlardan biri olmalı: Ekonomi VIP Class, Bus VIP Class (girilen: 'Minibüs')"
        );
    }

    #[test]
    fn passenger_count_requires_positive_integer() {
        assert_eq!(passenger_count(3), Ok(3));
        assert!(matches!(
            passenger_count(0),
            Err(FieldError::BelowMinimum { min: 1, actual: 0, .. })
        ));
        assert!(passenger_count(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn parse_integer_rejects_words_and_decimals() {
        assert_eq!(parse_integer(FieldKey::Passengers, " 4 "), Ok(4));
        assert!(matches!(
            parse_integer(FieldKey::Passengers, "iki"),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(parse_integer(FieldKey::Passengers, "2.5").is_err());
    }

    #[test]
    fn split_list_drops_empty_tokens() {
        assert_eq!(
            split_list(" Ayşe Yılmaz, ,Mehmet Kaya,, "),
            vec!["Ayşe Yılmaz".to_string(), "Mehmet Kaya".to_string()]
        );
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn passenger_names_must_match_count() {
        let names = vec!["Ayşe".to_string(), "Mehmet".to_string()];
        assert_eq!(passenger_names(names.clone(), 2), Ok(names.clone()));
        assert_eq!(
            passenger_names(names, 3),
            Err(FieldError::CountMismatch {
                field: FieldKey::PassengerNames,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn passenger_names_rejects_blank_entries() {
        let names = vec!["Ayşe".to_string(), " ".to_string()];
        assert!(matches!(
            passenger_names(names, 2),
            Err(FieldError::Empty { .. })
        ));
    }

    #[test]
    fn extra_services_accepts_catalogue_items_once() {
        assert_eq!(extra_services(vec![]), Ok(vec![]));
        assert_eq!(
            extra_services(vec!["Ek Bagaj".into(), "Bebek Koltuğu".into()]),
            Ok(vec![ExtraService::ExtraLuggage, ExtraService::BabySeat])
        );
        assert!(matches!(
            extra_services(vec!["Ek Bagaj".into(), "Ek Bagaj".into()]),
            Err(FieldError::Duplicate { .. })
        ));
        assert!(matches!(
            extra_services(vec!["Wi-Fi".into()]),
            Err(FieldError::NotAllowed { .. })
        ));
    }

    #[test]
    fn as_given_schedule_accepts_free_text() {
        assert_eq!(
            schedule_date(FieldKey::DepartureDate, "yarın", ScheduleFormat::AsGiven, true),
            Ok("yarın".to_string())
        );
    }

    #[test]
    fn iso_schedule_rejects_loose_formats() {
        let date = |v| schedule_date(FieldKey::DepartureDate, v, ScheduleFormat::Iso, true);
        assert!(date("2025-07-14").is_ok());
        assert!(date("2025-7-14").is_err());
        assert!(date("14.07.2025").is_err());
        assert!(date("2025-02-30").is_err());

        let time = |v| schedule_time(FieldKey::DepartureTime, v, ScheduleFormat::Iso, true);
        assert!(time("09:30").is_ok());
        assert!(time("9:30").is_err());
        assert!(time("21:75").is_err());
        assert!(time("9 pm").is_err());
    }

    #[test]
    fn optional_schedule_accepts_empty() {
        assert_eq!(
            schedule_time(FieldKey::ReturnTime, "", ScheduleFormat::Iso, false),
            Ok(String::new())
        );
        assert_eq!(
            schedule_time(FieldKey::ReturnTime, " ", ScheduleFormat::Iso, true),
            Err(FieldError::Empty {
                field: FieldKey::ReturnTime
            })
        );
    }
}

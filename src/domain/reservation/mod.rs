//! Reservation data model and the validation rules shared by both
//! acquisition modes.
//!
//! - `field` - field keys, collection order and prompts
//! - `values` - closed enums (trip type, vehicle class, extras catalogue)
//! - `validator` - per-field rules
//! - `draft` - `ReservationDraft` and the promoted `ReservationRecord`

mod draft;
mod errors;
mod field;
pub mod validator;
mod values;

pub use draft::{ReservationDraft, ReservationRecord};
pub use errors::FieldError;
pub use field::FieldKey;
pub use validator::ScheduleFormat;
pub use values::{ExtraService, TripType, VehicleType};

#[cfg(test)]
pub(crate) use draft::tests::one_way_draft;

//! Domain layer containing the reservation acquisition logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, state machine trait)
//! - `reservation` - Reservation fields, value sets and validation rules
//! - `wizard` - Step-by-step form controller
//! - `assistant` - Conversational extractor and its system instruction

pub mod assistant;
pub mod foundation;
pub mod reservation;
pub mod wizard;

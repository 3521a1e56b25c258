//! Transfer Booking - reservation data acquisition engine
//!
//! Collects a validated ground-transfer reservation either through a
//! step-by-step form wizard or through a conversational assistant that
//! extracts the same fields from free text.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Closed value sets of a reservation: trip type, vehicle class and extras.
//!
//! Each enum parses only its exact wire literal. Free text that merely
//! resembles a literal is rejected by the validator, never coerced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    #[serde(rename = "one-way")]
    OneWay,
    #[serde(rename = "round-trip")]
    RoundTrip,
}

impl TripType {
    pub const ALL: [TripType; 2] = [TripType::OneWay, TripType::RoundTrip];

    /// Wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
        }
    }

    /// Turkish label used in confirmation summaries.
    pub fn label(&self) -> &'static str {
        match self {
            TripType::OneWay => "Tek yön",
            TripType::RoundTrip => "Gidiş-dönüş",
        }
    }

    /// Returns true when return date and time are mandatory.
    pub fn requires_return(&self) -> bool {
        matches!(self, TripType::RoundTrip)
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

/// Vehicle class offered for the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Ekonomi VIP Class")]
    EkonomiVip,
    #[serde(rename = "Bus VIP Class")]
    BusVip,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::EkonomiVip, VehicleType::BusVip];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::EkonomiVip => "Ekonomi VIP Class",
            VehicleType::BusVip => "Bus VIP Class",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(())
    }
}

/// Optional add-on from the service catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraService {
    #[serde(rename = "Bebek Koltuğu")]
    BabySeat,
    #[serde(rename = "Ek Bagaj")]
    ExtraLuggage,
    #[serde(rename = "Karşılama Hizmeti")]
    MeetAndGreet,
}

impl ExtraService {
    pub const CATALOGUE: [ExtraService; 3] = [
        ExtraService::BabySeat,
        ExtraService::ExtraLuggage,
        ExtraService::MeetAndGreet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraService::BabySeat => "Bebek Koltuğu",
            ExtraService::ExtraLuggage => "Ek Bagaj",
            ExtraService::MeetAndGreet => "Karşılama Hizmeti",
        }
    }
}

impl fmt::Display for ExtraService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraService {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtraService::CATALOGUE
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or(())
    }
}

/// Joins literals for error messages and prompts.
pub(crate) fn literal_list<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

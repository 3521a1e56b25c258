//! Field keys of a reservation and their fixed collection order.
//!
//! The order is route → trip type → schedule → vehicle → party → contact → notes.
//! The wizard walks it one index at a time; the extractor validates in the same
//! order so that "first invalid field" means the same thing in both modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of a single reservation field, serialized as its camelCase wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FromLocation,
    ToLocation,
    TripType,
    DepartureDate,
    DepartureTime,
    ReturnDate,
    ReturnTime,
    VehicleType,
    Passengers,
    PassengerNames,
    ExtraServices,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    Notes,
}

impl FieldKey {
    /// Canonical collection order.
    pub const ORDER: [FieldKey; 15] = [
        FieldKey::FromLocation,
        FieldKey::ToLocation,
        FieldKey::TripType,
        FieldKey::DepartureDate,
        FieldKey::DepartureTime,
        FieldKey::ReturnDate,
        FieldKey::ReturnTime,
        FieldKey::VehicleType,
        FieldKey::Passengers,
        FieldKey::PassengerNames,
        FieldKey::ExtraServices,
        FieldKey::CustomerName,
        FieldKey::CustomerEmail,
        FieldKey::CustomerPhone,
        FieldKey::Notes,
    ];

    /// Number of fields, which is also the terminal wizard index.
    pub const COUNT: usize = Self::ORDER.len();

    /// Returns the field collected at `index`, or None past the end.
    pub fn at(index: usize) -> Option<FieldKey> {
        Self::ORDER.get(index).copied()
    }

    /// Returns the 0-based position of this field in the collection order.
    pub fn order_index(&self) -> usize {
        match self {
            FieldKey::FromLocation => 0,
            FieldKey::ToLocation => 1,
            FieldKey::TripType => 2,
            FieldKey::DepartureDate => 3,
            FieldKey::DepartureTime => 4,
            FieldKey::ReturnDate => 5,
            FieldKey::ReturnTime => 6,
            FieldKey::VehicleType => 7,
            FieldKey::Passengers => 8,
            FieldKey::PassengerNames => 9,
            FieldKey::ExtraServices => 10,
            FieldKey::CustomerName => 11,
            FieldKey::CustomerEmail => 12,
            FieldKey::CustomerPhone => 13,
            FieldKey::Notes => 14,
        }
    }

    /// Returns the next field in order, if any.
    pub fn next(&self) -> Option<FieldKey> {
        Self::at(self.order_index() + 1)
    }

    /// camelCase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FromLocation => "fromLocation",
            FieldKey::ToLocation => "toLocation",
            FieldKey::TripType => "tripType",
            FieldKey::DepartureDate => "departureDate",
            FieldKey::DepartureTime => "departureTime",
            FieldKey::ReturnDate => "returnDate",
            FieldKey::ReturnTime => "returnTime",
            FieldKey::VehicleType => "vehicleType",
            FieldKey::Passengers => "passengers",
            FieldKey::PassengerNames => "passengerNames",
            FieldKey::ExtraServices => "extraServices",
            FieldKey::CustomerName => "customerName",
            FieldKey::CustomerEmail => "customerEmail",
            FieldKey::CustomerPhone => "customerPhone",
            FieldKey::Notes => "notes",
        }
    }

    /// Whether the wizard accepts an empty answer for this field.
    ///
    /// `returnDate`/`returnTime` are listed here; the validator still
    /// requires them once the trip type is `round-trip`.
    pub fn accepts_empty(&self) -> bool {
        matches!(
            self,
            FieldKey::ReturnDate | FieldKey::ReturnTime | FieldKey::ExtraServices | FieldKey::Notes
        )
    }

    /// Turkish label for confirmation summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::FromLocation => "Nereden",
            FieldKey::ToLocation => "Nereye",
            FieldKey::TripType => "Yolculuk tipi",
            FieldKey::DepartureDate => "Gidiş tarihi",
            FieldKey::DepartureTime => "Gidiş saati",
            FieldKey::ReturnDate => "Dönüş tarihi",
            FieldKey::ReturnTime => "Dönüş saati",
            FieldKey::VehicleType => "Araç tipi",
            FieldKey::Passengers => "Yolcu sayısı",
            FieldKey::PassengerNames => "Yolcu adları",
            FieldKey::ExtraServices => "Ek hizmetler",
            FieldKey::CustomerName => "Ad soyad",
            FieldKey::CustomerEmail => "E-posta",
            FieldKey::CustomerPhone => "Telefon",
            FieldKey::Notes => "Notlar",
        }
    }

    /// Turkish question asking the customer for this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            FieldKey::FromLocation => {
                "Nereden alınmak istersiniz? (şehir, ilçe, havalimanı, otel veya adres)"
            }
            FieldKey::ToLocation => "Nereye gitmek istersiniz?",
            FieldKey::TripType => "Yolculuk tipi nedir? (one-way veya round-trip)",
            FieldKey::DepartureDate => "Gidiş tarihiniz nedir? (YYYY-AA-GG)",
            FieldKey::DepartureTime => "Gidiş saatiniz nedir? (SS:DD, 24 saat)",
            FieldKey::ReturnDate => "Dönüş tarihiniz nedir? (tek yön ise boş bırakabilirsiniz)",
            FieldKey::ReturnTime => "Dönüş saatiniz nedir? (tek yön ise boş bırakabilirsiniz)",
            FieldKey::VehicleType => "Araç tipini seçin: Ekonomi VIP Class veya Bus VIP Class",
            FieldKey::Passengers => "Kaç yolcu seyahat edecek?",
            FieldKey::PassengerNames => "Yolcuların ad soyadlarını virgülle ayırarak yazın.",
            FieldKey::ExtraServices => {
                "Ek hizmet ister misiniz? (Bebek Koltuğu, Ek Bagaj, Karşılama Hizmeti; virgülle ayırın, istemiyorsanız boş bırakın)"
            }
            FieldKey::CustomerName => "İletişim için adınız ve soyadınız nedir?",
            FieldKey::CustomerEmail => "E-posta adresiniz nedir?",
            FieldKey::CustomerPhone => "Telefon numaranız nedir?",
            FieldKey::Notes => "Eklemek istediğiniz bir not var mı? (isteğe bağlı)",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

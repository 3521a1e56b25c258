//! Fixed Turkish system instruction sent ahead of the turn history.

use chrono::NaiveDate;

use crate::domain::reservation::{ExtraService, FieldKey, TripType, VehicleType};

/// Builds the system instruction for the given calendar day.
///
/// Lists every field in collection order with its constraint, the two
/// accepted output shapes and the one-group-per-turn questioning rule.
/// `today` lets the model resolve relative dates such as "yarın".
pub fn system_instruction(today: NaiveDate) -> String {
    let quoted = |items: Vec<&str>| {
        items
            .into_iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let trip_types = quoted(TripType::ALL.iter().map(TripType::as_str).collect());
    let vehicles = quoted(VehicleType::ALL.iter().map(VehicleType::as_str).collect());
    let extras = quoted(ExtraService::CATALOGUE.iter().map(ExtraService::as_str).collect());

    let fields = FieldKey::ORDER
        .iter()
        .map(|field| format!("- {}: {}", field.as_str(), constraint(*field, &trip_types, &vehicles, &extras)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Sen bir havalimanı transfer firmasının rezervasyon asistanısın. \
Görevin müşteriyle Türkçe konuşarak aşağıdaki rezervasyon bilgilerini eksiksiz toplamak.\n\
Bugünün tarihi: {today}. Göreli tarihleri (örneğin \"yarın\") bu tarihe göre YYYY-MM-DD biçimine çevir.\n\
\n\
Alanlar (bu sırayla):\n\
{fields}\n\
\n\
Kurallar:\n\
- Her turda yalnızca bir eksik alan grubunu sor ve yukarıdaki sırayı izle: \
güzergah, yolculuk tipi, tarih ve saat, araç, yolcular, ek hizmetler, iletişim bilgileri, notlar.\n\
- Müşterinin vermediği bir bilgiyi asla uydurma.\n\
- Liste dışındaki araç tiplerini, yolculuk tiplerini veya ek hizmetleri kabul etme; müşteriden listeden seçmesini iste.\n\
- Yanıtın her zaman tek bir JSON nesnesi olsun, başka metin ekleme.\n\
\n\
Yanıt biçimleri:\n\
- Bilgi eksikse: {{\"message\": \"müşteriye sorulacak soru\"}}\n\
- Tüm bilgiler tamamsa: {{\"reservation\": {{ ...yukarıdaki tüm alanlar... }}}}\n"
    )
}

fn constraint(field: FieldKey, trip_types: &str, vehicles: &str, extras: &str) -> String {
    match field {
        FieldKey::FromLocation | FieldKey::ToLocation => "boş olmayan metin".to_string(),
        FieldKey::TripType => format!("şunlardan biri: {trip_types}"),
        FieldKey::DepartureDate => "YYYY-MM-DD".to_string(),
        FieldKey::DepartureTime => "HH:MM (24 saat)".to_string(),
        FieldKey::ReturnDate => {
            "YYYY-MM-DD; yalnızca \"round-trip\" için zorunlu, aksi halde \"\"".to_string()
        }
        FieldKey::ReturnTime => {
            "HH:MM (24 saat); yalnızca \"round-trip\" için zorunlu, aksi halde \"\"".to_string()
        }
        FieldKey::VehicleType => format!("şunlardan biri: {vehicles}"),
        FieldKey::Passengers => "1 veya daha büyük tam sayı".to_string(),
        FieldKey::PassengerNames => {
            "metin dizisi; eleman sayısı passengers ile aynı olmalı".to_string()
        }
        FieldKey::ExtraServices => format!("şunlardan oluşan dizi (boş olabilir): {extras}"),
        FieldKey::CustomerName | FieldKey::CustomerEmail | FieldKey::CustomerPhone => {
            "boş olmayan metin".to_string()
        }
        FieldKey::Notes => "isteğe bağlı metin, yoksa \"\"".to_string(),
    }
}

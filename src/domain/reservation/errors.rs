//! Field-level validation errors.

use thiserror::Error;

use super::FieldKey;

/// A single reservation field failed its rule.
///
/// Always recoverable: the caller re-asks for [`FieldError::field`]. Messages
/// are Turkish and name the field by its customer-facing label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} bilgisi eksik", .field.label())]
    Missing { field: FieldKey },

    #[error("{} boş bırakılamaz", .field.label())]
    Empty { field: FieldKey },

    #[error("{} şunlardan biri olmalı: {allowed} (girilen: '{value}')", .field.label())]
    NotAllowed {
        field: FieldKey,
        value: String,
        allowed: String,
    },

    #[error("{} tam sayı olmalı (girilen: '{value}')", .field.label())]
    NotANumber { field: FieldKey, value: String },

    #[error("{} en az {min} olmalı (girilen: {actual})", .field.label())]
    BelowMinimum { field: FieldKey, min: i64, actual: i64 },

    #[error("{} için tam {expected} kayıt gerekli, {actual} girildi", .field.label())]
    CountMismatch {
        field: FieldKey,
        expected: usize,
        actual: usize,
    },

    #[error("{} içinde '{value}' birden fazla kez geçiyor", .field.label())]
    Duplicate { field: FieldKey, value: String },

    #[error("{} {expected} biçiminde olmalı (girilen: '{value}')", .field.label())]
    BadFormat {
        field: FieldKey,
        value: String,
        expected: &'static str,
    },

    #[error("{} için beklenen JSON türü: {expected}", .field.label())]
    WrongType {
        field: FieldKey,
        expected: &'static str,
    },

    #[error("{} sorulmadan önce {} yanıtlanmalı", .field.label(), .requires.label())]
    Prerequisite { field: FieldKey, requires: FieldKey },
}

impl FieldError {
    /// The field that has to be asked for again.
    pub fn field(&self) -> FieldKey {
        match self {
            FieldError::Missing { field }
            | FieldError::Empty { field }
            | FieldError::NotAllowed { field, .. }
            | FieldError::NotANumber { field, .. }
            | FieldError::BelowMinimum { field, .. }
            | FieldError::CountMismatch { field, .. }
            | FieldError::Duplicate { field, .. }
            | FieldError::BadFormat { field, .. }
            | FieldError::WrongType { field, .. } => *field,
            // The missing prerequisite is what must be collected next.
            FieldError::Prerequisite { requires, .. } => *requires,
        }
    }
}

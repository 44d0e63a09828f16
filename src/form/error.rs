use thiserror::Error;

use super::FieldKind;

/// Errors raised while editing or submitting drafts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A list operation addressed a position past the end
    #[error("Draft index {index} is out of range (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The supplied value does not fit the field
    #[error("Field '{field}' expects a {expected} value, got {actual}")]
    FieldType { field: &'static str, expected: FieldKind, actual: FieldKind },

    /// Text that names none of a choice field's options
    #[error("'{value}' is not a valid option for field '{field}'")]
    InvalidOption { field: &'static str, value: String },

    /// Membership toggle on a field that is not a string set
    #[error("Field '{field}' is not a set of strings")]
    NotASetField { field: &'static str },

    /// A required field was left empty at submit time
    #[error("Required field '{field}' is empty")]
    MissingField { field: &'static str },

    /// Health registration submitted without consent
    #[error("Consent must be given before registering")]
    ConsentRequired,
}

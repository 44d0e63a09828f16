use std::fmt;

use super::FormError;

/// Kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Count,
    Flag,
    Set,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Count => "count",
            Self::Flag => "flag",
            Self::Set => "string set",
        };
        f.write_str(name)
    }
}

/// Value handed to a field-level update.
///
/// No coercion happens between kinds: a `Count` is not accepted where a
/// `Number` is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Count(u32),
    Flag(bool),
    Set(Vec<String>),
}

impl FieldValue {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Count(_) => FieldKind::Count,
            Self::Flag(_) => FieldKind::Flag,
            Self::Set(_) => FieldKind::Set,
        }
    }

    /// Error for a value used where `expected` was required.
    fn mismatch(&self, field: &'static str, expected: FieldKind) -> FormError {
        FormError::FieldType { field, expected, actual: self.kind() }
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] unless this is `Text`.
    pub fn into_text(self, field: &'static str) -> Result<String, FormError> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(other.mismatch(field, FieldKind::Text)),
        }
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] unless this is `Number`.
    pub fn into_number(self, field: &'static str) -> Result<f64, FormError> {
        match self {
            Self::Number(n) => Ok(n),
            other => Err(other.mismatch(field, FieldKind::Number)),
        }
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] unless this is `Count`.
    pub fn into_count(self, field: &'static str) -> Result<u32, FormError> {
        match self {
            Self::Count(n) => Ok(n),
            other => Err(other.mismatch(field, FieldKind::Count)),
        }
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] unless this is `Flag`.
    pub fn into_flag(self, field: &'static str) -> Result<bool, FormError> {
        match self {
            Self::Flag(b) => Ok(b),
            other => Err(other.mismatch(field, FieldKind::Flag)),
        }
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] unless this is `Set`.
    pub fn into_set(self, field: &'static str) -> Result<Vec<String>, FormError> {
        match self {
            Self::Set(v) => Ok(v),
            other => Err(other.mismatch(field, FieldKind::Set)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Count(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Set(value)
    }
}

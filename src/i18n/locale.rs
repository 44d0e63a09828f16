use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use super::I18nError;

/// Locale tag selecting one of the two parallel translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Locale {
    /// English, the primary locale
    #[default]
    #[serde(rename = "en")]
    En,
    /// Hindi, the secondary locale
    #[serde(rename = "hi")]
    Hi,
}

impl Locale {
    /// Every supported locale, primary first.
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// Short code stored in the preference store (`"en"` / `"hi"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Value of the document `lang` attribute.
    #[must_use]
    pub const fn document_lang(self) -> &'static str {
        match self {
            Self::En => "en-IN",
            Self::Hi => "hi-IN",
        }
    }

    /// The other locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(I18nError::UnknownLocale(other.to_string())),
        }
    }
}

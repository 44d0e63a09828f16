//! Translation tables for both locales

use std::collections::{
    BTreeSet,
    HashMap,
};

use serde_json::Value;

use super::{
    I18nError,
    Locale,
};

/// Built-in English table.
const EN_JSON: &str = include_str!("../../locales/en.json");
/// Built-in Hindi table.
const HI_JSON: &str = include_str!("../../locales/hi.json");

/// Separator between the segments of a flattened key.
pub const KEY_SEPARATOR: char = '.';

/// Flatten a nested JSON object into `namespace.key` entries.
///
/// Non-string leaves keep their JSON text. Array items are addressed as
/// `key[index]`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use mahila_maitri::i18n::catalog::flatten_json;
///
/// let json = json!({
///     "header": {
///         "home": "Home",
///         "sales": "Sales Dashboard"
///     }
/// });
///
/// let flattened = flatten_json(&json);
/// assert_eq!(flattened.get("header.home"), Some(&"Home".to_string()));
/// assert_eq!(flattened.get("header.sales"), Some(&"Sales Dashboard".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    collect_leaves(json, &mut String::new(), &mut entries);
    entries
}

/// Depth-first walk recording every leaf under its path.
///
/// `path` is restored to its original length before returning.
fn collect_leaves(value: &Value, path: &mut String, entries: &mut HashMap<String, String>) {
    let parent_len = path.len();
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if !path.is_empty() {
                    path.push(KEY_SEPARATOR);
                }
                path.push_str(key);
                collect_leaves(child, path, entries);
                path.truncate(parent_len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push_str(&format!("[{index}]"));
                collect_leaves(child, path, entries);
                path.truncate(parent_len);
            }
        }
        Value::String(text) => insert_leaf(path, text.clone(), entries),
        other => insert_leaf(path, other.to_string(), entries),
    }
}

/// Record a leaf; a bare scalar at the root has no key and is skipped.
fn insert_leaf(path: &str, text: String, entries: &mut HashMap<String, String>) {
    if !path.is_empty() {
        entries.insert(path.to_string(), text);
    }
}

/// Flattened `namespace.key → display string` table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Flattened entries
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Build a table from already flattened entries.
    #[must_use]
    pub const fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse nested JSON text into a table.
    ///
    /// # Errors
    /// - The text is not valid JSON
    /// - The root value is not an object
    pub fn from_json_str(locale: Locale, text: &str) -> Result<Self, I18nError> {
        let json: Value = serde_json::from_str(text)?;
        if !json.is_object() {
            return Err(I18nError::InvalidTable(locale));
        }
        Ok(Self::new(flatten_json(&json)))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keys present in one table but absent from the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymmetryReport {
    /// Keys the English table lacks, sorted
    pub missing_in_en: Vec<String>,
    /// Keys the Hindi table lacks, sorted
    pub missing_in_hi: Vec<String>,
}

impl SymmetryReport {
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.missing_in_en.is_empty() && self.missing_in_hi.is_empty()
    }

    /// Keys missing from the given locale's table.
    #[must_use]
    pub fn missing_in(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.missing_in_en,
            Locale::Hi => &self.missing_in_hi,
        }
    }
}

/// Both translation tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// English table
    en: TranslationTable,
    /// Hindi table
    hi: TranslationTable,
}

impl Catalog {
    #[must_use]
    pub const fn new(en: TranslationTable, hi: TranslationTable) -> Self {
        Self { en, hi }
    }

    /// Load the tables shipped with the crate.
    ///
    /// # Errors
    /// Returns error if an embedded table fails to parse.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::from_json_str(EN_JSON, HI_JSON)
    }

    /// Parse both tables from nested JSON text.
    ///
    /// # Errors
    /// Returns error if either table is not a JSON object.
    pub fn from_json_str(en: &str, hi: &str) -> Result<Self, I18nError> {
        let en = TranslationTable::from_json_str(Locale::En, en)?;
        let hi = TranslationTable::from_json_str(Locale::Hi, hi)?;

        let catalog = Self::new(en, hi);
        let report = catalog.symmetry_report();
        if !report.is_symmetric() {
            tracing::warn!(
                missing_in_en = ?report.missing_in_en,
                missing_in_hi = ?report.missing_in_hi,
                "Translation tables have different key sets"
            );
        }
        Ok(catalog)
    }

    #[must_use]
    pub const fn table(&self, locale: Locale) -> &TranslationTable {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }

    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.table(locale).get(key)
    }

    /// Compare the key sets of both tables.
    #[must_use]
    pub fn symmetry_report(&self) -> SymmetryReport {
        let en: BTreeSet<&str> = self.en.keys().collect();
        let hi: BTreeSet<&str> = self.hi.keys().collect();

        SymmetryReport {
            missing_in_en: hi.difference(&en).map(ToString::to_string).collect(),
            missing_in_hi: en.difference(&hi).map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_flatten_json_nested() {
        let json = json!({
            "common": {
                "low": "Low",
                "high": "High"
            },
            "footer": {
                "callNow": "Call Now"
            }
        });

        let result = flatten_json(&json);

        expect_that!(result.get("common.low"), some(eq(&"Low".to_string())));
        expect_that!(result.get("common.high"), some(eq(&"High".to_string())));
        expect_that!(result.get("footer.callNow"), some(eq(&"Call Now".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_flatten_json_deeply_nested() {
        let json = json!({ "a": { "b": { "c": "deep" }, "d": "shallow" } });

        let result = flatten_json(&json);

        expect_that!(result.get("a.b.c"), some(eq(&"deep".to_string())));
        expect_that!(result.get("a.d"), some(eq(&"shallow".to_string())));
        expect_that!(result.len(), eq(2));
    }

    #[googletest::test]
    fn test_flatten_json_scalar_root_is_empty() {
        expect_that!(flatten_json(&json!("loose")), empty());
    }

    #[googletest::test]
    fn test_flatten_json_non_string_values() {
        let json = json!({ "stats": { "women": 500, "verified": true } });

        let result = flatten_json(&json);

        expect_that!(result.get("stats.women"), some(eq(&"500".to_string())));
        expect_that!(result.get("stats.verified"), some(eq(&"true".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_with_array() {
        let json = json!({ "tips": ["Rest", "Hydrate"] });

        let result = flatten_json(&json);

        expect_that!(result.get("tips[0]"), some(eq(&"Rest".to_string())));
        expect_that!(result.get("tips[1]"), some(eq(&"Hydrate".to_string())));
    }

    #[rstest]
    fn builtin_tables_are_symmetric() {
        let catalog = Catalog::builtin().unwrap();
        let report = catalog.symmetry_report();

        assert_that!(report.missing_in_en, empty());
        assert_that!(report.missing_in_hi, empty());
        assert_that!(catalog.table(Locale::En).len(), eq(catalog.table(Locale::Hi).len()));
    }

    #[rstest]
    #[case(Locale::En, "header.home", "Home")]
    #[case(Locale::Hi, "header.home", "होम")]
    #[case(Locale::En, "common.medium", "Medium")]
    #[case(Locale::Hi, "common.medium", "मध्यम")]
    fn builtin_lookup(#[case] locale: Locale, #[case] key: &str, #[case] expected: &str) {
        let catalog = Catalog::builtin().unwrap();

        assert_that!(catalog.lookup(locale, key), some(eq(expected)));
    }

    #[rstest]
    fn symmetry_report_lists_missing_keys() {
        let catalog = Catalog::from_json_str(
            r#"{"common": {"low": "Low", "high": "High"}}"#,
            r#"{"common": {"low": "कम", "peak": "चरम"}}"#,
        )
        .unwrap();

        let report = catalog.symmetry_report();

        assert_that!(report.is_symmetric(), eq(false));
        assert_that!(report.missing_in(Locale::Hi), elements_are![eq("common.high")]);
        assert_that!(report.missing_in(Locale::En), elements_are![eq("common.peak")]);
    }

    #[rstest]
    fn non_object_root_is_rejected() {
        let result = Catalog::from_json_str("[]", "{}");

        assert!(matches!(result, Err(I18nError::InvalidTable(Locale::En))));
    }

    #[rstest]
    fn invalid_json_is_rejected() {
        let result = Catalog::from_json_str("{}", "not json");

        assert!(matches!(result, Err(I18nError::Parse(_))));
    }
}

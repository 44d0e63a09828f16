use super::{
    Catalog,
    DocumentRoot,
    I18nError,
    Locale,
    PreferenceStore,
};

/// Active-locale holder and translation lookup.
///
/// Constructed once per application and passed by reference to every screen.
/// Each locale change is written to the preference store under the storage key
/// and mirrored to the document language attribute.
pub struct Localizer {
    /// Translation tables
    catalog: Catalog,
    /// Active locale
    locale: Locale,
    /// Key under which the locale code is persisted
    storage_key: String,
    /// Durable preference store
    store: Box<dyn PreferenceStore>,
    /// Document attributes for assistive technology
    document: DocumentRoot,
}

impl Localizer {
    /// Create a localizer, restoring the locale from the store.
    ///
    /// An absent or unrecognised stored value falls back to `default_locale`.
    /// The resolved locale is written back and applied to the document.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        store: Box<dyn PreferenceStore>,
        storage_key: impl Into<String>,
        default_locale: Locale,
    ) -> Self {
        let storage_key = storage_key.into();

        let locale = match store.get(&storage_key) {
            Ok(Some(code)) => code.parse().unwrap_or_else(|e: I18nError| {
                tracing::warn!("Ignoring stored locale: {e}");
                default_locale
            }),
            Ok(None) => default_locale,
            Err(e) => {
                tracing::warn!("Failed to read stored locale: {e}");
                default_locale
            }
        };
        tracing::debug!("Initial locale: {locale}");

        let mut localizer =
            Self { catalog, locale, storage_key, store, document: DocumentRoot::default() };
        localizer.apply_locale();
        localizer
    }

    /// Display string for `key` in the active locale.
    ///
    /// Missing keys are logged and returned verbatim.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.lookup(self.locale, key).unwrap_or_else(|| {
            tracing::warn!("Translation missing for key: {key} in language: {}", self.locale);
            key
        })
    }

    /// Shorthand for [`Self::translate`].
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate(key)
    }

    /// Switch to the other locale.
    pub fn toggle_locale(&mut self) {
        self.set_locale(self.locale.toggled());
    }

    /// Make `locale` active, persist it and update the document language.
    ///
    /// Setting the active locale again does nothing.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        tracing::debug!("Locale changed: {} -> {locale}", self.locale);
        self.locale = locale;
        self.apply_locale();
    }

    /// Set the locale from its code.
    ///
    /// # Errors
    /// Returns [`I18nError::UnknownLocale`] for codes other than `en` / `hi`;
    /// the active locale is left unchanged.
    pub fn set_locale_code(&mut self, code: &str) -> Result<(), I18nError> {
        let locale = code.parse()?;
        self.set_locale(locale);
        Ok(())
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn is_hindi(&self) -> bool {
        self.locale == Locale::Hi
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn document(&self) -> &DocumentRoot {
        &self.document
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Persist the active locale and update the document attribute.
    ///
    /// Store failures are logged; the in-memory change stands.
    fn apply_locale(&mut self) {
        if let Err(e) = self.store.set(&self.storage_key, self.locale.code()) {
            tracing::warn!("Failed to persist locale '{}': {e}", self.locale);
        }
        self.document.set_lang(self.locale.document_lang());
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("locale", &self.locale)
            .field("storage_key", &self.storage_key)
            .field("store", &"<dyn PreferenceStore>")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{
        Arc,
        Mutex,
    };

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::i18n::{
        FileStore,
        MemoryStore,
    };
    use crate::test_utils::{
        STORAGE_KEY,
        localizer_with_store,
        test_localizer,
    };

    /// Store whose contents stay observable after it is boxed into a localizer.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryStore>>);

    impl PreferenceStore for SharedStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, I18nError> {
            self.0.lock().unwrap().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), I18nError> {
            self.0.lock().unwrap().set(key, value)
        }
    }

    /// Store that rejects every operation.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> std::result::Result<Option<String>, I18nError> {
            Err(I18nError::Io(std::io::Error::other("read failed")))
        }

        fn set(&mut self, _key: &str, _value: &str) -> std::result::Result<(), I18nError> {
            Err(I18nError::Io(std::io::Error::other("write failed")))
        }
    }

    #[rstest]
    fn defaults_to_primary_locale() {
        let localizer = test_localizer();

        assert_that!(localizer.locale(), eq(Locale::En));
        assert_that!(localizer.document().lang(), eq("en-IN"));
        assert_that!(localizer.is_hindi(), eq(false));
    }

    #[rstest]
    #[case(Locale::En, "header.health", "Health Support")]
    #[case(Locale::Hi, "header.health", "स्वास्थ्य सहायता")]
    fn translates_in_active_locale(
        #[case] locale: Locale,
        #[case] key: &str,
        #[case] expected: &str,
    ) {
        let mut localizer = test_localizer();
        localizer.set_locale(locale);

        assert_that!(localizer.translate(key), eq(expected));
    }

    #[rstest]
    #[case::unknown_namespace("nope.missing")]
    #[case::unknown_key("header.missing")]
    #[case::empty("")]
    fn unknown_key_returns_key(#[case] key: &str) {
        let mut localizer = test_localizer();

        assert_that!(localizer.t(key), eq(key));
        localizer.toggle_locale();
        assert_that!(localizer.t(key), eq(key));
    }

    #[rstest]
    fn toggle_twice_restores_locale() {
        let mut localizer = test_localizer();
        let original = localizer.locale();

        localizer.toggle_locale();
        assert_that!(localizer.locale(), eq(Locale::Hi));
        assert_that!(localizer.document().lang(), eq("hi-IN"));
        localizer.toggle_locale();

        assert_that!(localizer.locale(), eq(original));
        assert_that!(localizer.document().lang(), eq("en-IN"));
    }

    #[rstest]
    fn set_locale_code_rejects_unknown_code() {
        let mut localizer = test_localizer();
        localizer.set_locale(Locale::Hi);

        let result = localizer.set_locale_code("fr");

        assert!(matches!(result, Err(I18nError::UnknownLocale(_))));
        assert_that!(localizer.locale(), eq(Locale::Hi));
    }

    #[rstest]
    fn set_locale_code_accepts_known_code() {
        let mut localizer = test_localizer();

        localizer.set_locale_code("hi").unwrap();

        assert_that!(localizer.locale(), eq(Locale::Hi));
    }

    #[rstest]
    fn every_change_is_persisted() {
        let shared = SharedStore::default();
        let mut localizer = localizer_with_store(Box::new(shared.clone()));
        assert_that!(shared.get(STORAGE_KEY).unwrap(), some(eq("en")));

        localizer.toggle_locale();
        assert_that!(shared.get(STORAGE_KEY).unwrap(), some(eq("hi")));

        localizer.set_locale(Locale::En);
        assert_that!(shared.get(STORAGE_KEY).unwrap(), some(eq("en")));
    }

    #[rstest]
    fn restores_stored_locale() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "hi").unwrap();

        let localizer = localizer_with_store(Box::new(store));

        assert_that!(localizer.locale(), eq(Locale::Hi));
        assert_that!(localizer.document().lang(), eq("hi-IN"));
    }

    #[rstest]
    fn garbage_stored_locale_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "klingon").unwrap();

        let localizer = localizer_with_store(Box::new(store));

        assert_that!(localizer.locale(), eq(Locale::En));
    }

    #[rstest]
    fn locale_survives_simulated_reload() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut first = localizer_with_store(Box::new(FileStore::in_dir(temp_dir.path())));
            first.set_locale(Locale::Hi);
        }

        let reloaded = localizer_with_store(Box::new(FileStore::in_dir(temp_dir.path())));

        assert_that!(reloaded.locale(), eq(Locale::Hi));
    }

    #[rstest]
    fn broken_store_does_not_block_locale_changes() {
        let mut localizer = localizer_with_store(Box::new(BrokenStore));

        localizer.toggle_locale();

        assert_that!(localizer.locale(), eq(Locale::Hi));
        assert_that!(localizer.translate("header.home"), eq("होम"));
    }
}

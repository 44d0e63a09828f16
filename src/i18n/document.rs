/// Document-level attributes exposed to assistive technology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    /// Current `lang` attribute (e.g. `"hi-IN"`)
    lang: String,
}

impl DocumentRoot {
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub(super) fn set_lang(&mut self, lang: &str) {
        if self.lang != lang {
            tracing::debug!("Document language attribute set to {lang}");
            lang.clone_into(&mut self.lang);
        }
    }
}

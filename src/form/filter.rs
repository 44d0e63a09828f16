use super::Choice;

/// Status selector of a list screen: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Choice> StatusFilter<S> {
    #[must_use]
    pub fn matches(self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Filter from its label; `"All"` selects everything.
    ///
    /// # Errors
    /// Returns [`super::FormError::InvalidOption`] for an unknown label.
    pub fn from_label(label: &str) -> Result<Self, super::FormError> {
        if label == "All" {
            return Ok(Self::All);
        }
        S::from_label("filterStatus", label).map(Self::Only)
    }
}

/// Case-insensitive substring match of `term` against any of `candidates`.
///
/// An empty term matches everything.
#[must_use]
pub fn matches_search<'a>(term: &str, candidates: impl IntoIterator<Item = &'a str>) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    candidates.into_iter().any(|candidate| candidate.to_lowercase().contains(&term))
}

use super::FormError;

/// A field whose value is one of a fixed set of labelled options.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option with its display label, in presentation order.
    const OPTIONS: &'static [(&'static str, Self)];

    /// Display label of this option.
    fn label(self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find_map(|(label, option)| (*option == self).then_some(*label))
            .unwrap_or_default()
    }

    /// Option with the given label.
    ///
    /// # Errors
    /// Returns [`FormError::InvalidOption`] when no option carries `label`.
    fn from_label(field: &'static str, label: &str) -> Result<Self, FormError> {
        Self::OPTIONS
            .iter()
            .find_map(|(candidate, option)| (*candidate == label).then_some(*option))
            .ok_or_else(|| FormError::InvalidOption { field, value: label.to_string() })
    }
}

use std::fmt;

use super::{
    FieldValue,
    FormError,
};

/// Field selector of a draft record.
pub trait DraftField: Copy + fmt::Debug {
    /// Field name as used by input handlers (camelCase).
    fn name(self) -> &'static str;
}

/// A typed, in-progress form entry.
pub trait DraftRecord: Clone + fmt::Debug {
    type Field: DraftField;

    /// Default-initialized record used for new and reset drafts.
    fn template() -> Self;

    /// Replace the value of a single field.
    ///
    /// # Errors
    /// Returns [`FormError::FieldType`] when the value does not fit the field.
    fn set_field(&mut self, field: Self::Field, value: FieldValue) -> Result<(), FormError>;

    /// Mutable access to a string-set field, `None` for other fields.
    fn string_set_mut(&mut self, field: Self::Field) -> Option<&mut Vec<String>> {
        let _ = field;
        None
    }
}

/// Ordered drafts for a multi-item form ("add another product").
///
/// The list never becomes empty: removing the last remaining draft is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftList<T> {
    /// Drafts in insertion order
    items: Vec<T>,
}

impl<T: DraftRecord> Default for DraftList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DraftRecord> DraftList<T> {
    /// A list holding one template draft.
    #[must_use]
    pub fn new() -> Self {
        Self { items: vec![T::template()] }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a template draft and return its index.
    pub fn add_item(&mut self) -> usize {
        self.items.push(T::template());
        tracing::debug!("Added draft #{}", self.items.len() - 1);
        self.items.len() - 1
    }

    /// Set `field` of the draft at `index`.
    ///
    /// # Errors
    /// - [`FormError::IndexOutOfRange`] for a bad index
    /// - [`FormError::FieldType`] when the value does not fit the field
    pub fn update_field(
        &mut self,
        index: usize,
        field: T::Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.item_mut(index)?.set_field(field, value.into())
    }

    /// Run `f` against the draft at `index`, for edits a single field update
    /// cannot express (nested lists).
    ///
    /// # Errors
    /// Returns [`FormError::IndexOutOfRange`] for a bad index.
    pub fn update_with<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, FormError> {
        Ok(f(self.item_mut(index)?))
    }

    /// Remove the draft at `index`.
    ///
    /// Returns `Ok(None)` without removing anything when only one draft is left.
    ///
    /// # Errors
    /// Returns [`FormError::IndexOutOfRange`] for a bad index.
    pub fn remove_item(&mut self, index: usize) -> Result<Option<T>, FormError> {
        self.check_index(index)?;
        if self.items.len() <= 1 {
            tracing::debug!("Refusing to remove the last remaining draft");
            return Ok(None);
        }
        Ok(Some(self.items.remove(index)))
    }

    /// Add `value` to a string-set field if absent, remove it if present.
    ///
    /// Returns whether `value` is a member afterwards. Removal keeps the
    /// relative order of the other members; additions go to the end.
    ///
    /// # Errors
    /// - [`FormError::IndexOutOfRange`] for a bad index
    /// - [`FormError::NotASetField`] when `field` is not a string set
    pub fn toggle_set_member(
        &mut self,
        index: usize,
        field: T::Field,
        value: &str,
    ) -> Result<bool, FormError> {
        let set = self
            .item_mut(index)?
            .string_set_mut(field)
            .ok_or(FormError::NotASetField { field: field.name() })?;

        if let Some(position) = set.iter().position(|member| member == value) {
            set.remove(position);
            Ok(false)
        } else {
            set.push(value.to_string());
            Ok(true)
        }
    }

    /// Discard every draft and start again from one template.
    pub fn reset(&mut self) {
        self.items = vec![T::template()];
    }

    /// Take all drafts for submission, leaving one template behind.
    pub fn drain_for_submit(&mut self) -> Vec<T> {
        std::mem::replace(&mut self.items, vec![T::template()])
    }

    /// Ensure `index` addresses an existing draft.
    const fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange { index, len: self.items.len() })
        }
    }

    /// Draft at `index`, or an out-of-range error.
    fn item_mut(&mut self, index: usize) -> Result<&mut T, FormError> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(FormError::IndexOutOfRange { index, len })
    }
}

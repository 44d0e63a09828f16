//! Multi-item form drafts

/// Fixed-option fields
mod choice;
/// Ordered list of draft records
mod draft_list;
/// Form errors
mod error;
/// List search and status filtering
mod filter;
/// Untyped field values supplied by input handlers
mod value;

pub use choice::Choice;
pub use draft_list::{
    DraftField,
    DraftList,
    DraftRecord,
};
pub use error::FormError;
pub use filter::{
    StatusFilter,
    matches_search,
};
pub use value::{
    FieldKind,
    FieldValue,
};

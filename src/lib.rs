//! mahila-maitri
//!
//! Core of a bilingual (English/Hindi) support platform for women
//! entrepreneurs: localization, multi-item registration forms, a vendor
//! registry and a confidential health desk with support chat.

pub mod app;
pub mod backend;
pub mod clock;
pub mod config;
pub mod form;
pub mod health;
pub mod i18n;
pub mod registry;

mod test_utils;

pub use app::AppContext;

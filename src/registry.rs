//! Vendor registry of the sales screen: vendors, their products and the
//! multi-product registration form.

/// Registered vendors, search and filtering
mod directory;
/// Product drafts and finalized products
pub mod product;
/// Vendor drafts and finalized vendors
pub mod vendor;

pub use directory::VendorRegistry;
pub use product::{
    BulkDiscount,
    BulkDiscountField,
    Product,
    ProductDraft,
    ProductField,
    format_margin,
    profit_margin,
    tag_options,
};
pub use vendor::{
    LoyaltyLevel,
    Vendor,
    VendorDraft,
    VendorField,
    VendorForm,
    VendorStatus,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::form::{
    DraftField,
    DraftRecord,
    FieldValue,
    FormError,
};
use crate::i18n::Localizer;

/// Tags offered by the product form, labelled under `tags.` in the catalog.
pub const COMMON_TAGS: [&str; 8] =
    ["fresh", "organic", "local", "premium", "handmade", "traditional", "seasonal", "bulk"];

/// Each common tag with its label in the active language.
///
/// The tag itself is what gets stored on the draft.
#[must_use]
pub fn tag_options(localizer: &Localizer) -> Vec<(&'static str, String)> {
    COMMON_TAGS
        .iter()
        .map(|tag| (*tag, localizer.translate(&format!("tags.{tag}")).to_string()))
        .collect()
}

/// Quantity-based price reduction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct BulkDiscount {
    pub quantity: u32,
    /// Percentage off
    pub discount: f64,
}

/// Fields of a [`BulkDiscount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDiscountField {
    Quantity,
    Discount,
}

impl DraftField for BulkDiscountField {
    fn name(self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Discount => "discount",
        }
    }
}

/// In-progress product entry of the vendor form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub cost_price: f64,
    pub description: String,
    pub stock_quantity: u32,
    pub min_order_quantity: u32,
    pub max_order_quantity: u32,
    pub unit: String,
    pub seasonality: String,
    pub shelf_life: String,
    pub tags: Vec<String>,
    pub monthly_sales: u32,
    pub is_organic: bool,
    pub is_handmade: bool,
    pub certifications: Vec<String>,
    pub supplier_info: String,
    pub storage_requirements: String,
    pub delivery_time: String,
    pub bulk_discounts: Vec<BulkDiscount>,
}

/// Scalar and set fields of a [`ProductDraft`]; bulk discounts have their own editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Category,
    Price,
    CostPrice,
    Description,
    StockQuantity,
    MinOrderQuantity,
    MaxOrderQuantity,
    Unit,
    Seasonality,
    ShelfLife,
    Tags,
    MonthlySales,
    IsOrganic,
    IsHandmade,
    Certifications,
    SupplierInfo,
    StorageRequirements,
    DeliveryTime,
}

impl DraftField for ProductField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::CostPrice => "costPrice",
            Self::Description => "description",
            Self::StockQuantity => "stockQuantity",
            Self::MinOrderQuantity => "minOrderQuantity",
            Self::MaxOrderQuantity => "maxOrderQuantity",
            Self::Unit => "unit",
            Self::Seasonality => "seasonality",
            Self::ShelfLife => "shelfLife",
            Self::Tags => "tags",
            Self::MonthlySales => "monthlySales",
            Self::IsOrganic => "isOrganic",
            Self::IsHandmade => "isHandmade",
            Self::Certifications => "certifications",
            Self::SupplierInfo => "supplierInfo",
            Self::StorageRequirements => "storageRequirements",
            Self::DeliveryTime => "deliveryTime",
        }
    }
}

impl DraftRecord for ProductDraft {
    type Field = ProductField;

    fn template() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: 0.0,
            cost_price: 0.0,
            description: String::new(),
            stock_quantity: 0,
            min_order_quantity: 1,
            max_order_quantity: 100,
            unit: "kg".to_string(),
            seasonality: "year-round".to_string(),
            shelf_life: String::new(),
            tags: Vec::new(),
            monthly_sales: 0,
            is_organic: false,
            is_handmade: false,
            certifications: Vec::new(),
            supplier_info: String::new(),
            storage_requirements: String::new(),
            delivery_time: String::new(),
            bulk_discounts: Vec::new(),
        }
    }

    fn set_field(&mut self, field: ProductField, value: FieldValue) -> Result<(), FormError> {
        let name = field.name();
        match field {
            ProductField::Name => self.name = value.into_text(name)?,
            ProductField::Category => self.category = value.into_text(name)?,
            ProductField::Price => self.price = value.into_number(name)?,
            ProductField::CostPrice => self.cost_price = value.into_number(name)?,
            ProductField::Description => self.description = value.into_text(name)?,
            ProductField::StockQuantity => self.stock_quantity = value.into_count(name)?,
            ProductField::MinOrderQuantity => self.min_order_quantity = value.into_count(name)?,
            ProductField::MaxOrderQuantity => self.max_order_quantity = value.into_count(name)?,
            ProductField::Unit => self.unit = value.into_text(name)?,
            ProductField::Seasonality => self.seasonality = value.into_text(name)?,
            ProductField::ShelfLife => self.shelf_life = value.into_text(name)?,
            ProductField::Tags => self.tags = value.into_set(name)?,
            ProductField::MonthlySales => self.monthly_sales = value.into_count(name)?,
            ProductField::IsOrganic => self.is_organic = value.into_flag(name)?,
            ProductField::IsHandmade => self.is_handmade = value.into_flag(name)?,
            ProductField::Certifications => self.certifications = value.into_set(name)?,
            ProductField::SupplierInfo => self.supplier_info = value.into_text(name)?,
            ProductField::StorageRequirements => {
                self.storage_requirements = value.into_text(name)?;
            }
            ProductField::DeliveryTime => self.delivery_time = value.into_text(name)?,
        }
        Ok(())
    }

    fn string_set_mut(&mut self, field: ProductField) -> Option<&mut Vec<String>> {
        match field {
            ProductField::Tags => Some(&mut self.tags),
            ProductField::Certifications => Some(&mut self.certifications),
            _ => None,
        }
    }
}

impl ProductDraft {
    /// Append an empty bulk discount row and return its index.
    pub fn add_bulk_discount(&mut self) -> usize {
        self.bulk_discounts.push(BulkDiscount::default());
        self.bulk_discounts.len() - 1
    }

    /// # Errors
    /// - [`FormError::IndexOutOfRange`] for a bad row index
    /// - [`FormError::FieldType`] for a count/number mismatch
    pub fn update_bulk_discount(
        &mut self,
        index: usize,
        field: BulkDiscountField,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let len = self.bulk_discounts.len();
        let row =
            self.bulk_discounts.get_mut(index).ok_or(FormError::IndexOutOfRange { index, len })?;
        let value = value.into();
        match field {
            BulkDiscountField::Quantity => row.quantity = value.into_count(field.name())?,
            BulkDiscountField::Discount => row.discount = value.into_number(field.name())?,
        }
        Ok(())
    }

    /// Bulk discount rows may all be removed.
    ///
    /// # Errors
    /// Returns [`FormError::IndexOutOfRange`] for a bad row index.
    pub fn remove_bulk_discount(&mut self, index: usize) -> Result<BulkDiscount, FormError> {
        if index >= self.bulk_discounts.len() {
            return Err(FormError::IndexOutOfRange { index, len: self.bulk_discounts.len() });
        }
        Ok(self.bulk_discounts.remove(index))
    }

    /// Live margin preview shown while the form is being filled in.
    #[must_use]
    pub fn profit_margin(&self) -> f64 {
        profit_margin(self.price, self.cost_price)
    }

    /// Check the fields the form marks as required.
    ///
    /// # Errors
    /// Returns [`FormError::MissingField`] for the first empty required field.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (ProductField::Name, &self.name),
            (ProductField::Category, &self.category),
            (ProductField::Description, &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField { field: field.name() });
            }
        }
        Ok(())
    }

    /// Promote the draft to a catalog entry.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn finalize(self, id: String) -> Product {
        let total_revenue = self.price * f64::from(self.monthly_sales);
        let profit_margin = self.profit_margin();
        Product {
            id,
            details: self,
            images: Vec::new(),
            total_revenue,
            profit_margin,
            customer_rating: 0.0,
        }
    }
}

/// A product listed by a registered vendor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    pub details: ProductDraft,
    pub images: Vec<String>,
    /// `price × monthly_sales`
    pub total_revenue: f64,
    /// Percentage of the price kept after cost
    pub profit_margin: f64,
    pub customer_rating: f64,
}

/// `(price − cost) / price × 100`, or `0` when the price is zero.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn profit_margin(price: f64, cost: f64) -> f64 {
    if price.abs() < f64::EPSILON {
        return 0.0;
    }
    (price - cost) / price * 100.0
}

/// Margin for display, one decimal place (`"37.5%"`).
#[must_use]
pub fn format_margin(margin: f64) -> String {
    format!("{margin:.1}%")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_arithmetic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::form::DraftList;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "Tomatoes".to_string(),
            category: "vegetables".to_string(),
            description: "Farm fresh".to_string(),
            ..ProductDraft::template()
        }
    }

    #[rstest]
    fn template_matches_form_defaults() {
        let draft = ProductDraft::template();

        assert_that!(draft.unit, eq("kg"));
        assert_that!(draft.seasonality, eq("year-round"));
        assert_that!(draft.min_order_quantity, eq(1));
        assert_that!(draft.max_order_quantity, eq(100));
        assert_that!(draft.tags, empty());
        assert_that!(draft.bulk_discounts, empty());
    }

    #[rstest]
    #[case::typical(40.0, 25.0, "37.5%")]
    #[case::no_profit(10.0, 10.0, "0.0%")]
    #[case::loss(50.0, 60.0, "-20.0%")]
    #[case::zero_price(0.0, 12.0, "0.0%")]
    #[case::rounding(3.0, 2.0, "33.3%")]
    fn margin_formatting(#[case] price: f64, #[case] cost: f64, #[case] expected: &str) {
        assert_that!(format_margin(profit_margin(price, cost)), eq(expected));
    }

    #[rstest]
    fn finalize_derives_revenue_and_margin() {
        let mut list = DraftList::<ProductDraft>::new();
        list.update_field(0, ProductField::Price, 40.0).unwrap();
        list.update_field(0, ProductField::CostPrice, 25.0).unwrap();
        list.update_field(0, ProductField::MonthlySales, 10_u32).unwrap();
        let draft = list.drain_for_submit().remove(0);

        let product = draft.finalize("1700000000000-0".to_string());

        assert_that!(product.id, eq("1700000000000-0"));
        assert_that!(product.profit_margin, near(37.5, 1e-9));
        assert_that!(product.total_revenue, near(400.0, 1e-9));
        assert_that!(product.customer_rating, eq(0.0));
        assert_that!(product.images, empty());
    }

    #[rstest]
    fn price_rejects_count_value() {
        let mut draft = ProductDraft::template();

        let result = draft.set_field(ProductField::Price, FieldValue::Count(40));

        assert_that!(result, err(anything()));
        assert_that!(draft.price, eq(0.0));
    }

    #[rstest]
    fn tags_and_certifications_are_sets() {
        let mut draft = ProductDraft::template();

        assert!(draft.string_set_mut(ProductField::Tags).is_some());
        assert!(draft.string_set_mut(ProductField::Certifications).is_some());
        assert!(draft.string_set_mut(ProductField::Unit).is_none());
    }

    #[rstest]
    fn bulk_discount_rows_can_be_edited_and_emptied() {
        let mut draft = ProductDraft::template();
        let row = draft.add_bulk_discount();

        draft.update_bulk_discount(row, BulkDiscountField::Quantity, 50_u32).unwrap();
        draft.update_bulk_discount(row, BulkDiscountField::Discount, 5.0).unwrap();
        assert_that!(
            draft.bulk_discounts,
            elements_are![eq(&BulkDiscount { quantity: 50, discount: 5.0 })]
        );

        let removed = draft.remove_bulk_discount(row).unwrap();
        assert_that!(removed.quantity, eq(50));
        assert_that!(draft.bulk_discounts, empty());
    }

    #[rstest]
    fn bulk_discount_bad_index_is_error() {
        let mut draft = ProductDraft::template();

        assert_that!(
            draft.update_bulk_discount(0, BulkDiscountField::Quantity, 1_u32),
            err(eq(&FormError::IndexOutOfRange { index: 0, len: 0 }))
        );
        assert_that!(
            draft.remove_bulk_discount(2),
            err(eq(&FormError::IndexOutOfRange { index: 2, len: 0 }))
        );
    }

    #[rstest]
    #[case::name(ProductDraft { name: " ".to_string(), ..filled_draft() }, "name")]
    #[case::category(ProductDraft { category: String::new(), ..filled_draft() }, "category")]
    #[case::description(ProductDraft { description: String::new(), ..filled_draft() }, "description")]
    fn validate_reports_missing_field(#[case] draft: ProductDraft, #[case] field: &'static str) {
        assert_that!(draft.validate(), err(eq(&FormError::MissingField { field })));
    }

    #[rstest]
    fn tag_options_follow_locale() {
        let mut localizer = crate::test_utils::test_localizer();

        let english = tag_options(&localizer);
        localizer.toggle_locale();
        let hindi = tag_options(&localizer);

        assert_that!(english.len(), eq(COMMON_TAGS.len()));
        assert_that!(english[0], eq(&("fresh", "Fresh".to_string())));
        assert_that!(hindi[0].0, eq("fresh"));
        assert_that!(hindi[0].1, not(eq("Fresh")));
        assert_that!(hindi[0].1, not(starts_with("tags.")));
    }

    #[rstest]
    fn validate_accepts_filled_draft() {
        assert_that!(filled_draft().validate(), ok(anything()));
    }

    #[rstest]
    fn product_serializes_flat() {
        let product = filled_draft().finalize("p-1".to_string());

        let json = serde_json::to_value(&product).unwrap();

        assert_that!(json["id"], eq(&serde_json::json!("p-1")));
        assert_that!(json["name"], eq(&serde_json::json!("Tomatoes")));
        assert_that!(json["costPrice"], eq(&serde_json::json!(0.0)));
    }
}

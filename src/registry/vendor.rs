use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use super::product::{
    Product,
    ProductDraft,
};
use crate::form::{
    Choice,
    DraftField,
    DraftList,
    DraftRecord,
    FieldValue,
    FormError,
};

/// Account status of a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VendorStatus {
    Active,
    Inactive,
    #[serde(rename = "VIP")]
    Vip,
}

impl Choice for VendorStatus {
    const OPTIONS: &'static [(&'static str, Self)] =
        &[("Active", Self::Active), ("Inactive", Self::Inactive), ("VIP", Self::Vip)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum LoyaltyLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Contact and business details of the vendor form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub address: String,
    pub business_type: String,
    pub gst_number: String,
    pub bank_details: String,
    pub monthly_target: f64,
    pub current_month_sales: f64,
    pub business_experience: String,
    pub preferred_payment: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorField {
    Name,
    Phone,
    Email,
    Location,
    Address,
    BusinessType,
    GstNumber,
    BankDetails,
    MonthlyTarget,
    CurrentMonthSales,
    BusinessExperience,
    PreferredPayment,
    Notes,
}

impl DraftField for VendorField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Location => "location",
            Self::Address => "address",
            Self::BusinessType => "businessType",
            Self::GstNumber => "gstNumber",
            Self::BankDetails => "bankDetails",
            Self::MonthlyTarget => "monthlyTarget",
            Self::CurrentMonthSales => "currentMonthSales",
            Self::BusinessExperience => "businessExperience",
            Self::PreferredPayment => "preferredPayment",
            Self::Notes => "notes",
        }
    }
}

impl DraftRecord for VendorDraft {
    type Field = VendorField;

    fn template() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            location: String::new(),
            address: String::new(),
            business_type: String::new(),
            gst_number: String::new(),
            bank_details: String::new(),
            monthly_target: 0.0,
            current_month_sales: 0.0,
            business_experience: String::new(),
            preferred_payment: "UPI".to_string(),
            notes: String::new(),
        }
    }

    fn set_field(&mut self, field: VendorField, value: FieldValue) -> Result<(), FormError> {
        let name = field.name();
        let slot = match field {
            VendorField::MonthlyTarget => {
                self.monthly_target = value.into_number(name)?;
                return Ok(());
            }
            VendorField::CurrentMonthSales => {
                self.current_month_sales = value.into_number(name)?;
                return Ok(());
            }
            VendorField::Name => &mut self.name,
            VendorField::Phone => &mut self.phone,
            VendorField::Email => &mut self.email,
            VendorField::Location => &mut self.location,
            VendorField::Address => &mut self.address,
            VendorField::BusinessType => &mut self.business_type,
            VendorField::GstNumber => &mut self.gst_number,
            VendorField::BankDetails => &mut self.bank_details,
            VendorField::BusinessExperience => &mut self.business_experience,
            VendorField::PreferredPayment => &mut self.preferred_payment,
            VendorField::Notes => &mut self.notes,
        };
        *slot = value.into_text(name)?;
        Ok(())
    }
}

impl VendorDraft {
    /// # Errors
    /// Returns [`FormError::MissingField`] for the first empty required field.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (VendorField::Name, &self.name),
            (VendorField::Phone, &self.phone),
            (VendorField::Location, &self.location),
            (VendorField::BusinessType, &self.business_type),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField { field: field.name() });
            }
        }
        Ok(())
    }
}

/// The "add vendor" form: one details record plus a list of product drafts.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorForm {
    /// Contact and business details
    details: VendorDraft,
    /// Products being listed, never empty
    products: DraftList<ProductDraft>,
}

impl Default for VendorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorForm {
    #[must_use]
    pub fn new() -> Self {
        Self { details: VendorDraft::template(), products: DraftList::new() }
    }

    #[must_use]
    pub const fn details(&self) -> &VendorDraft {
        &self.details
    }

    #[must_use]
    pub const fn products(&self) -> &DraftList<ProductDraft> {
        &self.products
    }

    pub const fn products_mut(&mut self) -> &mut DraftList<ProductDraft> {
        &mut self.products
    }

    /// # Errors
    /// Returns [`FormError::FieldType`] when the value does not fit the field.
    pub fn update_detail(
        &mut self,
        field: VendorField,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.details.set_field(field, value.into())
    }

    /// Check every required field of the details and of each product.
    ///
    /// # Errors
    /// Returns [`FormError::MissingField`] for the first empty required field.
    pub fn validate(&self) -> Result<(), FormError> {
        self.details.validate()?;
        self.products.items().iter().try_for_each(ProductDraft::validate)
    }

    /// Discard everything typed so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Promote the form to a [`Vendor`] registered on `today` under `id`.
    ///
    /// Products are numbered `{id}-{index}`. The form itself is left as it is.
    ///
    /// # Errors
    /// Returns [`FormError::MissingField`] for the first empty required field.
    pub fn finalize(&self, id: i64, today: NaiveDate) -> Result<Vendor, FormError> {
        self.validate()?;

        let details = self.details.clone();
        let products: Vec<Product> = self
            .products
            .items()
            .iter()
            .enumerate()
            .map(|(index, draft)| draft.clone().finalize(format!("{id}-{index}")))
            .collect();

        Ok(Vendor {
            id: id.to_string(),
            email: Some(details.email).filter(|email| !email.is_empty()),
            total_purchases: details.current_month_sales,
            last_purchase: today,
            favorite_products: products.iter().map(|p| p.details.name.clone()).collect(),
            customer_since: today,
            loyalty_level: LoyaltyLevel::Bronze,
            total_orders: 0,
            average_order_value: 0.0,
            status: VendorStatus::Active,
            name: details.name,
            phone: details.phone,
            location: details.location,
            address: details.address,
            business_type: details.business_type,
            preferred_payment: details.preferred_payment,
            notes: details.notes,
            monthly_target: details.monthly_target,
            current_month_sales: details.current_month_sales,
            business_experience: details.business_experience,
            gst_number: details.gst_number,
            bank_details: details.bank_details,
            products,
        })
    }
}

/// A registered vendor with their product catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub address: String,
    pub business_type: String,
    pub total_purchases: f64,
    pub last_purchase: NaiveDate,
    pub favorite_products: Vec<String>,
    pub customer_since: NaiveDate,
    pub loyalty_level: LoyaltyLevel,
    pub total_orders: u32,
    pub average_order_value: f64,
    pub preferred_payment: String,
    pub notes: String,
    pub status: VendorStatus,
    pub monthly_target: f64,
    pub current_month_sales: f64,
    pub business_experience: String,
    pub gst_number: String,
    pub bank_details: String,
    pub products: Vec<Product>,
}

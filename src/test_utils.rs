//! Helpers shared by the unit test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::future::{
    Future,
    ready,
};
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use chrono::{
    TimeZone,
    Utc,
};

use crate::backend::{
    BackendError,
    RegistrationBackend,
};
use crate::clock::FixedClock;
use crate::health::{
    HealthCustomer,
    HealthDesk,
    HealthField,
};
use crate::i18n::{
    Catalog,
    Locale,
    Localizer,
    MemoryStore,
    PreferenceStore,
};
use crate::registry::{
    ProductField,
    Vendor,
    VendorField,
    VendorForm,
};

/// Storage key used by test localizers.
pub(crate) const STORAGE_KEY: &str = "mahilamaitri-language";

/// Localizer over the shipped tables with an empty in-memory store.
pub(crate) fn test_localizer() -> Localizer {
    localizer_with_store(Box::new(MemoryStore::new()))
}

/// Localizer over the shipped tables backed by `store`.
pub(crate) fn localizer_with_store(store: Box<dyn PreferenceStore>) -> Localizer {
    Localizer::new(Catalog::builtin().unwrap(), store, STORAGE_KEY, Locale::En)
}

/// Clock frozen at 2025-03-08T10:30:00Z (timestamp 1741429800000).
pub(crate) fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 8, 10, 30, 0).unwrap())
}

/// Fill every required vendor detail.
pub(crate) fn fill_vendor(form: &mut VendorForm, name: &str) {
    form.update_detail(VendorField::Name, name).unwrap();
    form.update_detail(VendorField::Phone, "9876543210").unwrap();
    form.update_detail(VendorField::Location, "Jaipur").unwrap();
    form.update_detail(VendorField::BusinessType, "Vegetables").unwrap();
}

/// Fill every required field of the product draft at `index`.
pub(crate) fn fill_product(form: &mut VendorForm, index: usize, name: &str, price: f64, cost: f64) {
    let products = form.products_mut();
    products.update_field(index, ProductField::Name, name).unwrap();
    products.update_field(index, ProductField::Category, "Vegetables").unwrap();
    products.update_field(index, ProductField::Description, "Farm fresh").unwrap();
    products.update_field(index, ProductField::Price, price).unwrap();
    products.update_field(index, ProductField::CostPrice, cost).unwrap();
}

/// Fill the contact fields of the registration at `index` and give consent.
pub(crate) fn fill_health_draft(desk: &mut HealthDesk, index: usize, location: &str) {
    let drafts = desk.drafts_mut();
    drafts.update_field(index, HealthField::Phone, "9876543210").unwrap();
    drafts.update_field(index, HealthField::Location, location).unwrap();
    drafts.update_field(index, HealthField::EmergencyContact, "9123456780").unwrap();
    drafts.update_field(index, HealthField::ConsentGiven, true).unwrap();
}

/// Registration backend that goes down on one call and accepts the others.
#[derive(Debug)]
pub(crate) struct FlakyBackend {
    /// 1-based call that fails
    fail_at: usize,
    /// Calls made so far
    calls: AtomicUsize,
}

impl FlakyBackend {
    pub(crate) const fn failing_at(call: usize) -> Self {
        Self { fail_at: call, calls: AtomicUsize::new(0) }
    }

    /// Count the call and decide its outcome.
    fn attempt(&self) -> Result<(), BackendError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_at {
            Err(BackendError::Unavailable("down".to_string()))
        } else {
            Ok(())
        }
    }
}

impl RegistrationBackend for FlakyBackend {
    fn register_vendor(
        &self,
        vendor: Vendor,
    ) -> impl Future<Output = Result<Vendor, BackendError>> + Send {
        ready(self.attempt().map(|()| vendor))
    }

    fn register_health_customer(
        &self,
        customer: HealthCustomer,
    ) -> impl Future<Output = Result<HealthCustomer, BackendError>> + Send {
        ready(self.attempt().map(|()| customer))
    }
}

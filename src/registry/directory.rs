use std::collections::HashMap;

use super::vendor::{
    Vendor,
    VendorForm,
    VendorStatus,
};
use crate::backend::{
    RegistrationBackend,
    SubmitError,
};
use crate::clock::Clock;
use crate::form::{
    StatusFilter,
    matches_search,
};

/// Vendors registered in this session together with the "add vendor" form.
#[derive(Debug, Default)]
pub struct VendorRegistry {
    /// Registered vendors, newest last
    vendors: Vec<Vendor>,
    /// Form of the "add vendor" dialog
    form: VendorForm,
    /// Free-text search over name, phone and location
    search_term: String,
    /// Status selector
    status_filter: StatusFilter<VendorStatus>,
    /// Highest vendor id issued so far
    last_id: i64,
}

impl VendorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with already known vendors.
    #[must_use]
    pub fn with_vendors(vendors: Vec<Vendor>) -> Self {
        let last_id =
            vendors.iter().filter_map(|vendor| vendor.id.parse::<i64>().ok()).max().unwrap_or_default();
        Self { vendors, last_id, ..Self::default() }
    }

    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    #[must_use]
    pub const fn form(&self) -> &VendorForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut VendorForm {
        &mut self.form
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub const fn set_status_filter(&mut self, filter: StatusFilter<VendorStatus>) {
        self.status_filter = filter;
    }

    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter<VendorStatus> {
        self.status_filter
    }

    /// Millisecond timestamp id, moved past the last issued one when two
    /// submits fall in the same millisecond.
    fn next_id(&self, clock: &impl Clock) -> i64 {
        clock.timestamp_millis().max(self.last_id.saturating_add(1))
    }

    /// Finalize the form, hand the vendor to `backend` and list it.
    ///
    /// The vendor is listed and the form reset only once the backend accepted
    /// it. On any error both stay as they were, so the submit can be retried.
    ///
    /// # Errors
    /// Returns [`SubmitError::Form`] when a required field is empty and
    /// [`SubmitError::Backend`] when the backend refuses the registration.
    pub async fn submit(
        &mut self,
        backend: &impl RegistrationBackend,
        clock: &impl Clock,
    ) -> Result<Vendor, SubmitError> {
        let id = self.next_id(clock);
        let vendor = self.form.finalize(id, clock.today())?;
        let vendor = backend.register_vendor(vendor).await?;
        tracing::debug!(
            "Vendor {} registered with {} products",
            vendor.id,
            vendor.products.len()
        );
        self.last_id = id;
        self.form.reset();
        self.vendors.push(vendor.clone());
        Ok(vendor)
    }

    /// Close the dialog, dropping everything typed so far.
    pub fn cancel(&mut self) {
        self.form.reset();
    }

    /// Vendors matching both the search term and the status filter.
    pub fn filtered(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.iter().filter(|vendor| {
            self.status_filter.matches(vendor.status)
                && matches_search(
                    &self.search_term,
                    [vendor.name.as_str(), vendor.phone.as_str(), vendor.location.as_str()],
                )
        })
    }

    /// Number of vendors per status, ignoring search and filter.
    #[must_use]
    pub fn count_by_status(&self) -> HashMap<VendorStatus, usize> {
        self.vendors.iter().fold(HashMap::new(), |mut counts, vendor| {
            *counts.entry(vendor.status).or_default() += 1;
            counts
        })
    }

    /// Products listed across all vendors.
    #[must_use]
    pub fn total_products(&self) -> usize {
        self.vendors.iter().map(|vendor| vendor.products.len()).sum()
    }

    /// Mean monthly sales target, `0` for an empty registry.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn average_monthly_target(&self) -> f64 {
        if self.vendors.is_empty() {
            return 0.0;
        }
        let count = u32::try_from(self.vendors.len()).map_or(f64::from(u32::MAX), f64::from);
        self.vendors.iter().map(|vendor| vendor.monthly_target).sum::<f64>() / count
    }
}

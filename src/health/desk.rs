use std::collections::HashMap;

use super::registration::{
    HealthCustomer,
    HealthRegistrationDraft,
    HealthStatus,
};
use crate::backend::{
    RegistrationBackend,
    SubmitError,
};
use crate::clock::Clock;
use crate::form::{
    DraftList,
    StatusFilter,
    matches_search,
};
use crate::i18n::Localizer;

/// Health customers registered in this session together with the
/// registration form.
#[derive(Debug, Default)]
pub struct HealthDesk {
    /// Registered customers, in registration order
    roster: Vec<HealthCustomer>,
    /// Registrations being filled in
    drafts: DraftList<HealthRegistrationDraft>,
    /// Free-text search over id, location and health concerns
    search_term: String,
    /// Status selector
    status_filter: StatusFilter<HealthStatus>,
}

impl HealthDesk {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Desk seeded with already registered customers.
    #[must_use]
    pub fn with_roster(roster: Vec<HealthCustomer>) -> Self {
        Self { roster, ..Self::default() }
    }

    #[must_use]
    pub fn roster(&self) -> &[HealthCustomer] {
        &self.roster
    }

    #[must_use]
    pub const fn drafts(&self) -> &DraftList<HealthRegistrationDraft> {
        &self.drafts
    }

    pub const fn drafts_mut(&mut self) -> &mut DraftList<HealthRegistrationDraft> {
        &mut self.drafts
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub const fn set_status_filter(&mut self, filter: StatusFilter<HealthStatus>) {
        self.status_filter = filter;
    }

    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter<HealthStatus> {
        self.status_filter
    }

    /// Next sequential identifier, `HC001` for an empty roster.
    fn next_id(&self, offset: usize) -> String {
        format!("HC{:03}", self.roster.len() + offset + 1)
    }

    /// Register every draft and return the confirmation shown to the user.
    ///
    /// All drafts are validated before anything is registered. The roster
    /// grows and the form resets only after the backend accepted every
    /// customer; on any error both stay as they were.
    ///
    /// # Errors
    /// - [`SubmitError::Form`] when consent or a required field is missing
    /// - [`SubmitError::Backend`] when the backend refuses a registration
    pub async fn submit(
        &mut self,
        backend: &impl RegistrationBackend,
        clock: &impl Clock,
        localizer: &Localizer,
    ) -> Result<String, SubmitError> {
        self.drafts.items().iter().try_for_each(HealthRegistrationDraft::validate)?;

        let today = clock.today();
        let mut registered = Vec::with_capacity(self.drafts.len());
        for (offset, draft) in self.drafts.items().iter().enumerate() {
            let customer = draft.clone().finalize(self.next_id(offset), today);
            registered.push(backend.register_health_customer(customer).await?);
        }

        let ids: Vec<&str> = registered.iter().map(|customer| customer.id.as_str()).collect();
        let message =
            format!("{}{}", localizer.translate("health.registrationSuccess"), ids.join(", "));
        tracing::debug!("Health customers {} registered", ids.join(", "));

        self.drafts.reset();
        self.roster.extend(registered);
        Ok(message)
    }

    /// Close the form, dropping everything typed so far.
    pub fn cancel(&mut self) {
        self.drafts.reset();
    }

    /// Customers matching both the search term and the status filter.
    pub fn filtered(&self) -> impl Iterator<Item = &HealthCustomer> {
        self.roster.iter().filter(|customer| {
            self.status_filter.matches(customer.status)
                && matches_search(
                    &self.search_term,
                    [customer.id.as_str(), customer.location.as_str()]
                        .into_iter()
                        .chain(customer.health_concerns.iter().map(String::as_str)),
                )
        })
    }

    /// Number of customers per status, ignoring search and filter.
    #[must_use]
    pub fn count_by_status(&self) -> HashMap<HealthStatus, usize> {
        self.roster.iter().fold(HashMap::new(), |mut counts, customer| {
            *counts.entry(customer.status).or_default() += 1;
            counts
        })
    }
}

//! Service boundary between screens and whatever stores registrations and
//! answers chat messages.
//!
//! The in-session implementations accept every registration and answer chat
//! messages with canned localized replies after a fixed delay. A networked
//! backend implements the same traits.

use std::future::Future;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::form::FormError;
use crate::health::{
    ChatKind,
    ChatMessage,
    HealthCustomer,
};
use crate::i18n::{
    Catalog,
    Locale,
};
use crate::registry::Vendor;

/// Failures reported by a backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Registration rejected: {0}")]
    Rejected(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Why a screen's submit did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Accepts finalized registrations.
pub trait RegistrationBackend {
    /// Store a vendor; the returned record is what the screen lists.
    fn register_vendor(
        &self,
        vendor: Vendor,
    ) -> impl Future<Output = Result<Vendor, BackendError>> + Send;

    /// Store a health customer; the returned record is what the screen lists.
    fn register_health_customer(
        &self,
        customer: HealthCustomer,
    ) -> impl Future<Output = Result<HealthCustomer, BackendError>> + Send;
}

/// Produces replies in a support chat.
pub trait ChatBackend {
    /// Reply to the last message of `history`.
    fn reply(
        &self,
        kind: ChatKind,
        locale: Locale,
        history: &[ChatMessage],
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}

/// Registration backend living for the session only.
#[derive(Debug, Default)]
pub struct SessionBackend {
    /// Identifiers of every accepted registration, in order
    accepted: Mutex<Vec<String>>,
}

impl SessionBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers accepted so far.
    pub async fn accepted_ids(&self) -> Vec<String> {
        self.accepted.lock().await.clone()
    }
}

impl RegistrationBackend for SessionBackend {
    fn register_vendor(
        &self,
        vendor: Vendor,
    ) -> impl Future<Output = Result<Vendor, BackendError>> + Send {
        async move {
            tracing::debug!("Registering vendor {}", vendor.id);
            self.accepted.lock().await.push(vendor.id.clone());
            Ok(vendor)
        }
    }

    fn register_health_customer(
        &self,
        customer: HealthCustomer,
    ) -> impl Future<Output = Result<HealthCustomer, BackendError>> + Send {
        async move {
            tracing::debug!("Registering health customer {}", customer.id);
            self.accepted.lock().await.push(customer.id.clone());
            Ok(customer)
        }
    }
}

/// Default delay before a simulated chat reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);

/// Number of canned replies per chat kind.
const CANNED_REPLIES: usize = 3;

/// Chat backend answering with canned replies from the translation catalog.
#[derive(Debug)]
pub struct SimulatedChatBackend {
    /// Source of the localized replies
    catalog: Catalog,
    /// Pause before each reply
    delay: Duration,
    /// Replies produced so far, selects the next canned reply
    turn: AtomicUsize,
}

impl SimulatedChatBackend {
    #[must_use]
    pub const fn new(catalog: Catalog, delay: Duration) -> Self {
        Self { catalog, delay, turn: AtomicUsize::new(0) }
    }

    /// Catalog key of the next reply for `kind`.
    fn next_reply_key(&self, kind: ChatKind) -> String {
        let turn = self.turn.fetch_add(1, Ordering::Relaxed) % CANNED_REPLIES + 1;
        let prefix = match kind {
            ChatKind::Bot => "bot",
            ChatKind::Agent => "agent",
        };
        format!("chat.{prefix}Reply{turn}")
    }
}

impl ChatBackend for SimulatedChatBackend {
    fn reply(
        &self,
        kind: ChatKind,
        locale: Locale,
        history: &[ChatMessage],
    ) -> impl Future<Output = Result<String, BackendError>> + Send {
        let key = self.next_reply_key(kind);
        tracing::debug!("Simulating {kind:?} reply to {} messages with '{key}'", history.len());
        async move {
            tokio::time::sleep(self.delay).await;
            self.catalog.lookup(locale, &key).map(ToString::to_string).ok_or_else(|| {
                tracing::warn!("Canned reply '{key}' missing for {locale}");
                BackendError::Unavailable(format!("no reply configured for {locale}"))
            })
        }
    }
}

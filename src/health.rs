//! Health support screen: confidential registrations and the support chat.

/// Support chat sessions with the assistant or a doctor
mod chat;
/// Registered health customers, search and filtering
mod desk;
/// Registration drafts and finalized health customers
mod registration;

pub use chat::{
    ChatKind,
    ChatMessage,
    ChatSession,
    Sender,
    format_elapsed,
};
pub use desk::HealthDesk;
pub use registration::{
    ConsultationType,
    HEALTH_CONCERN_KEYS,
    HealthCustomer,
    HealthField,
    HealthRegistrationDraft,
    HealthStatus,
    PreferredLanguage,
    UrgencyLevel,
    concern_options,
};

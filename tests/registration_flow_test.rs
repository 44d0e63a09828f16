//! Vendor and health registration flows through the application context

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use chrono::{
    TimeZone,
    Utc,
};
use mahila_maitri::AppContext;
use mahila_maitri::backend::SubmitError;
use mahila_maitri::clock::FixedClock;
use mahila_maitri::config::AppSettings;
use mahila_maitri::form::{
    FormError,
    StatusFilter,
};
use mahila_maitri::health::{
    ChatKind,
    ChatSession,
    HealthDesk,
    HealthField,
    HealthStatus,
    Sender,
};
use mahila_maitri::registry::{
    ProductField,
    VendorField,
    VendorRegistry,
    VendorStatus,
    format_margin,
};
use pretty_assertions::assert_eq;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 8, 10, 30, 0).unwrap())
}

fn context() -> AppContext {
    let settings = AppSettings { chat_response_delay_ms: 0, ..AppSettings::default() };
    AppContext::from_settings(settings).unwrap()
}

#[tokio::test]
async fn vendor_with_two_products() {
    let context = context();
    let mut registry = VendorRegistry::new();
    let form = registry.form_mut();
    form.update_detail(VendorField::Name, "Sunita Devi").unwrap();
    form.update_detail(VendorField::Phone, "9876543210").unwrap();
    form.update_detail(VendorField::Location, "Jaipur").unwrap();
    form.update_detail(VendorField::BusinessType, "Vegetables").unwrap();
    let products = form.products_mut();
    let second = products.add_item();
    for (index, name, price, cost) in [(0, "Tomatoes", 40.0, 25.0), (second, "Onions", 30.0, 30.0)] {
        products.update_field(index, ProductField::Name, name).unwrap();
        products.update_field(index, ProductField::Category, "Vegetables").unwrap();
        products.update_field(index, ProductField::Description, "Farm fresh").unwrap();
        products.update_field(index, ProductField::Price, price).unwrap();
        products.update_field(index, ProductField::CostPrice, cost).unwrap();
    }
    products.toggle_set_member(0, ProductField::Tags, "organic").unwrap();

    let vendor = registry.submit(context.registrations(), &clock()).await.unwrap();

    assert_eq!(vendor.id, "1741429800000");
    assert_eq!(vendor.status, VendorStatus::Active);
    let margins: Vec<String> = vendor.products.iter().map(|p| format_margin(p.profit_margin)).collect();
    assert_eq!(margins, vec!["37.5%".to_string(), "0.0%".to_string()]);
    assert_eq!(vendor.products.first().map(|p| p.details.tags.clone()), Some(vec!["organic".to_string()]));
    assert_eq!(registry.form().products().len(), 1);
    assert_eq!(context.registrations().accepted_ids().await, vec!["1741429800000".to_string()]);

    registry.set_status_filter(StatusFilter::from_label("VIP").unwrap());
    assert_eq!(registry.filtered().count(), 0);
}

#[tokio::test]
async fn health_registration_requires_consent() {
    let context = context();
    let mut desk = HealthDesk::new();
    let drafts = desk.drafts_mut();
    drafts.update_field(0, HealthField::Phone, "9876543210").unwrap();
    drafts.update_field(0, HealthField::Location, "Lucknow").unwrap();
    drafts.update_field(0, HealthField::EmergencyContact, "9123456780").unwrap();
    drafts.toggle_set_member(0, HealthField::HealthConcerns, "Mental Health").unwrap();

    let refused = desk.submit(context.registrations(), &clock(), context.localizer()).await;
    assert_eq!(refused, Err(SubmitError::Form(FormError::ConsentRequired)));

    desk.drafts_mut().update_field(0, HealthField::ConsentGiven, true).unwrap();
    let message = desk.submit(context.registrations(), &clock(), context.localizer()).await.unwrap();

    assert_eq!(message, "Registration successful! Your ID: HC001");
    assert_eq!(desk.roster().first().map(|c| c.name.as_str()), Some("Anonymous User"));
    desk.set_search_term("mental");
    desk.set_status_filter(StatusFilter::Only(HealthStatus::New));
    assert_eq!(desk.filtered().count(), 1);
}

#[tokio::test]
async fn chat_round_trip_in_hindi() {
    let mut context = context();
    context.localizer_mut().toggle_locale();
    let localizer = context.localizer();
    let mut session = ChatSession::start_with_clock(ChatKind::Bot, localizer, clock());

    let reply = session.send("मुझे मदद चाहिए", context.chat_backend(), localizer).await.unwrap().cloned();

    let reply = reply.unwrap();
    assert_eq!(reply.id, 3);
    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.starts_with("मैं आपकी चिंता समझती हूं"));

    session.end();
    assert!(session.messages().is_empty());
}

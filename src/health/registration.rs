use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::form::{
    Choice,
    DraftField,
    DraftRecord,
    FieldValue,
    FormError,
};
use crate::i18n::Localizer;

/// Name recorded when the registrant leaves the name empty.
const ANONYMOUS_NAME: &str = "Anonymous User";

/// Catalog keys of the health concerns offered on the registration form.
pub const HEALTH_CONCERN_KEYS: &[&str] = &[
    "concerns.womensHealth",
    "concerns.mentalHealth",
    "concerns.personalCare",
    "concerns.generalHealth",
    "concerns.nutrition",
    "concerns.pregnancy",
    "concerns.menstrualHealth",
    "concerns.stressManagement",
];

/// Health concern options in the active language.
#[must_use]
pub fn concern_options(localizer: &Localizer) -> Vec<&str> {
    HEALTH_CONCERN_KEYS.iter().map(|key| localizer.translate(key)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum PreferredLanguage {
    #[default]
    Hindi,
    English,
    Both,
}

impl Choice for PreferredLanguage {
    const OPTIONS: &'static [(&'static str, Self)] =
        &[("Hindi", Self::Hindi), ("English", Self::English), ("Both", Self::Both)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ConsultationType {
    #[default]
    #[serde(rename = "AI Chat")]
    AiChat,
    #[serde(rename = "Doctor Consultation")]
    DoctorConsultation,
    Both,
}

impl Choice for ConsultationType {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("AI Chat", Self::AiChat),
        ("Doctor Consultation", Self::DoctorConsultation),
        ("Both", Self::Both),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

impl Choice for UrgencyLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("Low", Self::Low),
        ("Medium", Self::Medium),
        ("High", Self::High),
        ("Emergency", Self::Emergency),
    ];
}

/// Follow-up state of a health customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum HealthStatus {
    New,
    Active,
    #[serde(rename = "Follow-up Required")]
    FollowUpRequired,
    Resolved,
}

impl Choice for HealthStatus {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("New", Self::New),
        ("Active", Self::Active),
        ("Follow-up Required", Self::FollowUpRequired),
        ("Resolved", Self::Resolved),
    ];
}

/// One registration on the health form.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthRegistrationDraft {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub emergency_contact: String,
    pub health_concerns: Vec<String>,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub preferred_language: PreferredLanguage,
    pub consultation_type: ConsultationType,
    pub urgency_level: UrgencyLevel,
    pub notes: String,
    pub consent_given: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthField {
    Name,
    Age,
    Phone,
    Email,
    Location,
    EmergencyContact,
    HealthConcerns,
    MedicalHistory,
    CurrentMedications,
    Allergies,
    PreferredLanguage,
    ConsultationType,
    UrgencyLevel,
    Notes,
    ConsentGiven,
}

impl DraftField for HealthField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Location => "location",
            Self::EmergencyContact => "emergencyContact",
            Self::HealthConcerns => "healthConcerns",
            Self::MedicalHistory => "medicalHistory",
            Self::CurrentMedications => "currentMedications",
            Self::Allergies => "allergies",
            Self::PreferredLanguage => "preferredLanguage",
            Self::ConsultationType => "consultationType",
            Self::UrgencyLevel => "urgencyLevel",
            Self::Notes => "notes",
            Self::ConsentGiven => "consentGiven",
        }
    }
}

impl DraftRecord for HealthRegistrationDraft {
    type Field = HealthField;

    fn template() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: HealthField, value: FieldValue) -> Result<(), FormError> {
        let name = field.name();
        match field {
            HealthField::Age => self.age = value.into_count(name)?,
            HealthField::HealthConcerns => self.health_concerns = value.into_set(name)?,
            HealthField::ConsentGiven => self.consent_given = value.into_flag(name)?,
            HealthField::PreferredLanguage => {
                self.preferred_language = PreferredLanguage::from_label(name, &value.into_text(name)?)?;
            }
            HealthField::ConsultationType => {
                self.consultation_type = ConsultationType::from_label(name, &value.into_text(name)?)?;
            }
            HealthField::UrgencyLevel => {
                self.urgency_level = UrgencyLevel::from_label(name, &value.into_text(name)?)?;
            }
            HealthField::Name => self.name = value.into_text(name)?,
            HealthField::Phone => self.phone = value.into_text(name)?,
            HealthField::Email => self.email = value.into_text(name)?,
            HealthField::Location => self.location = value.into_text(name)?,
            HealthField::EmergencyContact => self.emergency_contact = value.into_text(name)?,
            HealthField::MedicalHistory => self.medical_history = value.into_text(name)?,
            HealthField::CurrentMedications => self.current_medications = value.into_text(name)?,
            HealthField::Allergies => self.allergies = value.into_text(name)?,
            HealthField::Notes => self.notes = value.into_text(name)?,
        }
        Ok(())
    }

    fn string_set_mut(&mut self, field: HealthField) -> Option<&mut Vec<String>> {
        match field {
            HealthField::HealthConcerns => Some(&mut self.health_concerns),
            _ => None,
        }
    }
}

impl HealthRegistrationDraft {
    /// Consent first, then the contact fields needed to reach the registrant.
    ///
    /// The name may stay empty.
    ///
    /// # Errors
    /// - [`FormError::ConsentRequired`] when consent was not given
    /// - [`FormError::MissingField`] for the first empty required field
    pub fn validate(&self) -> Result<(), FormError> {
        if !self.consent_given {
            return Err(FormError::ConsentRequired);
        }
        for (field, value) in [
            (HealthField::Phone, &self.phone),
            (HealthField::Location, &self.location),
            (HealthField::EmergencyContact, &self.emergency_contact),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField { field: field.name() });
            }
        }
        Ok(())
    }

    /// Promote to a [`HealthCustomer`] registered on `date`.
    #[must_use]
    pub fn finalize(self, id: String, date: NaiveDate) -> HealthCustomer {
        let name = if self.name.trim().is_empty() { ANONYMOUS_NAME.to_string() } else { self.name };
        HealthCustomer {
            id,
            name,
            age: self.age,
            phone: self.phone,
            email: Some(self.email).filter(|email| !email.is_empty()),
            location: self.location,
            emergency_contact: self.emergency_contact,
            health_concerns: self.health_concerns,
            medical_history: self.medical_history,
            current_medications: self.current_medications,
            allergies: self.allergies,
            preferred_language: self.preferred_language,
            consultation_type: self.consultation_type,
            urgency_level: self.urgency_level,
            registration_date: date,
            last_consultation: None,
            status: HealthStatus::New,
            satisfaction_rating: None,
            notes: self.notes,
            consent_given: true,
        }
    }
}

/// A registered health customer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCustomer {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub emergency_contact: String,
    pub health_concerns: Vec<String>,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub preferred_language: PreferredLanguage,
    pub consultation_type: ConsultationType,
    pub urgency_level: UrgencyLevel,
    pub registration_date: NaiveDate,
    pub last_consultation: Option<NaiveDate>,
    pub status: HealthStatus,
    pub satisfaction_rating: Option<u8>,
    pub notes: String,
    pub consent_given: bool,
}

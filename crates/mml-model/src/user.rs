//! User records and the registration form.

use serde::{Deserialize, Serialize};

use crate::category::UserCategory;
use crate::error::ModelError;
use crate::ids::{DocumentId, EmailAddress};
use crate::payment::PaymentRecord;
use crate::profile::ProfileData;

/// The registration step of the wizard: contact details and credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub organization: Option<String>,
    pub password: String,
}

impl RegistrationForm {
    /// Edge validation: the form does not submit with blank required fields.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(ModelError::MissingField("phone"));
        }
        if self.password.trim().is_empty() {
            return Err(ModelError::MissingField("password"));
        }
        Ok(())
    }
}

/// A registered portal user. `profile` stays `None` between registration and
/// profile completion; a user with a profile has finished the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Unique key across the user collection.
    pub email: EmailAddress,
    pub phone: String,
    pub organization: Option<String>,
    pub password: String,
    pub category: UserCategory,
    pub profile: Option<ProfileData>,
    pub has_active_subscription: bool,
    /// Append-only payment history.
    pub payments: Vec<PaymentRecord>,
    pub bookmarked_doc_ids: Vec<DocumentId>,
}

impl UserRecord {
    /// Build the partially-filled record stored at registration time.
    pub fn from_registration(
        form: RegistrationForm,
        category: UserCategory,
        first_payment: PaymentRecord,
    ) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            organization: form.organization,
            password: form.password,
            category,
            profile: None,
            has_active_subscription: false,
            payments: vec![first_payment],
            bookmarked_doc_ids: Vec::new(),
        }
    }

    /// Whether the user completed the profile step.
    pub fn is_profile_complete(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_bookmarked(&self, doc_id: &DocumentId) -> bool {
        self.bookmarked_doc_ids.contains(doc_id)
    }
}

/// Partial update applied to an existing profile from the account page.
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<Option<String>>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<Option<String>>,
}

//! The portal's data-access layer.
//!
//! `PortalStore` is an explicitly owned repository over three in-memory
//! collections (users, documents, cases) plus a server-side session table.
//! Its lifecycle is tied to application startup and shutdown, and it is
//! injected into the application controller rather than referenced as
//! ambient state. It is a single-session simulation: nothing here is safe
//! for concurrent multi-client access.

use std::collections::BTreeMap;

use tracing::{debug, info};

use mml_model::{
    CaseId, CaseSolution, CaseStatus, CategoryInfo, ConsultancyCase, DocumentId, DocumentType,
    EmailAddress, LibraryDocument, ModelError, NewCase, NewDocument, PaymentConfirmation,
    PaymentId, PaymentRecord, ProfileData, ProfileUpdate, RegistrationForm, UserCategory,
    UserRecord,
};

use crate::error::{Result, StoreError};
use crate::latency::{LatencyProfile, OpWeight};
use crate::seed::seed_documents;
use crate::session::{Session, SessionId};
use crate::stamp::StampSource;

/// Whose cases a consultancy listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseScope<'a> {
    /// The admin console sees every case.
    Admin,
    /// A user session sees only its own cases.
    Session(&'a SessionId),
}

/// In-memory repository backing the portal.
#[derive(Debug, Default)]
pub struct PortalStore {
    users: Vec<UserRecord>,
    documents: Vec<LibraryDocument>,
    cases: Vec<ConsultancyCase>,
    sessions: BTreeMap<SessionId, EmailAddress>,
    stamps: StampSource,
    latency: LatencyProfile,
}

impl PortalStore {
    /// An empty store with no latency simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the initial library.
    pub fn with_seed_documents() -> Self {
        Self {
            documents: seed_documents(),
            ..Self::default()
        }
    }

    /// Set the latency profile for all subsequent operations.
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    // === auth ===

    /// Authenticate by email and password. Unknown emails are rejected the
    /// same way as wrong passwords.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        self.latency.pause(OpWeight::Medium);
        let email = EmailAddress::new(email).map_err(|_| StoreError::InvalidCredentials)?;
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(StoreError::InvalidCredentials)?
            .clone();
        let token = SessionId::issue(&email, self.stamps.next());
        self.sessions.insert(token.clone(), email.clone());
        info!(user = %email, "login");
        Ok(Session { token, user })
    }

    /// Drop a session. Unknown tokens are ignored.
    pub fn logout(&mut self, token: &SessionId) {
        self.latency.pause(OpWeight::Light);
        if self.sessions.remove(token).is_some() {
            debug!("session closed");
        }
    }

    /// Resolve the session to its user record.
    pub fn current_user(&self, token: &SessionId) -> Result<&UserRecord> {
        self.latency.pause(OpWeight::Light);
        let email = self.session_email(token)?.clone();
        self.user_by_email(&email)
    }

    /// Register a new account against a confirmed registration-fee payment.
    /// Profile fields stay empty until the profile step completes.
    pub fn register(
        &mut self,
        form: RegistrationForm,
        category: UserCategory,
        confirmation: &PaymentConfirmation,
    ) -> Result<Session> {
        self.latency.pause(OpWeight::Medium);
        form.validate().map_err(StoreError::Invalid)?;
        if self.users.iter().any(|u| u.email == form.email) {
            return Err(StoreError::DuplicateEmail(form.email));
        }
        let info = CategoryInfo::lookup(category);
        let payment = self.payment_record(
            confirmation,
            format!("Registration Fee for {}", info.label),
            info.registration_fee,
        );
        let email = form.email.clone();
        let user = UserRecord::from_registration(form, category, payment);
        self.users.push(user);
        let token = SessionId::issue(&email, self.stamps.next());
        self.sessions.insert(token.clone(), email.clone());
        let user = self.user_by_email(&email)?.clone();
        info!(user = %email, category = %category, "registered");
        Ok(Session { token, user })
    }

    /// Attach the wizard's profile step to the session user.
    pub fn complete_profile(&mut self, token: &SessionId, profile: ProfileData) -> Result<UserRecord> {
        self.latency.pause(OpWeight::Medium);
        let email = self.session_email(token)?.clone();
        let index = self.user_index(&email)?;
        profile
            .validate_for(self.users[index].category)
            .map_err(StoreError::Invalid)?;
        self.users[index].profile = Some(profile);
        info!(user = %email, "profile completed");
        Ok(self.users[index].clone())
    }

    /// Apply a partial update from the account page.
    pub fn update_profile(&mut self, token: &SessionId, update: ProfileUpdate) -> Result<UserRecord> {
        self.latency.pause(OpWeight::Medium);
        let email = self.session_email(token)?.clone();
        let index = self.user_index(&email)?;
        let touches_profile =
            update.address.is_some() || update.bio.is_some() || update.profile_picture.is_some();
        if touches_profile && self.users[index].profile.is_none() {
            return Err(StoreError::Invalid(ModelError::MissingField("profile")));
        }
        let user = &mut self.users[index];
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(organization) = update.organization {
            user.organization = organization;
        }
        if let Some(profile) = user.profile.as_mut() {
            if let Some(address) = update.address {
                profile.address = address;
            }
            if let Some(bio) = update.bio {
                profile.bio = bio;
            }
            if let Some(picture) = update.profile_picture {
                profile.profile_picture = picture;
            }
        }
        Ok(user.clone())
    }

    /// Change the session user's password after checking the current one.
    pub fn change_password(&mut self, token: &SessionId, old: &str, new: &str) -> Result<()> {
        self.latency.pause(OpWeight::Medium);
        if new.trim().is_empty() {
            return Err(StoreError::Invalid(ModelError::MissingField("password")));
        }
        let email = self.session_email(token)?.clone();
        let index = self.user_index(&email)?;
        if self.users[index].password != old {
            return Err(StoreError::InvalidCredentials);
        }
        self.users[index].password = new.to_string();
        info!(user = %email, "password changed");
        Ok(())
    }

    /// Admin listing of every registered user, in insertion order.
    pub fn all_users(&self) -> &[UserRecord] {
        self.latency.pause(OpWeight::Medium);
        &self.users
    }

    // === library ===

    /// Documents, optionally filtered to one bucket. Insertion order is
    /// preserved; admin additions sit in front of the seeded entries.
    pub fn documents(&self, filter: Option<DocumentType>) -> Vec<LibraryDocument> {
        self.latency.pause(OpWeight::Medium);
        self.documents
            .iter()
            .filter(|doc| filter.is_none_or(|t| doc.doc_type == t))
            .cloned()
            .collect()
    }

    /// Admin: add a document. The id is synthesized from a timestamp and the
    /// document is placed at the front of the collection.
    pub fn add_document(&mut self, new: NewDocument) -> Result<LibraryDocument> {
        self.latency.pause(OpWeight::Medium);
        new.validate().map_err(StoreError::Invalid)?;
        let stamp = self.stamps.next();
        let id = DocumentId::new(format!("doc-{stamp}")).map_err(StoreError::Invalid)?;
        let document = new.into_document(id);
        self.documents.insert(0, document.clone());
        info!(id = %document.id, "document added");
        Ok(document)
    }

    /// Admin: replace a document in place.
    pub fn update_document(&mut self, document: LibraryDocument) -> Result<LibraryDocument> {
        self.latency.pause(OpWeight::Medium);
        let slot = self
            .documents
            .iter_mut()
            .find(|d| d.id == document.id)
            .ok_or_else(|| StoreError::DocumentNotFound(document.id.clone()))?;
        *slot = document.clone();
        Ok(document)
    }

    /// Admin: remove a document. Returns whether anything was removed.
    pub fn delete_document(&mut self, id: &DocumentId) -> bool {
        self.latency.pause(OpWeight::Medium);
        let before = self.documents.len();
        self.documents.retain(|d| &d.id != id);
        let removed = self.documents.len() < before;
        if removed {
            info!(id = %id, "document deleted");
        }
        removed
    }

    /// Flip a bookmark on the session user. Toggling twice restores the
    /// original list.
    pub fn toggle_bookmark(&mut self, token: &SessionId, doc_id: &DocumentId) -> Result<UserRecord> {
        self.latency.pause(OpWeight::Light);
        if !self.documents.iter().any(|d| &d.id == doc_id) {
            return Err(StoreError::DocumentNotFound(doc_id.clone()));
        }
        let email = self.session_email(token)?.clone();
        let index = self.user_index(&email)?;
        let user = &mut self.users[index];
        if user.is_bookmarked(doc_id) {
            user.bookmarked_doc_ids.retain(|id| id != doc_id);
        } else {
            user.bookmarked_doc_ids.push(doc_id.clone());
        }
        Ok(user.clone())
    }

    // === subscriptions ===

    /// Activate the annual library subscription against a confirmed payment.
    pub fn subscribe_to_library(
        &mut self,
        email: &EmailAddress,
        confirmation: &PaymentConfirmation,
    ) -> Result<UserRecord> {
        self.latency.pause(OpWeight::Heavy);
        let index = self.user_index(email)?;
        let amount = CategoryInfo::lookup(self.users[index].category).subscription_fee;
        let payment =
            self.payment_record(confirmation, "Annual Library Subscription".to_string(), amount);
        let user = &mut self.users[index];
        user.has_active_subscription = true;
        user.payments.push(payment);
        info!(user = %email, amount, "library subscription activated");
        Ok(user.clone())
    }

    // === consultancy ===

    /// Cases visible to the given scope, newest first.
    pub fn consultancy_cases(&self, scope: CaseScope<'_>) -> Result<Vec<ConsultancyCase>> {
        self.latency.pause(OpWeight::Medium);
        let mut cases: Vec<ConsultancyCase> = match scope {
            CaseScope::Admin => self.cases.clone(),
            CaseScope::Session(token) => {
                let email = self.session_email(token)?.clone();
                self.cases
                    .iter()
                    .filter(|c| c.user_email == email)
                    .cloned()
                    .collect()
            }
        };
        cases.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(cases)
    }

    /// Submit a new consultancy case for the session user.
    pub fn submit_case(&mut self, token: &SessionId, new: NewCase) -> Result<ConsultancyCase> {
        self.latency.pause(OpWeight::Medium);
        new.validate().map_err(StoreError::Invalid)?;
        let email = self.session_email(token)?.clone();
        let user = self.user_by_email(&email)?;
        let user_name = user.name.clone();
        let stamp = self.stamps.next();
        let id = CaseId::new(format!("CASE-{}", StampSource::case_suffix(stamp)))
            .map_err(StoreError::Invalid)?;
        let case = ConsultancyCase {
            id,
            date: chrono::Utc::now(),
            issue: new.issue,
            document_url: new.document_url,
            document_name: new.document_name.unwrap_or_else(|| "N/A".to_string()),
            status: CaseStatus::Pending,
            solution: None,
            solution_document_url: None,
            solution_document_name: None,
            fee: None,
            is_paid: false,
            user_name,
            user_email: email,
        };
        self.cases.insert(0, case.clone());
        info!(id = %case.id, "case submitted");
        Ok(case)
    }

    /// Admin: attach a solution and fee, advancing the case to
    /// SolutionReady. Completed cases reject the update.
    pub fn attach_solution(&mut self, solution: CaseSolution) -> Result<ConsultancyCase> {
        self.latency.pause(OpWeight::Medium);
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == solution.case_id)
            .ok_or_else(|| StoreError::CaseNotFound(solution.case_id.clone()))?;
        if !case.status.can_advance_to(CaseStatus::SolutionReady) {
            return Err(StoreError::CaseClosed(case.id.clone()));
        }
        case.solution = Some(solution.solution);
        case.fee = Some(solution.fee);
        case.solution_document_url = solution.solution_document_url;
        case.solution_document_name = solution.solution_document_name;
        case.status = CaseStatus::SolutionReady;
        info!(id = %case.id, fee = solution.fee, "solution attached");
        Ok(case.clone())
    }

    /// Settle a case fee for the session user: the payment is recorded on
    /// the user and the case becomes paid and Completed.
    pub fn pay_for_case(
        &mut self,
        token: &SessionId,
        case_id: &CaseId,
        amount: u64,
        confirmation: &PaymentConfirmation,
    ) -> Result<(ConsultancyCase, UserRecord)> {
        self.latency.pause(OpWeight::Heavy);
        let email = self.session_email(token)?.clone();
        let user_index = self.user_index(&email)?;
        let case_index = self
            .cases
            .iter()
            .position(|c| &c.id == case_id)
            .ok_or_else(|| StoreError::CaseNotFound(case_id.clone()))?;
        if self.cases[case_index].status.is_terminal() {
            return Err(StoreError::CaseClosed(case_id.clone()));
        }
        let payment = self.payment_record(
            confirmation,
            format!("Consultancy Fee for Case #{case_id}"),
            amount,
        );
        self.users[user_index].payments.push(payment);
        let case = &mut self.cases[case_index];
        case.is_paid = true;
        case.status = CaseStatus::Completed;
        info!(id = %case.id, amount, "case fee settled");
        Ok((case.clone(), self.users[user_index].clone()))
    }

    // === uploads ===

    /// Simulated file upload: returns a fake URL, stores nothing.
    pub fn upload_file(&mut self, file_name: &str) -> String {
        self.latency.pause(OpWeight::Heavy);
        let stamp = self.stamps.next();
        let url = format!("/uploads/mock-{stamp}-{file_name}");
        debug!(url = %url, "simulated upload");
        url
    }

    // === helpers ===

    fn session_email(&self, token: &SessionId) -> Result<&EmailAddress> {
        self.sessions.get(token).ok_or(StoreError::NotAuthenticated)
    }

    fn user_by_email(&self, email: &EmailAddress) -> Result<&UserRecord> {
        self.users
            .iter()
            .find(|u| &u.email == email)
            .ok_or_else(|| StoreError::UserNotFound(email.clone()))
    }

    fn user_index(&self, email: &EmailAddress) -> Result<usize> {
        self.users
            .iter()
            .position(|u| &u.email == email)
            .ok_or_else(|| StoreError::UserNotFound(email.clone()))
    }

    fn payment_record(
        &self,
        confirmation: &PaymentConfirmation,
        description: String,
        amount: u64,
    ) -> PaymentRecord {
        PaymentRecord {
            id: confirmation.payment_id.clone(),
            date: chrono::Utc::now(),
            description,
            amount,
            reference: confirmation.payment_id.as_str().to_string(),
        }
    }
}

/// Build a payment id for internally generated references (subscription and
/// case settlements driven by the demo gateway use gateway-issued ids; this
/// exists for callers that only have a raw reference string).
pub fn payment_confirmation(reference: &str) -> Result<PaymentConfirmation> {
    let payment_id = PaymentId::new(reference).map_err(StoreError::Invalid)?;
    Ok(PaymentConfirmation { payment_id })
}

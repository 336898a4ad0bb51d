//! The top-level application controller.
//!
//! `PortalApp` owns the store, the checkout gateway, the current step, and
//! the in-progress registration draft. Transitions are caller-triggered and
//! synchronous; guard failures come back as typed `AppError`s and leave the
//! step unchanged.

use tracing::{debug, info, warn};

use mml_model::{
    CaseSolution, CategoryInfo, ConsultancyCase, DocumentId, LibraryDocument, NewCase,
    NewDocument, ProfileData, RegistrationForm, UserCategory, UserRecord,
};
use mml_store::{CaseScope, PortalStore, SessionId};

use crate::error::{AppError, Result};
use crate::payment::{CheckoutPrefill, CheckoutRequest, PaymentGateway};
use crate::step::AppStep;

/// Hardcoded admin console credentials. An admin login never touches the
/// user collection.
pub const ADMIN_EMAIL: &str = "admin@mail.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// The registration wizard's in-progress user.
#[derive(Debug, Clone, Default)]
struct Draft {
    category: Option<UserCategory>,
}

/// Application state machine over the portal store.
pub struct PortalApp<G> {
    store: PortalStore,
    gateway: G,
    step: AppStep,
    draft: Draft,
    session: Option<SessionId>,
}

impl<G: PaymentGateway> PortalApp<G> {
    pub fn new(store: PortalStore, gateway: G) -> Self {
        Self {
            store,
            gateway,
            step: AppStep::Introduction,
            draft: Draft::default(),
            session: None,
        }
    }

    pub fn step(&self) -> AppStep {
        self.step
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &PortalStore {
        &self.store
    }

    /// The signed-in user, when a session is active.
    pub fn current_user(&self) -> Result<UserRecord> {
        let token = self.session.as_ref().ok_or(AppError::NoSession)?;
        Ok(self.store.current_user(token)?.clone())
    }

    // === wizard ===

    /// Introduction -> Landing.
    pub fn get_started(&mut self) -> Result<()> {
        self.expect_step(AppStep::Introduction)?;
        self.step = AppStep::Landing;
        Ok(())
    }

    /// Introduction or Landing -> Login.
    pub fn go_to_login(&mut self) -> Result<()> {
        self.expect_one_of(&[AppStep::Introduction, AppStep::Landing])?;
        self.step = AppStep::Login;
        Ok(())
    }

    /// Abandon the wizard or login and return to the category pick.
    pub fn back_to_landing(&mut self) -> Result<()> {
        self.expect_one_of(&[AppStep::Login, AppStep::Registration])?;
        self.draft = Draft::default();
        self.step = AppStep::Landing;
        Ok(())
    }

    /// Seed the draft with a category and open the registration form.
    pub fn select_category(&mut self, category: UserCategory) -> Result<()> {
        self.expect_one_of(&[AppStep::Introduction, AppStep::Landing])?;
        self.draft.category = Some(category);
        self.step = AppStep::Registration;
        debug!(category = %category, "category selected");
        Ok(())
    }

    /// Collect the registration fee, store the partial user, and move to
    /// verification. A checkout failure leaves the store untouched.
    pub fn submit_registration(&mut self, form: RegistrationForm) -> Result<()> {
        self.expect_step(AppStep::Registration)?;
        let category = self.draft.category.ok_or(AppError::MissingDraft)?;
        form.validate().map_err(mml_store::StoreError::Invalid)?;
        let info = CategoryInfo::lookup(category);
        let request = CheckoutRequest::new(
            info.registration_fee,
            format!("Registration Fee for {}", info.label),
            CheckoutPrefill {
                name: form.name.clone(),
                email: form.email.to_string(),
                contact: form.phone.clone(),
            },
        );
        let confirmation = self.gateway.checkout(&request)?;
        let session = self.store.register(form, category, &confirmation)?;
        self.session = Some(session.token);
        self.step = AppStep::Verification;
        Ok(())
    }

    /// Verification always succeeds; no real email check is performed.
    pub fn confirm_verification(&mut self) -> Result<()> {
        self.expect_step(AppStep::Verification)?;
        self.step = AppStep::Profile;
        Ok(())
    }

    /// Finalize the draft into a full user record and land on the dashboard.
    pub fn submit_profile(&mut self, profile: ProfileData) -> Result<()> {
        self.expect_step(AppStep::Profile)?;
        let token = self.session.clone().ok_or(AppError::NoSession)?;
        self.store.complete_profile(&token, profile)?;
        self.draft = Draft::default();
        self.step = AppStep::Dashboard;
        Ok(())
    }

    // === sign-in ===

    /// Sign in. The admin credential pair opens the admin console without a
    /// user record; anything else must match a stored user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.expect_step(AppStep::Login)?;
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.session = None;
            self.step = AppStep::Admin;
            info!("admin login");
            return Ok(());
        }
        let session = self.store.login(email, password)?;
        self.session = Some(session.token);
        self.step = AppStep::Dashboard;
        Ok(())
    }

    /// Any step -> Introduction; clears the draft and drops the session.
    pub fn logout(&mut self) {
        if let Some(token) = self.session.take() {
            self.store.logout(&token);
        }
        self.draft = Draft::default();
        self.step = AppStep::Introduction;
    }

    // === feature areas ===

    /// Dashboard -> Library, gated on an active subscription.
    pub fn enter_library(&mut self) -> Result<()> {
        self.expect_step(AppStep::Dashboard)?;
        let user = self.current_user()?;
        if !user.has_active_subscription {
            warn!(user = %user.email, "library access without subscription");
            return Err(AppError::SubscriptionRequired);
        }
        self.step = AppStep::Library;
        Ok(())
    }

    /// Dashboard -> Consultancy.
    pub fn enter_consultancy(&mut self) -> Result<()> {
        self.expect_step(AppStep::Dashboard)?;
        self.step = AppStep::Consultancy;
        Ok(())
    }

    /// Library or Consultancy -> Dashboard.
    pub fn back_to_dashboard(&mut self) -> Result<()> {
        self.expect_one_of(&[AppStep::Library, AppStep::Consultancy])?;
        self.step = AppStep::Dashboard;
        Ok(())
    }

    /// Buy the annual library subscription for the signed-in user.
    pub fn subscribe(&mut self) -> Result<UserRecord> {
        self.expect_step(AppStep::Dashboard)?;
        let user = self.current_user()?;
        let info = CategoryInfo::lookup(user.category);
        let request = CheckoutRequest::new(
            info.subscription_fee,
            format!("Annual subscription for {}", info.label),
            prefill_from(&user),
        );
        let confirmation = self.gateway.checkout(&request)?;
        Ok(self.store.subscribe_to_library(&user.email, &confirmation)?)
    }

    /// Documents visible in the library (or to the admin console).
    pub fn documents(
        &self,
        filter: Option<mml_model::DocumentType>,
    ) -> Result<Vec<LibraryDocument>> {
        self.expect_one_of(&[AppStep::Library, AppStep::Admin])?;
        Ok(self.store.documents(filter))
    }

    /// Flip a bookmark for the signed-in user.
    pub fn toggle_bookmark(&mut self, doc_id: &DocumentId) -> Result<UserRecord> {
        self.expect_step(AppStep::Library)?;
        let token = self.session.clone().ok_or(AppError::NoSession)?;
        Ok(self.store.toggle_bookmark(&token, doc_id)?)
    }

    // === consultancy ===

    /// The signed-in user's cases, newest first.
    pub fn my_cases(&self) -> Result<Vec<ConsultancyCase>> {
        self.expect_one_of(&[AppStep::Dashboard, AppStep::Consultancy])?;
        let token = self.session.as_ref().ok_or(AppError::NoSession)?;
        Ok(self.store.consultancy_cases(CaseScope::Session(token))?)
    }

    /// Submit a new case, uploading the supporting document first when one
    /// is attached.
    pub fn submit_case(
        &mut self,
        issue: &str,
        document: Option<&str>,
    ) -> Result<ConsultancyCase> {
        self.expect_step(AppStep::Consultancy)?;
        let token = self.session.clone().ok_or(AppError::NoSession)?;
        let (document_url, document_name) = match document {
            Some(name) => (Some(self.store.upload_file(name)), Some(name.to_string())),
            None => (None, None),
        };
        Ok(self.store.submit_case(
            &token,
            NewCase {
                issue: issue.to_string(),
                document_url,
                document_name,
            },
        )?)
    }

    /// Settle the fee the admin quoted on a case. The checkout runs first;
    /// the case is only marked paid inside the success path.
    pub fn pay_for_case(&mut self, case_id: &mml_model::CaseId) -> Result<ConsultancyCase> {
        self.expect_step(AppStep::Consultancy)?;
        let token = self.session.clone().ok_or(AppError::NoSession)?;
        let user = self.current_user()?;
        let case = self
            .store
            .consultancy_cases(CaseScope::Session(&token))?
            .into_iter()
            .find(|c| &c.id == case_id)
            .ok_or_else(|| mml_store::StoreError::CaseNotFound(case_id.clone()))?;
        let fee = case.fee.ok_or_else(|| AppError::NoFeeSet(case_id.clone()))?;
        let request = CheckoutRequest::new(
            fee,
            format!("Consultancy Fee for Case #{case_id}"),
            prefill_from(&user),
        );
        let confirmation = self.gateway.checkout(&request)?;
        let (case, _user) = self.store.pay_for_case(&token, case_id, fee, &confirmation)?;
        Ok(case)
    }

    // === admin console ===

    /// Every registered user (admin console).
    pub fn users(&self) -> Result<Vec<UserRecord>> {
        self.expect_admin()?;
        Ok(self.store.all_users().to_vec())
    }

    /// Every case across all users, newest first (admin console).
    pub fn cases(&self) -> Result<Vec<ConsultancyCase>> {
        self.expect_admin()?;
        Ok(self.store.consultancy_cases(CaseScope::Admin)?)
    }

    pub fn add_document(&mut self, new: NewDocument) -> Result<LibraryDocument> {
        self.expect_admin()?;
        Ok(self.store.add_document(new)?)
    }

    pub fn update_document(&mut self, document: LibraryDocument) -> Result<LibraryDocument> {
        self.expect_admin()?;
        Ok(self.store.update_document(document)?)
    }

    pub fn delete_document(&mut self, id: &DocumentId) -> Result<bool> {
        self.expect_admin()?;
        Ok(self.store.delete_document(id))
    }

    /// Attach a solution and fee to a case (admin console).
    pub fn attach_solution(&mut self, solution: CaseSolution) -> Result<ConsultancyCase> {
        self.expect_admin()?;
        Ok(self.store.attach_solution(solution)?)
    }

    // === guards ===

    fn expect_step(&self, expected: AppStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(AppError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn expect_one_of(&self, allowed: &[AppStep]) -> Result<()> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(AppError::WrongStep {
                expected: allowed[0],
                actual: self.step,
            })
        }
    }

    fn expect_admin(&self) -> Result<()> {
        if self.step == AppStep::Admin {
            Ok(())
        } else {
            Err(AppError::NotAdmin)
        }
    }
}

fn prefill_from(user: &UserRecord) -> CheckoutPrefill {
    CheckoutPrefill {
        name: user.name.clone(),
        email: user.email.to_string(),
        contact: user.phone.clone(),
    }
}

use mml_app::{
    ADMIN_EMAIL, ADMIN_PASSWORD, AppError, AppStep, ApprovingGateway, CheckoutRequest,
    PaymentError, PaymentGateway, PortalApp,
};
use mml_model::{
    CaseSolution, CaseStatus, CategoryProfile, EmailAddress, PaymentConfirmation, ProfileData,
    RegistrationForm, UserCategory,
};
use mml_store::PortalStore;

/// A gateway that fails every checkout, for exercising the
/// no-payment-no-mutation contract.
struct RefusingGateway;

impl PaymentGateway for RefusingGateway {
    fn checkout(&self, _request: &CheckoutRequest) -> Result<PaymentConfirmation, PaymentError> {
        Err(PaymentError::Failed("card declined".to_string()))
    }
}

/// A gateway the user always dismisses.
struct DismissingGateway;

impl PaymentGateway for DismissingGateway {
    fn checkout(&self, _request: &CheckoutRequest) -> Result<PaymentConfirmation, PaymentError> {
        Err(PaymentError::Dismissed)
    }
}

fn registration_form(email: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Asha Rao".to_string(),
        email: EmailAddress::new(email).expect("valid email"),
        phone: "9000000001".to_string(),
        organization: Some("Rao Minerals".to_string()),
        password: "secret".to_string(),
    }
}

fn student_profile() -> ProfileData {
    ProfileData {
        address: "12 Court Road".to_string(),
        bio: "Final-year law student".to_string(),
        profile_picture: None,
        details: CategoryProfile::Academic {
            college_name: "National Law School".to_string(),
            university_name: "NLSIU".to_string(),
        },
    }
}

fn leasee_profile() -> ProfileData {
    ProfileData {
        address: "12 Mines Road, Ranchi".to_string(),
        bio: "Lease holder since 2015".to_string(),
        profile_picture: None,
        details: CategoryProfile::MiningOperation {
            state: "Jharkhand".to_string(),
            district: "Ranchi".to_string(),
            circle: "Kanke".to_string(),
            mauza: "Pithoria".to_string(),
            plot_no: "118".to_string(),
            area: "5.2 Hectares".to_string(),
            revenue_thana_number: "221".to_string(),
            thana_ps: "Kanke PS".to_string(),
            minerals: "Bauxite".to_string(),
            nature_of_land: "Raiyati".to_string(),
            mine_code_ibm: "IBM-4451".to_string(),
            mine_code_dgms: "DGMS-902".to_string(),
        },
    }
}

fn app() -> PortalApp<ApprovingGateway> {
    PortalApp::new(PortalStore::with_seed_documents(), ApprovingGateway::new())
}

/// Drive the wizard through to the dashboard for a Leasee.
fn signed_in_leasee() -> PortalApp<ApprovingGateway> {
    let mut app = app();
    app.get_started().expect("get started");
    app.select_category(UserCategory::Leasee).expect("select category");
    app.submit_registration(registration_form("asha@example.com"))
        .expect("register");
    app.confirm_verification().expect("verify");
    app.submit_profile(leasee_profile()).expect("profile");
    app
}

#[test]
fn wizard_walks_introduction_to_dashboard() {
    let mut app = app();
    assert_eq!(app.step(), AppStep::Introduction);

    app.get_started().expect("get started");
    assert_eq!(app.step(), AppStep::Landing);

    app.select_category(UserCategory::Student).expect("select category");
    assert_eq!(app.step(), AppStep::Registration);

    app.submit_registration(registration_form("ravi@example.com"))
        .expect("register");
    assert_eq!(app.step(), AppStep::Verification);

    app.confirm_verification().expect("verify");
    assert_eq!(app.step(), AppStep::Profile);

    app.submit_profile(student_profile()).expect("profile");
    assert_eq!(app.step(), AppStep::Dashboard);

    let user = app.current_user().expect("current user");
    assert_eq!(user.category, UserCategory::Student);
    assert!(!user.has_active_subscription);
}

#[test]
fn transitions_out_of_order_are_rejected() {
    let mut app = app();
    let err = app.confirm_verification().unwrap_err();
    assert!(matches!(err, AppError::WrongStep { .. }));
    assert_eq!(app.step(), AppStep::Introduction);

    let err = app.submit_registration(registration_form("x@example.com")).unwrap_err();
    assert!(matches!(err, AppError::WrongStep { .. }));
}

#[test]
fn failed_registration_checkout_leaves_store_untouched() {
    let mut app = PortalApp::new(PortalStore::new(), RefusingGateway);
    app.get_started().expect("get started");
    app.select_category(UserCategory::Firm).expect("select category");

    let err = app
        .submit_registration(registration_form("asha@example.com"))
        .unwrap_err();
    assert!(matches!(err, AppError::Payment(PaymentError::Failed(_))));
    assert_eq!(app.step(), AppStep::Registration);
    assert!(app.store().all_users().is_empty());
}

#[test]
fn library_is_gated_on_subscription() {
    let mut app = signed_in_leasee();

    let err = app.enter_library().unwrap_err();
    assert_eq!(err, AppError::SubscriptionRequired);
    assert_eq!(app.step(), AppStep::Dashboard);

    let user = app.subscribe().expect("subscribe");
    assert!(user.has_active_subscription);
    assert_eq!(user.payments.last().expect("payment").amount, 12000);

    app.enter_library().expect("enter library");
    assert_eq!(app.step(), AppStep::Library);

    let docs = app.documents(None).expect("documents");
    assert_eq!(docs.len(), 7);

    app.back_to_dashboard().expect("back");
    assert_eq!(app.step(), AppStep::Dashboard);
}

#[test]
fn dismissed_checkout_surfaces_as_payment_error() {
    let mut app = PortalApp::new(PortalStore::new(), DismissingGateway);
    app.get_started().expect("get started");
    app.select_category(UserCategory::Leasee).expect("select category");

    let err = app
        .submit_registration(registration_form("asha@example.com"))
        .unwrap_err();
    assert!(matches!(err, AppError::Payment(PaymentError::Dismissed)));
    assert_eq!(app.step(), AppStep::Registration);
    assert!(app.store().all_users().is_empty());
}

#[test]
fn consultancy_round_trip_with_admin_solution_and_payment() {
    let mut app = signed_in_leasee();
    app.enter_consultancy().expect("enter consultancy");

    let case = app
        .submit_case("Lease renewal query", None)
        .expect("submit case");
    assert_eq!(case.status, CaseStatus::Pending);
    assert_eq!(case.document_name, "N/A");
    assert!(!case.is_paid);

    // Paying before a fee is quoted is refused.
    let err = app.pay_for_case(&case.id).unwrap_err();
    assert!(matches!(err, AppError::NoFeeSet(_)));

    // Same process, same store: sign out and re-enter as the admin console.
    app.logout();
    app.go_to_login().expect("to login");
    app.login(ADMIN_EMAIL, ADMIN_PASSWORD).expect("admin login");
    let solved = app
        .attach_solution(CaseSolution {
            case_id: case.id.clone(),
            solution: "Renew under Section 8(3)".to_string(),
            fee: 500,
            solution_document_url: None,
            solution_document_name: None,
        })
        .expect("attach solution");
    assert_eq!(solved.status, CaseStatus::SolutionReady);

    app.logout();
    app.go_to_login().expect("to login");
    app.login("asha@example.com", "secret").expect("user login");
    app.enter_consultancy().expect("enter consultancy");
    let paid = app.pay_for_case(&case.id).expect("pay");
    assert!(paid.is_paid);
    assert_eq!(paid.status, CaseStatus::Completed);

    let user = app.current_user().expect("current user");
    let payment = user.payments.last().expect("payment");
    assert_eq!(payment.amount, 500);
}

#[test]
fn case_with_document_gets_an_upload_url() {
    let mut app = signed_in_leasee();
    app.enter_consultancy().expect("enter consultancy");
    let case = app
        .submit_case("Quarry permit scope", Some("site-map.pdf"))
        .expect("submit case");
    assert_eq!(case.document_name, "site-map.pdf");
    let url = case.document_url.expect("upload url");
    assert!(url.starts_with("/uploads/mock-"));
}

#[test]
fn admin_login_opens_console_without_creating_a_user() {
    let mut app = app();
    app.go_to_login().expect("to login");
    app.login(ADMIN_EMAIL, ADMIN_PASSWORD).expect("admin login");
    assert_eq!(app.step(), AppStep::Admin);
    assert!(app.users().expect("users").is_empty());
    assert!(app.current_user().is_err());
}

#[test]
fn unknown_credentials_are_rejected_at_login() {
    let mut app = app();
    app.go_to_login().expect("to login");
    let err = app.login("stranger@example.com", "whatever").unwrap_err();
    assert!(matches!(
        err,
        AppError::Store(mml_store::StoreError::InvalidCredentials)
    ));
    assert_eq!(app.step(), AppStep::Login);
}

#[test]
fn admin_guard_blocks_console_actions_elsewhere() {
    let app = signed_in_leasee();
    assert_eq!(app.users().unwrap_err(), AppError::NotAdmin);
    assert_eq!(app.cases().unwrap_err(), AppError::NotAdmin);
}

#[test]
fn logout_resets_to_introduction() {
    let mut app = signed_in_leasee();
    app.logout();
    assert_eq!(app.step(), AppStep::Introduction);
    assert!(app.current_user().is_err());

    // The account survives in the store; fresh login works.
    app.go_to_login().expect("to login");
    app.login("asha@example.com", "secret").expect("login again");
    assert_eq!(app.step(), AppStep::Dashboard);
}

#[test]
fn bookmarks_toggle_from_the_library() {
    let mut app = signed_in_leasee();
    app.subscribe().expect("subscribe");
    app.enter_library().expect("enter library");

    let doc_id = app.documents(None).expect("documents")[0].id.clone();
    let user = app.toggle_bookmark(&doc_id).expect("bookmark");
    assert!(user.is_bookmarked(&doc_id));
    let user = app.toggle_bookmark(&doc_id).expect("unbookmark");
    assert!(!user.is_bookmarked(&doc_id));
}

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use mml_app::{ADMIN_EMAIL, ADMIN_PASSWORD, ApprovingGateway, AppError, PortalApp};
use mml_model::{
    CaseSolution, CaseStatus, CategoryInfo, CategoryProfile, EmailAddress, ProfileData,
    RegistrationForm, UserCategory, category_catalog,
};
use mml_store::{LatencyProfile, PortalStore};

use mml_cli::logging::redact_value;

use crate::cli::{DemoArgs, DocumentsArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{DemoResult, DemoStep};

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Tier"),
        header_cell("Registration Fee"),
        header_cell("Subscription Fee"),
    ]);
    apply_table_style(&mut table);
    for info in category_catalog() {
        table.add_row(vec![
            info.label.to_string(),
            info.tier.to_string(),
            format!("Rs. {}", info.registration_fee),
            format!("Rs. {}/yr", info.subscription_fee),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_documents(args: &DocumentsArgs) -> Result<()> {
    let store = PortalStore::with_seed_documents();
    let documents = store.documents(args.doc_type.map(Into::into));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Type"),
        header_cell("Date"),
        header_cell("Title"),
    ]);
    apply_table_style(&mut table);
    for document in &documents {
        table.add_row(vec![
            document.id.to_string(),
            document.doc_type.label().to_string(),
            document.date.to_string(),
            document.title.clone(),
        ]);
    }
    println!("{table}");
    println!("{} document(s)", documents.len());
    Ok(())
}

/// Walks one citizen and the admin console through the whole portal: register
/// as a Leasee, complete the profile, subscribe, bookmark a document, file a
/// consultancy case, quote and pay the fee.
pub fn run_demo(args: &DemoArgs) -> Result<DemoResult> {
    let span = info_span!("demo");
    let _guard = span.enter();
    let latency = if args.simulate_latency {
        LatencyProfile::Simulated
    } else {
        LatencyProfile::Off
    };
    let store = PortalStore::with_seed_documents().with_latency(latency);
    let mut app = PortalApp::new(store, ApprovingGateway::new());
    let mut steps = Vec::new();

    let email = EmailAddress::new("asha.verma@example.com").context("demo email")?;
    let password = "quarry-ledger-7";
    info!(email = redact_value(email.as_str()), "demo user registration");

    app.get_started()?;
    app.select_category(UserCategory::Leasee)?;
    app.submit_registration(RegistrationForm {
        name: "Asha Verma".to_string(),
        email: email.clone(),
        phone: "9000000001".to_string(),
        organization: Some("Verma Minerals".to_string()),
        password: password.to_string(),
    })
    .context("registration")?;
    let info = CategoryInfo::lookup(UserCategory::Leasee);
    steps.push(DemoStep::passed(
        "user",
        "Register as Leasee",
        format!("registration fee Rs. {} collected", info.registration_fee),
    ));

    app.confirm_verification()?;
    app.submit_profile(ProfileData {
        address: "14 Mines Road, Ranchi".to_string(),
        bio: "Operates a small stone quarry lease.".to_string(),
        profile_picture: None,
        details: CategoryProfile::MiningOperation {
            state: "Jharkhand".to_string(),
            district: "Ranchi".to_string(),
            circle: "Namkum".to_string(),
            mauza: "Sidroul".to_string(),
            plot_no: "231/2".to_string(),
            area: "4.2 ha".to_string(),
            revenue_thana_number: "118".to_string(),
            thana_ps: "Namkum PS".to_string(),
            minerals: "Stone".to_string(),
            nature_of_land: "Raiyati".to_string(),
            mine_code_ibm: "IBM/JH/0231".to_string(),
            mine_code_dgms: "DGMS/JH/0045".to_string(),
        },
    })
    .context("profile completion")?;
    steps.push(DemoStep::passed(
        "user",
        "Complete mining operation profile",
        "profile accepted, dashboard reached".to_string(),
    ));

    // Library access is gated on the subscription; show the rejection first.
    match app.enter_library() {
        Err(AppError::SubscriptionRequired) => steps.push(DemoStep::passed(
            "user",
            "Open library without subscription",
            "rejected: subscription required".to_string(),
        )),
        Err(error) => return Err(error).context("library gate"),
        Ok(()) => steps.push(DemoStep::failed(
            "user",
            "Open library without subscription",
            "unexpectedly allowed".to_string(),
        )),
    }

    let user = app.subscribe().context("subscription")?;
    steps.push(DemoStep::passed(
        "user",
        "Subscribe to the library",
        format!(
            "Rs. {} paid, {} payment(s) on record",
            info.subscription_fee,
            user.payments.len()
        ),
    ));

    app.enter_library()?;
    let documents = app.documents(None)?;
    let first = documents
        .first()
        .context("seeded library is never empty")?
        .clone();
    let user = app.toggle_bookmark(&first.id)?;
    steps.push(DemoStep::passed(
        "user",
        format!("Bookmark \"{}\"", first.title),
        format!(
            "{} document(s) listed, {} bookmark(s)",
            documents.len(),
            user.bookmarked_doc_ids.len()
        ),
    ));

    app.back_to_dashboard()?;
    app.enter_consultancy()?;
    let case = app
        .submit_case(
            "Renewal of quarry lease under Section 8(3)",
            Some("lease-deed.pdf"),
        )
        .context("case submission")?;
    debug!(case_id = %case.id, "demo case filed");
    steps.push(DemoStep::passed(
        "user",
        "File consultancy case",
        format!("case {} pending, document uploaded", case.id),
    ));

    app.logout();
    app.go_to_login()?;
    app.login(ADMIN_EMAIL, ADMIN_PASSWORD)?;
    let solved = app
        .attach_solution(CaseSolution {
            case_id: case.id.clone(),
            solution: "Eligible for renewal; file Form J with the district office.".to_string(),
            fee: 750,
            solution_document_url: None,
            solution_document_name: None,
        })
        .context("solution")?;
    steps.push(DemoStep::passed(
        "admin",
        "Attach solution and quote fee",
        format!("case {} now {}, fee Rs. 750", solved.id, solved.status),
    ));

    app.logout();
    app.go_to_login()?;
    app.login(email.as_str(), password).context("re-login")?;
    app.enter_consultancy()?;
    let paid = app.pay_for_case(&case.id).context("case payment")?;
    let closed = paid.status == CaseStatus::Completed && paid.is_paid;
    steps.push(if closed {
        DemoStep::passed(
            "user",
            "Pay the consultancy fee",
            format!("case {} completed and paid", paid.id),
        )
    } else {
        DemoStep::failed(
            "user",
            "Pay the consultancy fee",
            format!("case {} left as {}", paid.id, paid.status),
        )
    });

    let has_errors = steps.iter().any(|step| !step.ok);
    Ok(DemoResult { steps, has_errors })
}

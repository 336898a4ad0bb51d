use proptest::prelude::*;

use mml_model::{EmailAddress, PaymentConfirmation, PaymentId, RegistrationForm, UserCategory};
use mml_store::{PortalStore, Session};

fn store_with_user() -> (PortalStore, Session) {
    let mut store = PortalStore::with_seed_documents();
    let session = store
        .register(
            RegistrationForm {
                name: "Asha Rao".to_string(),
                email: EmailAddress::new("asha@example.com").expect("valid email"),
                phone: "9000000001".to_string(),
                organization: None,
                password: "secret".to_string(),
            },
            UserCategory::Leasee,
            &PaymentConfirmation {
                payment_id: PaymentId::new("pay_reg_1").expect("valid id"),
            },
        )
        .expect("register");
    (store, session)
}

proptest! {
    // Toggling is a symmetric flip: replaying any toggle sequence a second
    // time leaves every document toggled an even number of times, which must
    // restore the original (empty) bookmark list.
    #[test]
    fn toggle_round_trip_restores_bookmarks(
        picks in proptest::collection::vec(0usize..7, 0..16),
    ) {
        let (mut store, session) = store_with_user();
        let doc_ids: Vec<_> = store
            .documents(None)
            .into_iter()
            .map(|d| d.id)
            .collect();

        for &pick in picks.iter().chain(picks.iter()) {
            store
                .toggle_bookmark(&session.token, &doc_ids[pick])
                .expect("toggle bookmark");
        }

        let user = store.current_user(&session.token).expect("current user");
        prop_assert!(user.bookmarked_doc_ids.is_empty());
    }

    // A single toggle bookmarks the document; membership is what flips.
    #[test]
    fn single_toggle_adds_exactly_one_bookmark(pick in 0usize..7) {
        let (mut store, session) = store_with_user();
        let doc_id = store.documents(None)[pick].id.clone();

        let user = store
            .toggle_bookmark(&session.token, &doc_id)
            .expect("toggle bookmark");
        prop_assert_eq!(user.bookmarked_doc_ids.len(), 1);
        prop_assert!(user.is_bookmarked(&doc_id));
    }
}

//! Library documents loaded at startup.

use chrono::NaiveDate;

use mml_model::{DocumentId, DocumentType, LibraryDocument};

fn document(
    id: &str,
    doc_type: DocumentType,
    title: &str,
    description: &str,
    date: (i32, u32, u32),
    content: &str,
) -> LibraryDocument {
    let (year, month, day) = date;
    LibraryDocument {
        id: DocumentId::new(id).unwrap_or_else(|_| unreachable!("seed ids are non-empty")),
        doc_type,
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| unreachable!("seed dates are valid")),
        content: content.to_string(),
    }
}

/// The initial library shipped with the portal: two bare acts, one
/// notification, one circular, one government order, two judgements.
pub fn seed_documents() -> Vec<LibraryDocument> {
    vec![
        document(
            "ba_01",
            DocumentType::BareAct,
            "The Mines and Minerals (Development and Regulation) Act, 1957",
            "An Act to provide for the development and regulation of mines and minerals \
             under the control of the Union.",
            (1957, 12, 28),
            "Long text content of the MMDR Act, 1957... Section 1, Section 2, etc. This \
             text is for viewing purposes only and cannot be downloaded or printed.",
        ),
        document(
            "ba_02",
            DocumentType::BareAct,
            "The Coal Mines (Nationalisation) Act, 1973",
            "An Act to provide for the acquisition and transfer of the right, title and \
             interest of the owners of coal mines.",
            (1973, 5, 30),
            "Detailed content of The Coal Mines (Nationalisation) Act, 1973... This text \
             is for viewing purposes only.",
        ),
        document(
            "notif_01",
            DocumentType::Notification,
            "Amendment to Mineral Concession Rules, 2021",
            "Notification regarding the revised royalty rates for certain minerals.",
            (2021, 6, 24),
            "G.S.R. 450(E). In exercise of the powers conferred by section 13 of the \
             Mines and Minerals (Development and Regulation) Act, 1957... Details of \
             the notification. Downloading is disabled.",
        ),
        document(
            "circ_01",
            DocumentType::Circular,
            "Clarification on e-auction procedures for mining leases",
            "Circular providing guidelines to standardize the e-auction process across \
             states.",
            (2022, 1, 15),
            "This circular aims to clarify ambiguities in the e-auction process as \
             outlined in previous notifications... Full text content here. Not \
             available for download.",
        ),
        document(
            "go_01",
            DocumentType::GovernmentOrder,
            "Order for establishment of District Mineral Foundation (DMF) in all districts",
            "Government order mandating the setup of DMFs as per the MMDR Amendment Act, \
             2015.",
            (2015, 9, 12),
            "By the order of the Ministry of Mines, it is hereby mandated that all state \
             governments shall establish a District Mineral Foundation (DMF) in every \
             district affected by mining-related operations... Full order details. Not \
             available for download.",
        ),
        document(
            "judge_01",
            DocumentType::Judgement,
            "Common Cause vs. Union of India & Ors.",
            "Supreme Court judgement on illegal mining and the interpretation of the \
             MMDR Act.",
            (2017, 8, 2),
            "In the Supreme Court of India, Civil Original Jurisdiction, Writ Petition \
             (Civil) No. 114 of 2014... The court held that... Detailed judgement text. \
             Downloading is disabled.",
        ),
        document(
            "judge_02",
            DocumentType::Judgement,
            "Goa Foundation vs. Union of India & Ors.",
            "Landmark Supreme Court judgement concerning the renewal of mining leases \
             in Goa.",
            (2014, 4, 21),
            "This case deals with the interpretation of Section 8(3) of the MMDR Act, \
             1957 regarding the second renewal of mining leases... Full text of the \
             judgement. Downloading and printing are disabled.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_all_five_buckets() {
        let documents = seed_documents();
        assert_eq!(documents.len(), 7);
        for doc_type in DocumentType::ALL {
            assert!(documents.iter().any(|d| d.doc_type == doc_type));
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let documents = seed_documents();
        for (i, left) in documents.iter().enumerate() {
            for right in &documents[i + 1..] {
                assert_ne!(left.id, right.id);
            }
        }
    }
}

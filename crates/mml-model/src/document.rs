//! Library documents and their classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::DocumentId;

/// The five legal-document buckets of the digital library. Every document
/// belongs to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    BareAct,
    Notification,
    Circular,
    GovernmentOrder,
    Judgement,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::BareAct,
        DocumentType::Notification,
        DocumentType::Circular,
        DocumentType::GovernmentOrder,
        DocumentType::Judgement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::BareAct => "BARE_ACT",
            DocumentType::Notification => "NOTIFICATION",
            DocumentType::Circular => "CIRCULAR",
            DocumentType::GovernmentOrder => "GOVERNMENT_ORDER",
            DocumentType::Judgement => "JUDGEMENT",
        }
    }

    /// Display label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::BareAct => "Bare Act",
            DocumentType::Notification => "Notification",
            DocumentType::Circular => "Circular",
            DocumentType::GovernmentOrder => "Government Order",
            DocumentType::Judgement => "Judgement",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ModelError;

    /// Parse a type token or label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "BARE_ACT" => Ok(DocumentType::BareAct),
            "NOTIFICATION" => Ok(DocumentType::Notification),
            "CIRCULAR" => Ok(DocumentType::Circular),
            "GOVERNMENT_ORDER" => Ok(DocumentType::GovernmentOrder),
            "JUDGEMENT" | "JUDGMENT" => Ok(DocumentType::Judgement),
            _ => Err(ModelError::InvalidDocumentType(s.to_string())),
        }
    }
}

/// A document in the digital library. Seeded at startup; created, edited,
/// and deleted only through admin actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDocument {
    pub id: DocumentId,
    pub doc_type: DocumentType,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Full text, shown in the viewer; downloads are not offered.
    pub content: String,
}

/// Admin input for a new document; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub doc_type: DocumentType,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub content: String,
}

impl NewDocument {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ModelError::MissingField("description"));
        }
        Ok(())
    }

    pub fn into_document(self, id: DocumentId) -> LibraryDocument {
        LibraryDocument {
            id,
            doc_type: self.doc_type,
            title: self.title,
            description: self.description,
            date: self.date,
            content: self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_from_str() {
        assert_eq!(
            "BARE_ACT".parse::<DocumentType>().unwrap(),
            DocumentType::BareAct
        );
        assert_eq!(
            "Government Order".parse::<DocumentType>().unwrap(),
            DocumentType::GovernmentOrder
        );
        // American spelling is accepted on input.
        assert_eq!(
            "judgment".parse::<DocumentType>().unwrap(),
            DocumentType::Judgement
        );
        assert!("MEMO".parse::<DocumentType>().is_err());
    }

    #[test]
    fn new_document_requires_title() {
        let doc = NewDocument {
            doc_type: DocumentType::Circular,
            title: " ".to_string(),
            description: "Guidance".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
            content: String::new(),
        };
        assert_eq!(doc.validate(), Err(ModelError::MissingField("title")));
    }
}

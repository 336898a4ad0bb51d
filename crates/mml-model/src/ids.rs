//! Validated identifier newtypes shared across the portal.

use std::fmt;

use crate::error::ModelError;

/// Identifier of a library document (`doc-<stamp>` for admin additions,
/// short slugs such as `ba_01` for seeded entries).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a consultancy case, formatted `CASE-<6 digits>`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a payment confirmation issued by the checkout gateway.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A lowercased, minimally validated email address.
///
/// Emails are the unique key of the user collection, so they are normalized
/// once here instead of ad hoc at every comparison site.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ModelError::InvalidEmail(value));
        };
        if local.is_empty() || domain.is_empty() {
            return Err(ModelError::InvalidEmail(value));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_blank_values() {
        assert!(DocumentId::new("  ").is_err());
        assert!(CaseId::new("").is_err());
        assert!(CaseId::new("CASE-123456").is_ok());
    }

    #[test]
    fn emails_are_normalized() {
        let email = EmailAddress::new("  Asha@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "asha@example.com");
    }

    #[test]
    fn emails_require_local_and_domain() {
        assert!(EmailAddress::new("no-at-sign").is_err());
        assert!(EmailAddress::new("@mail.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
    }
}

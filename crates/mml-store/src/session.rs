//! Opaque session tokens.
//!
//! A session is an opaque server-issued identifier mapped to the user's email
//! inside the store. Credentials never appear in the token.

use sha2::{Digest, Sha256};

use mml_model::{EmailAddress, UserRecord};

/// Opaque handle to an authenticated session.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SessionId(String);

impl SessionId {
    /// Derive a fresh token for `email`. `stamp` is a store-unique nonce, so
    /// two logins for the same account yield distinct tokens.
    pub(crate) fn issue(email: &EmailAddress, stamp: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(email.as_str().as_bytes());
        hasher.update(stamp.to_be_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A freshly authenticated session: the token plus a snapshot of the user at
/// login time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionId,
    pub user: UserRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_do_not_leak_credentials() {
        let email = EmailAddress::new("asha@example.com").unwrap();
        let token = SessionId::issue(&email, 7);
        assert!(!token.as_str().contains('@'));
        assert!(!token.as_str().contains("asha"));
        assert_eq!(token.as_str().len(), 64);
    }

    #[test]
    fn tokens_differ_per_issue() {
        let email = EmailAddress::new("asha@example.com").unwrap();
        assert_ne!(SessionId::issue(&email, 1), SessionId::issue(&email, 2));
    }
}

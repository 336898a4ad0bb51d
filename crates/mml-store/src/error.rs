use thiserror::Error;

use mml_model::{CaseId, DocumentId, EmailAddress, ModelError};

/// Failures surfaced by store operations. All are returned to the caller;
/// nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The operation needs a valid session and none was presented.
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("user not found: {0}")]
    UserNotFound(EmailAddress),
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),
    #[error("case not found: {0}")]
    CaseNotFound(CaseId),
    #[error("a user with email {0} already exists")]
    DuplicateEmail(EmailAddress),
    /// The case is completed and accepts no further mutation.
    #[error("case {0} is already completed")]
    CaseClosed(CaseId),
    #[error("invalid input: {0}")]
    Invalid(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

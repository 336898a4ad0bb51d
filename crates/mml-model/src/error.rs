use thiserror::Error;

/// Validation failures raised while constructing model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown user category: {0}")]
    InvalidCategory(String),
    #[error("unknown document type: {0}")]
    InvalidDocumentType(String),
    #[error("unknown case status: {0}")]
    InvalidCaseStatus(String),
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("profile details for {provided} do not fit category {category}")]
    ProfileCategoryMismatch {
        category: String,
        provided: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;

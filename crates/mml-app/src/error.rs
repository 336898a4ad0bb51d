use thiserror::Error;

use mml_model::CaseId;
use mml_store::StoreError;

use crate::payment::PaymentError;
use crate::step::AppStep;

/// Transition guard failures and propagated layer errors. Every guard
/// failure is a typed value returned to the caller; presentation decides how
/// to show it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("this action needs the {expected} step, but the app is on {actual}")]
    WrongStep { expected: AppStep, actual: AppStep },
    #[error("please subscribe to access the Digital Library")]
    SubscriptionRequired,
    #[error("admin console actions need an admin login")]
    NotAdmin,
    #[error("no category selected yet")]
    MissingDraft,
    #[error("no signed-in session")]
    NoSession,
    #[error("case {0} has no fee quoted yet")]
    NoFeeSet(CaseId),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, AppError>;

//! The checkout collaborator seam.
//!
//! Checkout is an opaque external dependency: the app hands it an amount,
//! currency, description, and prefilled contact details, and gets back either
//! a payment confirmation, a failure description, or a dismissal. Nothing in
//! the portal is marked paid outside an `Ok` from this trait.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use mml_model::{PaymentConfirmation, PaymentId};

/// Contact details prefilled into the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// One checkout invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Amount in whole rupees.
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub prefill: CheckoutPrefill,
}

impl CheckoutRequest {
    pub fn new(amount: u64, description: impl Into<String>, prefill: CheckoutPrefill) -> Self {
        Self {
            amount,
            currency: "INR".to_string(),
            description: description.into(),
            prefill,
        }
    }
}

/// Checkout outcomes other than success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The widget reported a failure with a human-readable description.
    #[error("payment failed: {0}")]
    Failed(String),
    /// The user closed the widget without completing checkout.
    #[error("payment dismissed")]
    Dismissed,
}

/// External checkout collaborator.
pub trait PaymentGateway {
    fn checkout(&self, request: &CheckoutRequest) -> Result<PaymentConfirmation, PaymentError>;
}

/// A gateway that approves every checkout and issues sequential confirmation
/// ids. Used by the demo; tests pair it with failing stubs.
#[derive(Debug, Default)]
pub struct ApprovingGateway {
    counter: AtomicU64,
}

impl ApprovingGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentGateway for ApprovingGateway {
    fn checkout(&self, request: &CheckoutRequest) -> Result<PaymentConfirmation, PaymentError> {
        let serial = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let payment_id = PaymentId::new(format!("pay_{serial:06}"))
            .map_err(|e| PaymentError::Failed(e.to_string()))?;
        tracing::debug!(amount = request.amount, id = %payment_id, "checkout approved");
        Ok(PaymentConfirmation { payment_id })
    }
}

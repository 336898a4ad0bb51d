//! Payment ledger entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PaymentId;

/// Proof of a successful checkout, handed back by the payment collaborator.
///
/// Records are only ever marked paid against one of these; there is no other
/// path to a paid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub payment_id: PaymentId,
}

/// One entry in a user's append-only payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub date: DateTime<Utc>,
    /// Human-readable purpose, e.g. "Registration Fee for Leasee".
    pub description: String,
    /// Amount in whole rupees.
    pub amount: u64,
    /// Gateway reference for the confirmation, kept alongside the id so a
    /// reconciliation export needs no join.
    pub reference: String,
}

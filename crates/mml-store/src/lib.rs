//! In-memory data-access layer for the portal.
//!
//! The store simulates a backend: collections live in process memory, ids are
//! time-derived, and latency is an opt-in pause. See `PortalStore` for the
//! operation surface and `StoreError` for the failure taxonomy.

pub mod error;
pub mod latency;
pub mod seed;
pub mod session;
pub mod store;

mod stamp;

pub use error::{Result, StoreError};
pub use latency::{LatencyProfile, OpWeight};
pub use seed::seed_documents;
pub use session::{Session, SessionId};
pub use store::{CaseScope, PortalStore, payment_confirmation};

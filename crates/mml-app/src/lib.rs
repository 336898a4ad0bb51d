//! Application state machine for the portal.
//!
//! Wires the registration wizard, the signed-in feature areas, and the admin
//! console over an owned `PortalStore`, with checkout delegated to the
//! `PaymentGateway` seam.

pub mod controller;
pub mod error;
pub mod payment;
pub mod step;

pub use controller::{ADMIN_EMAIL, ADMIN_PASSWORD, PortalApp};
pub use error::{AppError, Result};
pub use payment::{
    ApprovingGateway, CheckoutPrefill, CheckoutRequest, PaymentError, PaymentGateway,
};
pub use step::AppStep;

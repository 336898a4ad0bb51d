//! Domain model for the portal.
//!
//! Plain data types shared by the store, the application layer, and the CLI:
//! identifiers, the category catalog, documents, cases, users, and payments.

pub mod case;
pub mod category;
pub mod document;
pub mod error;
pub mod ids;
pub mod payment;
pub mod profile;
pub mod user;

pub use case::{CaseSolution, CaseStatus, ConsultancyCase, NewCase};
pub use category::{CategoryInfo, Tier, UserCategory, category_catalog};
pub use document::{DocumentType, LibraryDocument, NewDocument};
pub use error::{ModelError, Result};
pub use ids::{CaseId, DocumentId, EmailAddress, PaymentId};
pub use payment::{PaymentConfirmation, PaymentRecord};
pub use profile::{CategoryProfile, ProfileData};
pub use user::{ProfileUpdate, RegistrationForm, UserRecord};

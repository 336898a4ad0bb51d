//! The top-level application steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the portal currently is. Registration runs as a linear wizard
/// (Landing through Profile); Dashboard, Library, and Consultancy are the
/// signed-in feature areas; Admin is its own console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppStep {
    Introduction,
    Landing,
    Login,
    Registration,
    Verification,
    Profile,
    Dashboard,
    Library,
    Consultancy,
    Admin,
}

impl AppStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStep::Introduction => "introduction",
            AppStep::Landing => "landing",
            AppStep::Login => "login",
            AppStep::Registration => "registration",
            AppStep::Verification => "verification",
            AppStep::Profile => "profile",
            AppStep::Dashboard => "dashboard",
            AppStep::Library => "library",
            AppStep::Consultancy => "consultancy",
            AppStep::Admin => "admin",
        }
    }
}

impl fmt::Display for AppStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Consultancy cases and their strictly forward-moving lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::{CaseId, EmailAddress};

/// Lifecycle of a consultancy case. Transitions only advance:
/// Pending -> SolutionReady -> Completed. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    SolutionReady,
    Completed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::SolutionReady => "SOLUTION_READY",
            CaseStatus::Completed => "COMPLETED",
        }
    }

    /// Position in the lifecycle, used for the monotonicity check.
    fn rank(&self) -> u8 {
        match self {
            CaseStatus::Pending => 0,
            CaseStatus::SolutionReady => 1,
            CaseStatus::Completed => 2,
        }
    }

    /// Completed cases accept no further mutation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseStatus::Completed)
    }

    /// Whether moving to `next` keeps the lifecycle forward-moving.
    pub fn can_advance_to(&self, next: CaseStatus) -> bool {
        next.rank() >= self.rank() && !self.is_terminal()
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(' ', "_").as_str() {
            "PENDING" => Ok(CaseStatus::Pending),
            "SOLUTION_READY" => Ok(CaseStatus::SolutionReady),
            "COMPLETED" => Ok(CaseStatus::Completed),
            _ => Err(ModelError::InvalidCaseStatus(s.to_string())),
        }
    }
}

/// A consultancy request submitted by a user and resolved by an
/// admin-provided solution and fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultancyCase {
    pub id: CaseId,
    pub date: DateTime<Utc>,
    pub issue: String,
    /// Upload reference of the supporting document, when one was attached.
    pub document_url: Option<String>,
    /// Display name of the supporting document; "N/A" when none was attached.
    pub document_name: String,
    pub status: CaseStatus,
    pub solution: Option<String>,
    pub solution_document_url: Option<String>,
    pub solution_document_name: Option<String>,
    /// Fee quoted by the admin alongside the solution.
    pub fee: Option<u64>,
    pub is_paid: bool,
    pub user_name: String,
    pub user_email: EmailAddress,
}

/// User input for a new case; the store assigns id, date, and ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    pub issue: String,
    pub document_url: Option<String>,
    pub document_name: Option<String>,
}

impl NewCase {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.issue.trim().is_empty() {
            return Err(ModelError::MissingField("issue"));
        }
        Ok(())
    }
}

/// Admin input attaching a solution and fee to a pending case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSolution {
    pub case_id: CaseId,
    pub solution: String,
    pub fee: u64,
    pub solution_document_url: Option<String>,
    pub solution_document_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_advances() {
        assert!(CaseStatus::Pending.can_advance_to(CaseStatus::SolutionReady));
        assert!(CaseStatus::Pending.can_advance_to(CaseStatus::Completed));
        assert!(CaseStatus::SolutionReady.can_advance_to(CaseStatus::Completed));
        assert!(!CaseStatus::SolutionReady.can_advance_to(CaseStatus::Pending));
        assert!(!CaseStatus::Completed.can_advance_to(CaseStatus::Completed));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(CaseStatus::Completed.is_terminal());
        assert!(!CaseStatus::Pending.is_terminal());
        assert!(!CaseStatus::SolutionReady.is_terminal());
    }

    #[test]
    fn status_from_str() {
        assert_eq!(
            "SOLUTION_READY".parse::<CaseStatus>().unwrap(),
            CaseStatus::SolutionReady
        );
        assert_eq!("pending".parse::<CaseStatus>().unwrap(), CaseStatus::Pending);
        assert!("ARCHIVED".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn new_case_requires_issue() {
        let case = NewCase {
            issue: "".to_string(),
            document_url: None,
            document_name: None,
        };
        assert_eq!(case.validate(), Err(ModelError::MissingField("issue")));
    }
}

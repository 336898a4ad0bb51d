//! User categories and the fee catalog.
//!
//! Every registering user picks one of seven categories. The category fixes
//! the access tier (premium vs academic) and both fee amounts, and it decides
//! which profile detail variant the user must supply later.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The seven user roles offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserCategory {
    MiningDealer,
    Leasee,
    GovernmentOfficial,
    Firm,
    Company,
    Student,
    Researcher,
}

impl UserCategory {
    /// All categories in catalog order.
    pub const ALL: [UserCategory; 7] = [
        UserCategory::MiningDealer,
        UserCategory::Leasee,
        UserCategory::GovernmentOfficial,
        UserCategory::Firm,
        UserCategory::Company,
        UserCategory::Student,
        UserCategory::Researcher,
    ];

    /// Canonical token as stored in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserCategory::MiningDealer => "MINING_DEALER",
            UserCategory::Leasee => "LEASEE",
            UserCategory::GovernmentOfficial => "GOVERNMENT_OFFICIAL",
            UserCategory::Firm => "FIRM",
            UserCategory::Company => "COMPANY",
            UserCategory::Student => "STUDENT",
            UserCategory::Researcher => "RESEARCHER",
        }
    }

    /// Access tier derived from the category.
    pub fn tier(&self) -> Tier {
        match self {
            UserCategory::Student | UserCategory::Researcher => Tier::Academic,
            _ => Tier::Premium,
        }
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserCategory {
    type Err = ModelError;

    /// Parse a category token or display label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        match normalized.as_str() {
            "MINING_DEALER" => Ok(UserCategory::MiningDealer),
            "LEASEE" => Ok(UserCategory::Leasee),
            "GOVERNMENT_OFFICIAL" => Ok(UserCategory::GovernmentOfficial),
            "FIRM" => Ok(UserCategory::Firm),
            "COMPANY" => Ok(UserCategory::Company),
            "STUDENT" => Ok(UserCategory::Student),
            "RESEARCHER" => Ok(UserCategory::Researcher),
            _ => Err(ModelError::InvalidCategory(s.to_string())),
        }
    }
}

/// Access tier: premium users get the full portal including consultancy,
/// academic users are library-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Premium,
    Academic,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Premium => "PREMIUM",
            Tier::Academic => "ACADEMIC",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalog row for one category: display label, tier, and both fees in
/// whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: UserCategory,
    pub label: &'static str,
    pub tier: Tier,
    /// One-time registration fee.
    pub registration_fee: u64,
    /// Annual library subscription fee.
    pub subscription_fee: u64,
}

const CATALOG: [CategoryInfo; 7] = [
    CategoryInfo {
        category: UserCategory::MiningDealer,
        label: "Mining Dealer",
        tier: Tier::Premium,
        registration_fee: 3000,
        subscription_fee: 12000,
    },
    CategoryInfo {
        category: UserCategory::Leasee,
        label: "Leasee",
        tier: Tier::Premium,
        registration_fee: 3000,
        subscription_fee: 12000,
    },
    CategoryInfo {
        category: UserCategory::GovernmentOfficial,
        label: "Government Official",
        tier: Tier::Premium,
        registration_fee: 3000,
        subscription_fee: 12000,
    },
    CategoryInfo {
        category: UserCategory::Firm,
        label: "Firm",
        tier: Tier::Premium,
        registration_fee: 5000,
        subscription_fee: 25000,
    },
    CategoryInfo {
        category: UserCategory::Company,
        label: "Company",
        tier: Tier::Premium,
        registration_fee: 5000,
        subscription_fee: 25000,
    },
    CategoryInfo {
        category: UserCategory::Student,
        label: "Student",
        tier: Tier::Academic,
        registration_fee: 1000,
        subscription_fee: 6000,
    },
    CategoryInfo {
        category: UserCategory::Researcher,
        label: "Researcher",
        tier: Tier::Academic,
        registration_fee: 1000,
        subscription_fee: 6000,
    },
];

/// The static category catalog, loaded once at startup and immutable.
pub fn category_catalog() -> &'static [CategoryInfo] {
    &CATALOG
}

impl CategoryInfo {
    /// Look up the catalog row for a category. Total over all variants.
    pub fn lookup(category: UserCategory) -> &'static CategoryInfo {
        CATALOG
            .iter()
            .find(|info| info.category == category)
            .unwrap_or_else(|| unreachable!("catalog covers every category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_category() {
        for category in UserCategory::ALL {
            let info = CategoryInfo::lookup(category);
            assert_eq!(info.category, category);
            assert_eq!(info.tier, category.tier());
        }
    }

    #[test]
    fn category_from_str_accepts_token_and_label() {
        assert_eq!(
            "MINING_DEALER".parse::<UserCategory>().unwrap(),
            UserCategory::MiningDealer
        );
        assert_eq!(
            "Government Official".parse::<UserCategory>().unwrap(),
            UserCategory::GovernmentOfficial
        );
        assert_eq!(
            "researcher".parse::<UserCategory>().unwrap(),
            UserCategory::Researcher
        );
        assert!("WIZARD".parse::<UserCategory>().is_err());
    }

    #[test]
    fn academic_tier_is_student_and_researcher_only() {
        assert_eq!(UserCategory::Student.tier(), Tier::Academic);
        assert_eq!(UserCategory::Researcher.tier(), Tier::Academic);
        assert_eq!(UserCategory::Leasee.tier(), Tier::Premium);
        assert_eq!(UserCategory::Company.tier(), Tier::Premium);
    }

    #[test]
    fn fee_schedule_matches_tier_bands() {
        assert_eq!(CategoryInfo::lookup(UserCategory::Leasee).registration_fee, 3000);
        assert_eq!(CategoryInfo::lookup(UserCategory::Firm).subscription_fee, 25000);
        assert_eq!(CategoryInfo::lookup(UserCategory::Student).registration_fee, 1000);
        assert_eq!(
            CategoryInfo::lookup(UserCategory::Researcher).subscription_fee,
            6000
        );
    }
}

//! Profile details collected after email verification.
//!
//! Each category group fills a different detail form, so the details are a
//! tagged union keyed by category group rather than one record of optional
//! fields. `CategoryProfile::matches` enforces the pairing when a profile is
//! attached to a user.

use serde::{Deserialize, Serialize};

use crate::category::UserCategory;
use crate::error::ModelError;

/// Category-specific profile details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryProfile {
    /// Leasee, Firm, Company: particulars of the mining operation.
    MiningOperation {
        state: String,
        district: String,
        circle: String,
        mauza: String,
        plot_no: String,
        area: String,
        revenue_thana_number: String,
        thana_ps: String,
        minerals: String,
        nature_of_land: String,
        mine_code_ibm: String,
        mine_code_dgms: String,
    },
    /// Mining Dealer: licence and trade particulars.
    Dealer {
        licence_no: String,
        minerals: String,
        dealer_code_ibm: String,
        nature_of_business: String,
    },
    /// Government Official: posting particulars.
    Official {
        department: String,
        designation: String,
    },
    /// Student, Researcher: institution particulars.
    Academic {
        college_name: String,
        university_name: String,
    },
}

impl CategoryProfile {
    /// Short name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            CategoryProfile::MiningOperation { .. } => "mining operation",
            CategoryProfile::Dealer { .. } => "dealer",
            CategoryProfile::Official { .. } => "official",
            CategoryProfile::Academic { .. } => "academic",
        }
    }

    /// Whether this detail variant is the one required by `category`.
    pub fn matches(&self, category: UserCategory) -> bool {
        matches!(
            (self, category),
            (
                CategoryProfile::MiningOperation { .. },
                UserCategory::Leasee | UserCategory::Firm | UserCategory::Company,
            ) | (CategoryProfile::Dealer { .. }, UserCategory::MiningDealer)
                | (
                    CategoryProfile::Official { .. },
                    UserCategory::GovernmentOfficial,
                )
                | (
                    CategoryProfile::Academic { .. },
                    UserCategory::Student | UserCategory::Researcher,
                )
        )
    }

    /// Reject blank required fields within the variant.
    pub fn validate(&self) -> Result<(), ModelError> {
        let fields: Vec<(&'static str, &str)> = match self {
            CategoryProfile::MiningOperation {
                state,
                district,
                circle,
                mauza,
                plot_no,
                area,
                revenue_thana_number,
                thana_ps,
                minerals,
                nature_of_land,
                mine_code_ibm,
                mine_code_dgms,
            } => vec![
                ("state", state.as_str()),
                ("district", district.as_str()),
                ("circle", circle.as_str()),
                ("mauza", mauza.as_str()),
                ("plot_no", plot_no.as_str()),
                ("area", area.as_str()),
                ("revenue_thana_number", revenue_thana_number.as_str()),
                ("thana_ps", thana_ps.as_str()),
                ("minerals", minerals.as_str()),
                ("nature_of_land", nature_of_land.as_str()),
                ("mine_code_ibm", mine_code_ibm.as_str()),
                ("mine_code_dgms", mine_code_dgms.as_str()),
            ],
            CategoryProfile::Dealer {
                licence_no,
                minerals,
                dealer_code_ibm,
                nature_of_business,
            } => vec![
                ("licence_no", licence_no.as_str()),
                ("minerals", minerals.as_str()),
                ("dealer_code_ibm", dealer_code_ibm.as_str()),
                ("nature_of_business", nature_of_business.as_str()),
            ],
            CategoryProfile::Official {
                department,
                designation,
            } => vec![
                ("department", department.as_str()),
                ("designation", designation.as_str()),
            ],
            CategoryProfile::Academic {
                college_name,
                university_name,
            } => vec![
                ("college_name", college_name.as_str()),
                ("university_name", university_name.as_str()),
            ],
        };
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ModelError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// The complete profile submitted at the end of the registration wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub address: String,
    pub bio: String,
    /// Upload reference returned by the file store, when a picture was
    /// provided.
    pub profile_picture: Option<String>,
    pub details: CategoryProfile,
}

impl ProfileData {
    /// Validate the profile against the owning user's category.
    pub fn validate_for(&self, category: UserCategory) -> Result<(), ModelError> {
        if self.address.trim().is_empty() {
            return Err(ModelError::MissingField("address"));
        }
        if self.bio.trim().is_empty() {
            return Err(ModelError::MissingField("bio"));
        }
        if !self.details.matches(category) {
            return Err(ModelError::ProfileCategoryMismatch {
                category: category.to_string(),
                provided: self.details.kind().to_string(),
            });
        }
        self.details.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn academic_details() -> CategoryProfile {
        CategoryProfile::Academic {
            college_name: "National Law School".to_string(),
            university_name: "NLSIU".to_string(),
        }
    }

    #[test]
    fn academic_details_match_student_and_researcher() {
        let details = academic_details();
        assert!(details.matches(UserCategory::Student));
        assert!(details.matches(UserCategory::Researcher));
        assert!(!details.matches(UserCategory::Leasee));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let details = CategoryProfile::Official {
            department: "Mines".to_string(),
            designation: "  ".to_string(),
        };
        assert_eq!(
            details.validate(),
            Err(ModelError::MissingField("designation"))
        );
    }

    #[test]
    fn profile_rejects_wrong_variant_for_category() {
        let profile = ProfileData {
            address: "12 Court Road".to_string(),
            bio: "Final-year student".to_string(),
            profile_picture: None,
            details: academic_details(),
        };
        assert!(profile.validate_for(UserCategory::Student).is_ok());
        let err = profile.validate_for(UserCategory::Firm).unwrap_err();
        assert!(matches!(err, ModelError::ProfileCategoryMismatch { .. }));
    }

    #[test]
    fn profile_serializes_with_kind_tag() {
        let profile = academic_details();
        let json = serde_json::to_string(&profile).expect("serialize profile");
        assert!(json.contains("\"kind\":\"academic\""));
    }
}

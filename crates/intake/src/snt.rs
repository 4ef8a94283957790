//! Special-needs-trust intake data, present only when the trust-type tag is
//! one of the SNT variants.

use crate::person::join_name_parts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SntData {
    pub beneficiary: SntBeneficiary,
    pub government_benefits: GovernmentBenefits,
    pub remainder_beneficiaries: Vec<RemainderBeneficiary>,
}

/// The disabled primary beneficiary the trust exists to protect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SntBeneficiary {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub disability_description: String,
}

impl SntBeneficiary {
    pub fn full_name(&self) -> String {
        join_name_parts(&[&self.first_name, &self.middle_name, &self.last_name])
    }
}

/// Means-tested benefits the beneficiary currently receives. Eligibility for
/// these is what the trust's spendthrift terms preserve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GovernmentBenefits {
    pub ssi: bool,
    pub ssdi: bool,
    pub medi_cal: bool,
    pub medicare: bool,
    pub housing_assistance: bool,
    pub other: String,
}

impl GovernmentBenefits {
    pub fn any(&self) -> bool {
        self.ssi
            || self.ssdi
            || self.medi_cal
            || self.medicare
            || self.housing_assistance
            || !self.other.trim().is_empty()
    }

    /// Display names of the flagged benefits, in declaration order, with the
    /// free-text "other" entry last.
    pub fn active_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if self.ssi {
            names.push("Supplemental Security Income (SSI)".to_string());
        }
        if self.ssdi {
            names.push("Social Security Disability Insurance (SSDI)".to_string());
        }
        if self.medi_cal {
            names.push("Medi-Cal".to_string());
        }
        if self.medicare {
            names.push("Medicare".to_string());
        }
        if self.housing_assistance {
            names.push("Housing Assistance".to_string());
        }
        let other = self.other.trim();
        if !other.is_empty() {
            names.push(other.to_string());
        }
        names
    }
}

/// A party receiving a percentage share of whatever remains at the primary
/// beneficiary's death.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemainderBeneficiary {
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub percentage: String,
}

impl RemainderBeneficiary {
    pub fn full_name(&self) -> String {
        join_name_parts(&[&self.first_name, &self.last_name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_names_includes_only_flagged_benefits() {
        let b = GovernmentBenefits {
            ssi: true,
            medi_cal: true,
            housing_assistance: true,
            other: "Regional Center Services".into(),
            ..GovernmentBenefits::default()
        };
        assert_eq!(
            b.active_names(),
            vec![
                "Supplemental Security Income (SSI)",
                "Medi-Cal",
                "Housing Assistance",
                "Regional Center Services",
            ]
        );
        assert!(b.any());
    }

    #[test]
    fn no_benefits() {
        let b = GovernmentBenefits::default();
        assert!(!b.any());
        assert!(b.active_names().is_empty());
    }
}

//! Distribution-side intake records: residuary beneficiaries, specific
//! distributions, and the trustee serve-type policy.

use serde::{Deserialize, Serialize};

/// How multiple successor trustees act: one after another, or concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeType {
    #[default]
    Sequential,
    Together,
}

/// How a residuary share is released to its beneficiary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    /// Distributed outright, free of trust. The default when the intake
    /// carries no tag.
    #[default]
    Outright,
    /// Held in trust and released in age-keyed installments.
    AgeBased,
    /// Held in a general-needs trust for the beneficiary's lifetime.
    GeneralNeeds,
}

/// One installment of an age-based distribution schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgeRule {
    pub age: u32,
    pub percentage: f64,
    pub description: String,
}

/// A party entitled to a share of the estate remainder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResiduaryBeneficiary {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub date_of_birth: String,
    pub sex: String,
    pub share: f64,
    pub distribution_type: Option<DistributionType>,
    pub age_rules: Vec<AgeRule>,
}

impl ResiduaryBeneficiary {
    pub fn full_name(&self) -> String {
        if !self.name.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            crate::person::join_name_parts(&[&self.first_name, &self.last_name])
        }
    }

    /// The distribution type with the outright default applied.
    pub fn distribution(&self) -> DistributionType {
        self.distribution_type.unwrap_or_default()
    }
}

/// A specific bequest made before the residuary distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecificDistribution {
    pub beneficiary_name: String,
    pub description: String,
    /// When set, the bequest is held until the beneficiary reaches this age.
    pub age_condition: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_type_defaults_to_outright() {
        let b = ResiduaryBeneficiary::default();
        assert_eq!(b.distribution(), DistributionType::Outright);

        let b = ResiduaryBeneficiary {
            distribution_type: Some(DistributionType::AgeBased),
            ..ResiduaryBeneficiary::default()
        };
        assert_eq!(b.distribution(), DistributionType::AgeBased);
    }

    #[test]
    fn serve_type_tags() {
        let s: ServeType = serde_json::from_str("\"together\"").unwrap();
        assert_eq!(s, ServeType::Together);
        assert_eq!(ServeType::default(), ServeType::Sequential);
    }

    #[test]
    fn distribution_type_tags() {
        let d: DistributionType = serde_json::from_str("\"general_needs\"").unwrap();
        assert_eq!(d, DistributionType::GeneralNeeds);
        let d: DistributionType = serde_json::from_str("\"age_based\"").unwrap();
        assert_eq!(d, DistributionType::AgeBased);
    }
}

//! Residuary beneficiary and specific distribution projection.
//!
//! Each beneficiary projects as a `{ "beneficiary": { ... } }` wrapper so the
//! template loop body can address fields as `{beneficiary.fullName}` without
//! colliding with same-named keys at the top level. Specific distributions
//! use the same pattern under a `distribution` key.

use crate::narrative::{Pronouns, share_display};
use codicil_intake::{DistributionType, ResiduaryBeneficiary, SpecificDistribution};
use itertools::Itertools;
use serde_json::{Value, json};

/// Two-digit section number from a zero-based array position.
fn section_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Projects the residuary beneficiary list. Section numbers follow array
/// order; `isNotLast` lets the template suppress a trailing separator.
pub fn project_beneficiaries(beneficiaries: &[ResiduaryBeneficiary]) -> Value {
    let records: Vec<Value> = beneficiaries
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let pronouns = Pronouns::for_sex(&b.sex);
            let distribution = b.distribution();
            json!({
                "beneficiary": {
                    "sectionNumber": section_number(i),
                    "fullName": b.full_name(),
                    "firstName": b.first_name,
                    "lastName": b.last_name,
                    "relationship": relationship_or_default(&b.relationship),
                    "dateOfBirth": b.date_of_birth,
                    "percentage": share_display(b.share),
                    "isNotLast": i < beneficiaries.len() - 1,
                    "pronounPossessive": pronouns.possessive,
                    "pronounObjective": pronouns.object,
                    "pronounReflexive": pronouns.reflexive,
                    "distributeOutright": distribution == DistributionType::Outright,
                    "hasAgeDistribution": distribution == DistributionType::AgeBased,
                    "hasGeneralNeedsTrust": distribution == DistributionType::GeneralNeeds,
                    "ageRules": project_age_rules(b),
                }
            })
        })
        .collect();
    Value::Array(records)
}

fn relationship_or_default(relationship: &str) -> String {
    let r = relationship.trim();
    if r.is_empty() {
        "beneficiary".to_string()
    } else {
        r.to_string()
    }
}

/// Age-based installment rules, numbered independently of the parent
/// beneficiary's section number. Empty unless the distribution type is
/// age-based.
fn project_age_rules(beneficiary: &ResiduaryBeneficiary) -> Value {
    if beneficiary.distribution() != DistributionType::AgeBased {
        return Value::Array(Vec::new());
    }
    let rules: Vec<Value> = beneficiary
        .age_rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            json!({
                "sectionNumber": section_number(i),
                "age": rule.age,
                "percentage": share_display(rule.percentage),
                "description": rule.description,
            })
        })
        .collect();
    Value::Array(rules)
}

/// One-line percentage summary: "Jane Smith: 50%, Bob Smith: 50%".
pub fn distribution_summary(beneficiaries: &[ResiduaryBeneficiary]) -> String {
    beneficiaries
        .iter()
        .map(|b| format!("{}: {}%", b.full_name(), share_display(b.share)))
        .join(", ")
}

/// Projects specific bequests with their own section numbering.
pub fn project_specific_distributions(distributions: &[SpecificDistribution]) -> Value {
    let records: Vec<Value> = distributions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            json!({
                "distribution": {
                    "sectionNumber": section_number(i),
                    "beneficiaryName": d.beneficiary_name,
                    "propertyDescription": d.description,
                    "property": d.description,
                    "hasAgeCondition": d.age_condition.is_some(),
                    "conditionAge": d.age_condition.map(|a| a.to_string()).unwrap_or_default(),
                }
            })
        })
        .collect();
    Value::Array(records)
}

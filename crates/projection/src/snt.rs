//! Special-needs-trust key family.
//!
//! Always projected so templates can bind the keys unconditionally; the
//! values are empty/false unless the intake carries SNT data and an SNT
//! trust-type tag.

use codicil_intake::{IntakeRecord, SntData, TrustType};
use itertools::Itertools;
use serde_json::{Map, Value, json};

/// Inserts the SNT keys into the projected data object.
pub fn project_snt(data: &mut Map<String, Value>, record: &IntakeRecord) {
    let is_snt = record.trust_type.is_some_and(TrustType::is_snt);
    data.insert("isSNT".to_string(), json!(is_snt));
    data.insert(
        "isFirstPartySNT".to_string(),
        json!(record.trust_type == Some(TrustType::FirstPartySnt)),
    );
    data.insert(
        "isThirdPartySNT".to_string(),
        json!(record.trust_type == Some(TrustType::ThirdPartySnt)),
    );

    let empty;
    let snt = match (&record.snt_data, is_snt) {
        (Some(snt), true) => snt,
        _ => {
            empty = SntData::default();
            &empty
        }
    };

    data.insert(
        "sntBeneficiary".to_string(),
        json!({
            "fullName": snt.beneficiary.full_name(),
            "firstName": snt.beneficiary.first_name,
            "middleName": snt.beneficiary.middle_name,
            "lastName": snt.beneficiary.last_name,
            "dateOfBirth": snt.beneficiary.date_of_birth,
            "ssn": snt.beneficiary.ssn,
            "disabilityDescription": snt.beneficiary.disability_description,
        }),
    );

    let benefits = &snt.government_benefits;
    let names = benefits.active_names();
    data.insert(
        "sntGovernmentBenefits".to_string(),
        json!({
            "ssi": benefits.ssi,
            "ssdi": benefits.ssdi,
            "mediCal": benefits.medi_cal,
            "medicare": benefits.medicare,
            "housingAssistance": benefits.housing_assistance,
            "other": benefits.other.trim(),
            "hasBenefits": benefits.any(),
            "formatted": names.join(", "),
            "list": names,
        }),
    );

    let remainder: Vec<Value> = snt
        .remainder_beneficiaries
        .iter()
        .map(|rb| {
            json!({
                "fullName": rb.full_name(),
                "relationship": rb.relationship,
                "percentage": percentage_display(&rb.percentage),
            })
        })
        .collect();
    let formatted = snt
        .remainder_beneficiaries
        .iter()
        .map(|rb| format!("{} ({})", rb.full_name(), percentage_display(&rb.percentage)))
        .join(", ");
    data.insert("sntRemainderBeneficiaries".to_string(), Value::Array(remainder));
    data.insert("sntRemainderBeneficiariesFormatted".to_string(), json!(formatted));
}

/// Percentages display with a trailing "%" whether or not the intake
/// included one.
fn percentage_display(percentage: &str) -> String {
    let p = percentage.trim();
    if p.is_empty() || p.ends_with('%') {
        p.to_string()
    } else {
        format!("{p}%")
    }
}

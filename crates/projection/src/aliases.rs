//! Legacy placeholder aliases.
//!
//! Template variants accumulated over years of drafting, and different
//! vintages bind different names for the same value (`client.fullName`,
//! `clientFullName`, `grantorFullName`). The canonical schema is built
//! first; this adapter then fans every value out to its historical names.
//! The rendering engine ignores keys a template does not use, so
//! over-populating is free.

use crate::beneficiaries::distribution_summary;
use crate::narrative::{children_references, party_references};
use codicil_intake::IntakeRecord;
use serde_json::{Map, Value, json};

fn nested_str(data: &Map<String, Value>, object: &str, key: &str) -> Value {
    data.get(object)
        .and_then(|o| o.get(key))
        .cloned()
        .unwrap_or_else(|| json!(""))
}

/// Adds every legacy flat alias to an already-built canonical data object.
pub fn apply_legacy_aliases(data: &mut Map<String, Value>, record: &IntakeRecord) {
    // Client / grantor names
    let client_full = nested_str(data, "client", "fullName");
    data.insert("grantorFullName".to_string(), client_full.clone());
    data.insert("clientFullName".to_string(), client_full);
    data.insert("clientFirstName".to_string(), nested_str(data, "client", "firstName"));
    data.insert("clientMiddleName".to_string(), nested_str(data, "client", "middleName"));
    data.insert("clientLastName".to_string(), nested_str(data, "client", "lastName"));
    data.insert("clientAddress".to_string(), nested_str(data, "client", "fullAddress"));

    data.insert("spouseFullName".to_string(), nested_str(data, "spouse", "fullName"));
    data.insert("spouseFirstName".to_string(), nested_str(data, "spouse", "firstName"));
    data.insert("spouseMiddleName".to_string(), nested_str(data, "spouse", "middleName"));
    data.insert("spouseLastName".to_string(), nested_str(data, "spouse", "lastName"));
    data.insert("spouseAddress".to_string(), nested_str(data, "spouse", "fullAddress"));

    // The flat legacy key holds the sentence, not the raw status word.
    data.insert(
        "maritalStatus".to_string(),
        nested_str(data, "client", "maritalStatusStatement"),
    );

    // Trust header
    data.insert("trustDate".to_string(), data.get("currentDate").cloned().unwrap_or_else(|| json!("")));

    // Children blocks
    data.insert(
        "childrenTable".to_string(),
        data.get("childrenList").cloned().unwrap_or_else(|| json!("")),
    );
    data.insert(
        "childrenReferences".to_string(),
        json!(children_references(&record.children)),
    );
    // Older drafts address the first child as "exampleChild".
    data.insert(
        "exampleChild".to_string(),
        data.get("firstChild").cloned().unwrap_or_else(|| json!({})),
    );

    // Trustee narratives under their per-article names
    let narrative = data.get("trusteesNarrative").cloned().unwrap_or_else(|| json!(""));
    data.insert("successorTrusteesList".to_string(), narrative.clone());
    data.insert(
        "successorTrusteesDuringIncapacityFormatted".to_string(),
        narrative.clone(),
    );
    data.insert("successorTrusteesAfterDeathFormatted".to_string(), narrative);
    let trustee_names = json!(party_references(&record.successor_trustees));
    data.insert(
        "successorTrusteesDuringIncapacity".to_string(),
        trustee_names.clone(),
    );
    data.insert("successorTrusteesAfterDeath".to_string(), trustee_names);

    // Negated flags for templates without a not-expression evaluator
    let restatement = data.get("isRestatement").and_then(Value::as_bool).unwrap_or(false);
    data.insert("notIsRestatement".to_string(), json!(!restatement));
    let has_specific = data
        .get("hasSpecificDistributions")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    data.insert("notHasSpecificDistributions".to_string(), json!(!has_specific));

    data.insert(
        "beneficiaryDistribution".to_string(),
        json!(distribution_summary(&record.residuary_beneficiaries)),
    );

    // Schedule A boilerplate; intakes do not itemize assets.
    data.insert(
        "assets".to_string(),
        json!("All property transferred to this trust"),
    );

    // Anatomical gift flat keys
    data.insert(
        "clientAnatomicalGift".to_string(),
        nested_str(data, "anatomicalGifts", "client"),
    );
    data.insert(
        "spouseAnatomicalGift".to_string(),
        nested_str(data, "anatomicalGifts", "spouse"),
    );
}

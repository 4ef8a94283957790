//! Intake-to-template data projection.
//!
//! [`project`] is a pure function from an [`IntakeRecord`] to the JSON data
//! object a document template binds against. It runs fresh for every render
//! call, performs no I/O, and raises no errors: absent optional intake
//! fields project as empty strings, empty arrays, or `false`, so the
//! rendering engine never sees a missing key. Every historical placeholder
//! name for a value is populated (see [`aliases`] for why).

mod aliases;
mod beneficiaries;
mod narrative;
mod snt;

pub use narrative::{
    Pronouns, children_statement, count_word, format_phone, marital_status_statement,
    oxford_join, trustee_narrative,
};

use codicil_intake::{Child, IntakeRecord, NamedParty, Person, TrustType};
use serde_json::{Map, Value, json};

/// Builds the full projected data object for one render call.
pub fn project(record: &IntakeRecord) -> Value {
    let mut data = Map::new();

    let current_date = if record.current_date.trim().is_empty() {
        narrative::long_date_today()
    } else {
        record.current_date.trim().to_string()
    };
    data.insert("currentDate".to_string(), json!(current_date));
    data.insert("today".to_string(), json!(current_date));

    let joint = record.joint();
    let irrevocable = record.irrevocable();
    let spouse = record.effective_spouse();
    let trust_name = trust_display_name(record, &spouse, joint);
    let trust_type_tag = record.trust_type.map(TrustType::as_tag).unwrap_or_default();

    data.insert(
        "trust".to_string(),
        json!({
            "name": trust_name,
            "type": trust_type_tag,
            "isJoint": joint,
            "isIrrevocable": irrevocable,
            "isRestatement": record.is_restatement,
            "originalName": record.original_trust_name,
            "originalDate": record.original_trust_date,
            "currentDate": current_date,
        }),
    );
    data.insert("trustName".to_string(), json!(trust_name));
    data.insert("trustType".to_string(), json!(trust_type_tag));
    data.insert("isJoint".to_string(), json!(joint));
    data.insert("isIrrevocable".to_string(), json!(irrevocable));
    data.insert("isRestatement".to_string(), json!(record.is_restatement));
    data.insert("originalTrustName".to_string(), json!(record.original_trust_name));
    data.insert("originalTrustDate".to_string(), json!(record.original_trust_date));

    data.insert("client".to_string(), person_value(&record.client, true));
    data.insert("spouse".to_string(), person_value(&spouse, false));

    // Children
    let children: Vec<Value> = record.children.iter().map(child_value).collect();
    data.insert("children".to_string(), Value::Array(children));
    data.insert("numChildren".to_string(), json!(record.children.len()));
    data.insert("hasChildren".to_string(), json!(!record.children.is_empty()));
    data.insert(
        "childrenList".to_string(),
        json!(narrative::children_table(&record.children)),
    );
    data.insert(
        "childrenStatement".to_string(),
        json!(narrative::children_statement(&record.children)),
    );
    data.insert(
        "firstChild".to_string(),
        record
            .children
            .first()
            .map(child_value)
            .unwrap_or_else(|| child_value(&Child::default())),
    );

    // Successor trustees
    let trustees: Vec<Value> = record.successor_trustees.iter().map(party_value).collect();
    data.insert("successorTrustees".to_string(), Value::Array(trustees));
    data.insert("numTrustees".to_string(), json!(record.successor_trustees.len()));
    data.insert(
        "hasTrustees".to_string(),
        json!(!record.successor_trustees.is_empty()),
    );
    data.insert(
        "trusteesList".to_string(),
        json!(narrative::numbered_party_list(&record.successor_trustees)),
    );
    data.insert(
        "trusteesNarrative".to_string(),
        json!(narrative::trustee_narrative(
            &record.successor_trustees,
            record.trustees_serve_type.unwrap_or_default(),
        )),
    );
    data.insert(
        "firstTrustee".to_string(),
        first_party_value(&record.successor_trustees),
    );

    // Guardians
    let guardians: Vec<Value> = record.guardians.iter().map(party_value).collect();
    data.insert("guardians".to_string(), Value::Array(guardians));
    data.insert("numGuardians".to_string(), json!(record.guardians.len()));
    data.insert("hasGuardians".to_string(), json!(!record.guardians.is_empty()));
    data.insert(
        "guardiansList".to_string(),
        json!(narrative::numbered_party_list(&record.guardians)),
    );
    data.insert("firstGuardian".to_string(), first_party_value(&record.guardians));

    // Agents: durable POA, healthcare POA, pour-over-will representatives.
    // Templates address the first two of each list as distinct sub-records.
    agent_family(&mut data, "clientPOA", &record.durable_poa.client);
    agent_family(&mut data, "spousePOA", &record.durable_poa.spouse);
    agent_family(&mut data, "clientHealthcare", &record.healthcare_poa.client);
    agent_family(&mut data, "spouseHealthcare", &record.healthcare_poa.spouse);
    data.insert(
        "clientPourOverRep1".to_string(),
        indexed_party_value(&record.pour_over_will.client.personal_representatives, 0),
    );
    data.insert(
        "clientPourOverRep2".to_string(),
        indexed_party_value(&record.pour_over_will.client.personal_representatives, 1),
    );
    data.insert(
        "spousePourOverRep1".to_string(),
        indexed_party_value(&record.pour_over_will.spouse.personal_representatives, 0),
    );
    data.insert(
        "spousePourOverRep2".to_string(),
        indexed_party_value(&record.pour_over_will.spouse.personal_representatives, 1),
    );

    data.insert(
        "anatomicalGifts".to_string(),
        json!({
            "client": gift_or_none(&record.anatomical_gifts.client),
            "spouse": gift_or_none(&record.anatomical_gifts.spouse),
        }),
    );

    data.insert(
        "lawOffice".to_string(),
        json!({
            "name": record.law_office.name,
            "attorney": record.law_office.attorney,
            "address": record.law_office.address,
            "city": record.law_office.city,
            "state": record.law_office.state,
            "zip": record.law_office.zip,
            "phone": narrative::format_phone(&record.law_office.phone),
            "email": record.law_office.email,
            "stateBar": record.law_office.state_bar,
        }),
    );

    // Distributions
    data.insert(
        "beneficiaries".to_string(),
        beneficiaries::project_beneficiaries(&record.residuary_beneficiaries),
    );
    data.insert(
        "numBeneficiaries".to_string(),
        json!(record.residuary_beneficiaries.len()),
    );
    data.insert(
        "hasResiduaryBeneficiaries".to_string(),
        json!(!record.residuary_beneficiaries.is_empty()),
    );
    data.insert(
        "specificDistributions".to_string(),
        beneficiaries::project_specific_distributions(&record.specific_distributions),
    );
    data.insert(
        "hasSpecificDistributions".to_string(),
        json!(!record.specific_distributions.is_empty()),
    );

    snt::project_snt(&mut data, record);
    aliases::apply_legacy_aliases(&mut data, record);
    Value::Object(data)
}

/// Uppercased default trust name when the intake left it blank.
fn trust_display_name(record: &IntakeRecord, spouse: &Person, joint: bool) -> String {
    let name = record.trust_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    let client = format!("{} {}", record.client.first_name, record.client.last_name)
        .trim()
        .to_uppercase();
    if joint {
        let spouse = format!("{} {}", spouse.first_name, spouse.last_name)
            .trim()
            .to_uppercase();
        format!("THE {client} AND {spouse} LIVING TRUST")
    } else {
        format!("THE {client} LIVING TRUST")
    }
}

fn pronoun_entries(sex: &str) -> (Pronouns, Value) {
    let p = Pronouns::for_sex(sex);
    let value = json!({
        "subject": p.subject,
        "object": p.object,
        "possessive": p.possessive,
        "possessivePronoun": p.possessive_pronoun,
        "reflexive": p.reflexive,
    });
    (p, value)
}

fn person_value(person: &Person, with_marital_status: bool) -> Value {
    let (pronouns, pronouns_value) = pronoun_entries(&person.sex);
    let mut obj = json!({
        "firstName": person.first_name,
        "middleName": person.middle_name,
        "lastName": person.last_name,
        "fullName": person.full_name(),
        "address": person.address,
        "city": person.city,
        "state": person.state,
        "zip": person.zip,
        "county": person.county,
        "fullAddress": person.full_address(),
        "phone": person.phone,
        "phoneFormatted": narrative::format_phone(&person.phone),
        "email": person.email,
        "ssn": person.ssn,
        "dateOfBirth": person.date_of_birth,
        "dob": person.date_of_birth,
        "sex": person.sex,
        "gender": person.sex,
        "notaryDate": person.notary_date,
        "pronouns": pronouns_value,
        "pronounSubject": pronouns.subject,
        "pronounObject": pronouns.object,
        "pronounPossessive": pronouns.possessive,
        "pronounPossessivePronoun": pronouns.possessive_pronoun,
        "pronounReflexive": pronouns.reflexive,
    });
    if with_marital_status && let Some(map) = obj.as_object_mut() {
        map.insert("maritalStatus".to_string(), json!(person.marital_status));
        map.insert(
            "maritalStatusStatement".to_string(),
            json!(narrative::marital_status_statement(&person.marital_status)),
        );
    }
    obj
}

fn child_value(child: &Child) -> Value {
    let (pronouns, pronouns_value) = pronoun_entries(&child.sex);
    let relation = if child.relation.trim().is_empty() {
        "child"
    } else {
        child.relation.trim()
    };
    json!({
        "firstName": child.first_name,
        "middleName": child.middle_name,
        "lastName": child.last_name,
        "fullName": child.full_name(),
        "name": child.full_name(),
        "dateOfBirth": child.date_of_birth,
        "dob": child.date_of_birth,
        "birthday": child.date_of_birth,
        "relation": relation,
        "sex": child.sex,
        "pronouns": pronouns_value,
        "pronounSubject": pronouns.subject,
        "pronounObject": pronouns.object,
        "pronounPossessive": pronouns.possessive,
    })
}

fn party_value(party: &NamedParty) -> Value {
    let pronouns = Pronouns::for_sex(&party.sex);
    json!({
        "firstName": party.first_name,
        "lastName": party.last_name,
        "fullName": party.full_name(),
        "relationship": party.relationship,
        "address": party.address,
        "phone": party.phone,
        "phoneFormatted": narrative::format_phone(&party.phone),
        "email": party.email,
        "pronounPossessive": pronouns.possessive,
    })
}

fn indexed_party_value(parties: &[NamedParty], index: usize) -> Value {
    parties
        .get(index)
        .map(party_value)
        .unwrap_or_else(|| party_value(&NamedParty::default()))
}

fn first_party_value(parties: &[NamedParty]) -> Value {
    indexed_party_value(parties, 0)
}

/// Inserts the list, numbered display block, and first/second sub-records
/// an agent family projects under (`clientPOA`, `clientPOA1`, ...).
fn agent_family(data: &mut Map<String, Value>, prefix: &str, agents: &[NamedParty]) {
    let list: Vec<Value> = agents.iter().map(party_value).collect();
    data.insert(prefix.to_string(), Value::Array(list));
    data.insert(
        format!("{prefix}List"),
        json!(narrative::numbered_party_list(agents)),
    );
    data.insert(format!("{prefix}1"), indexed_party_value(agents, 0));
    data.insert(format!("{prefix}2"), indexed_party_value(agents, 1));
}

fn gift_or_none(gift: &str) -> String {
    let g = gift.trim();
    if g.is_empty() { "none".to_string() } else { g.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codicil_intake::{ServeType, TrustType};

    fn joint_record() -> IntakeRecord {
        serde_json::from_value(json!({
            "client": {
                "firstName": "John", "lastName": "Smith", "sex": "male",
                "maritalStatus": "married", "phone": "8183968257",
                "address": "1 Elm St", "city": "Glendale", "state": "CA", "zip": "91203"
            },
            "spouse": { "firstName": "Mary", "lastName": "Smith", "sex": "female" },
            "isJoint": true,
            "currentDate": "January 15, 2025",
            "children": [
                { "firstName": "Jane", "lastName": "Smith", "dateOfBirth": "06/15/1990" },
                { "firstName": "Bob", "lastName": "Smith", "dateOfBirth": "03/22/1993" }
            ],
            "successorTrustees": [
                { "name": "Udo Gyene" },
                { "name": "Ilona Farag" }
            ],
            "trusteesServeType": "sequential",
            "residuaryBeneficiaries": [
                { "name": "Jane Smith", "share": 50.0 },
                { "name": "Bob Smith", "share": 50.0 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn empty_intake_projects_all_keys_with_safe_defaults() {
        let data = project(&IntakeRecord::default());
        let obj = data.as_object().unwrap();

        for key in [
            "trustName", "clientFullName", "grantorFullName", "spouseFullName",
            "childrenStatement", "childrenTable", "childrenReferences",
            "trusteesList", "successorTrusteesList", "guardiansList",
            "maritalStatus", "beneficiaryDistribution",
        ] {
            assert!(obj[key].is_string(), "{key} should be a string");
        }
        for key in [
            "isJoint", "isIrrevocable", "isRestatement", "hasChildren",
            "hasTrustees", "hasGuardians", "hasSpecificDistributions",
            "isSNT", "isFirstPartySNT", "isThirdPartySNT",
        ] {
            assert_eq!(obj[key], false, "{key} should default to false");
        }
        for key in ["children", "successorTrustees", "guardians", "beneficiaries"] {
            assert_eq!(obj[key], json!([]), "{key} should default to empty");
        }
        assert_eq!(obj["childrenStatement"], "I have no children.");
        assert_eq!(obj["notIsRestatement"], true);
        assert_eq!(obj["clientPOA1"]["fullName"], "");
        assert_eq!(obj["firstChild"]["relation"], "child");
        assert_eq!(obj["exampleChild"]["fullName"], "");
    }

    #[test]
    fn joint_record_projects_spouse_and_narratives() {
        let data = project(&joint_record());
        assert_eq!(data["spouse"]["fullName"], "Mary Smith");
        assert_eq!(data["spouseFullName"], "Mary Smith");
        assert_eq!(
            data["childrenStatement"],
            "I have two children: Jane Smith, born 06/15/1990, and Bob Smith, born 03/22/1993."
        );
        assert_eq!(data["trusteesNarrative"], "Udo Gyene,\nthen Ilona Farag");
        assert_eq!(data["successorTrusteesList"], "Udo Gyene,\nthen Ilona Farag");
        assert_eq!(data["maritalStatus"], "I am married");
        assert_eq!(data["client"]["phoneFormatted"], "(818) 396-8257");
        assert_eq!(data["beneficiaryDistribution"], "Jane Smith: 50%, Bob Smith: 50%");
        assert_eq!(data["trustName"], "THE JOHN SMITH AND MARY SMITH LIVING TRUST");
    }

    #[test]
    fn spouse_on_single_intake_projects_empty() {
        let mut record = joint_record();
        record.is_joint = false;
        record.trust_type = Some(TrustType::SingleLiving);
        let data = project(&record);
        assert_eq!(data["spouse"]["fullName"], "");
        assert_eq!(data["isJoint"], false);
        assert_eq!(data["trustName"], "THE JOHN SMITH LIVING TRUST");
    }

    #[test]
    fn explicit_trust_name_wins_over_synthesized() {
        let mut record = joint_record();
        record.trust_name = "The Smith Family Living Trust".to_string();
        let data = project(&record);
        assert_eq!(data["trustName"], "The Smith Family Living Trust");
        assert_eq!(data["trust"]["name"], "The Smith Family Living Trust");
    }

    #[test]
    fn together_serve_type_changes_narrative() {
        let mut record = joint_record();
        record.trustees_serve_type = Some(ServeType::Together);
        let data = project(&record);
        assert_eq!(
            data["trusteesNarrative"],
            "Udo Gyene and Ilona Farag, jointly or the survivor of them"
        );
    }

    #[test]
    fn aliases_mirror_canonical_values() {
        let data = project(&joint_record());
        assert_eq!(data["client"]["fullName"], data["clientFullName"]);
        assert_eq!(data["client"]["fullName"], data["grantorFullName"]);
        assert_eq!(data["childrenList"], data["childrenTable"]);
        assert_eq!(data["currentDate"], data["trustDate"]);
        assert_eq!(data["childrenReferences"], "Jane Smith, Bob Smith");
    }

    #[test]
    fn example_child_mirrors_first_child() {
        let data = project(&joint_record());
        assert_eq!(data["exampleChild"], data["firstChild"]);
        assert_eq!(data["exampleChild"]["fullName"], "Jane Smith");
    }

    #[test]
    fn assets_key_carries_schedule_boilerplate() {
        let data = project(&IntakeRecord::default());
        assert_eq!(data["assets"], "All property transferred to this trust");
    }

    #[test]
    fn trust_type_tag_implies_joint_flag() {
        let record = IntakeRecord {
            trust_type: Some(TrustType::JointIrrevocable),
            ..IntakeRecord::default()
        };
        let data = project(&record);
        assert_eq!(data["isJoint"], true);
        assert_eq!(data["isIrrevocable"], true);
        assert_eq!(data["trustType"], "joint_irrevocable");
    }
}

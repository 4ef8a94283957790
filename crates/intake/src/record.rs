//! The top-level intake record.

use crate::estate::{ResiduaryBeneficiary, ServeType, SpecificDistribution};
use crate::person::{Child, NamedParty, Person};
use crate::snt::SntData;
use crate::trust::TrustType;
use serde::{Deserialize, Serialize};

/// Everything gathered from a client before document assembly.
///
/// All list fields deserialize to empty when absent; all flags to `false`.
/// `spouse` and `snt_data` stay `Option` because their mere presence carries
/// meaning (joint intake, SNT intake) that an all-empty default would blur.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakeRecord {
    pub client: Person,
    pub spouse: Option<Person>,

    // Trust metadata
    pub trust_name: String,
    pub trust_type: Option<TrustType>,
    pub is_joint: bool,
    pub is_irrevocable: bool,
    pub is_restatement: bool,
    pub original_trust_name: String,
    pub original_trust_date: String,
    /// Execution date as it should print; the projection supplies today's
    /// date when empty.
    pub current_date: String,

    // Family and appointments
    pub children: Vec<Child>,
    pub successor_trustees: Vec<NamedParty>,
    pub trustees_serve_type: Option<ServeType>,
    pub guardians: Vec<NamedParty>,
    pub durable_poa: AgentAssignments,
    pub healthcare_poa: AgentAssignments,
    pub pour_over_will: PourOverWill,

    // Distributions
    pub residuary_beneficiaries: Vec<ResiduaryBeneficiary>,
    pub specific_distributions: Vec<SpecificDistribution>,

    pub snt_data: Option<SntData>,
    pub anatomical_gifts: AnatomicalGifts,
    pub law_office: FirmProfile,
}

impl IntakeRecord {
    /// Joint status: the explicit flag OR the composite trust-type tag.
    /// The two sources are deliberately permissive; the catalog warns when
    /// they disagree.
    pub fn joint(&self) -> bool {
        self.is_joint || self.trust_type.is_some_and(TrustType::implies_joint)
    }

    /// Irrevocable status, combined the same way as [`joint`](Self::joint).
    pub fn irrevocable(&self) -> bool {
        self.is_irrevocable || self.trust_type.is_some_and(TrustType::implies_irrevocable)
    }

    /// The spouse record when the intake is joint, empty otherwise. A spouse
    /// entered on a non-joint intake is ignored downstream.
    pub fn effective_spouse(&self) -> Person {
        if self.joint() {
            self.spouse.clone().unwrap_or_default()
        } else {
            Person::default()
        }
    }
}

/// Agent lists for a power of attorney, split by principal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentAssignments {
    pub client: Vec<NamedParty>,
    pub spouse: Vec<NamedParty>,
}

/// Pour-over will appointments, split by testator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PourOverWill {
    pub client: RepresentativeList,
    pub spouse: RepresentativeList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepresentativeList {
    pub personal_representatives: Vec<NamedParty>,
}

/// Per-person anatomical gift preference, free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnatomicalGifts {
    pub client: String,
    pub spouse: String,
}

/// The preparing firm's letterhead block, printed on cover pages and
/// signature blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirmProfile {
    pub name: String,
    pub attorney: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub state_bar: String,
}

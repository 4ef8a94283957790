//! The closed set of trust-type tags an intake may carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite trust-type tag. Joint and irrevocable variants imply the
/// corresponding flags; the special-needs variants short-circuit template
/// selection entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustType {
    SingleLiving,
    JointLiving,
    SingleIrrevocable,
    JointIrrevocable,
    FirstPartySnt,
    ThirdPartySnt,
    SingleEstatePlan,
    JointEstatePlan,
}

impl TrustType {
    pub fn implies_joint(self) -> bool {
        matches!(
            self,
            TrustType::JointLiving | TrustType::JointIrrevocable | TrustType::JointEstatePlan
        )
    }

    pub fn implies_irrevocable(self) -> bool {
        matches!(
            self,
            TrustType::SingleIrrevocable | TrustType::JointIrrevocable
        )
    }

    pub fn implies_complete_plan(self) -> bool {
        matches!(self, TrustType::SingleEstatePlan | TrustType::JointEstatePlan)
    }

    pub fn is_snt(self) -> bool {
        matches!(self, TrustType::FirstPartySnt | TrustType::ThirdPartySnt)
    }

    /// The tag as it appears in intake data.
    pub fn as_tag(self) -> &'static str {
        match self {
            TrustType::SingleLiving => "single_living",
            TrustType::JointLiving => "joint_living",
            TrustType::SingleIrrevocable => "single_irrevocable",
            TrustType::JointIrrevocable => "joint_irrevocable",
            TrustType::FirstPartySnt => "first_party_snt",
            TrustType::ThirdPartySnt => "third_party_snt",
            TrustType::SingleEstatePlan => "single_estate_plan",
            TrustType::JointEstatePlan => "joint_estate_plan",
        }
    }
}

impl fmt::Display for TrustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

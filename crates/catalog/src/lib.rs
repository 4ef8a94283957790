//! Template selection.
//!
//! One decision per render call, no state. An SNT trust-type tag decides
//! first (special-needs trusts have no complete-package variant); everything
//! else branches on complete-plan, joint, and irrevocable status. Joint and
//! irrevocable each come from two sources, an explicit intake flag and the
//! composite trust-type tag, OR'd together, so either source alone is
//! enough to select the joint or irrevocable variant.

use codicil_intake::{IntakeRecord, TrustType};

/// Whether to render the trust document alone or the complete estate
/// planning package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanScope {
    #[default]
    TrustOnly,
    CompletePlan,
}

/// Every stored template the catalog can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    SingleLivingTrust,
    JointLivingTrust,
    SingleIrrevocableTrust,
    JointIrrevocableTrust,
    SingleEstatePlan,
    JointEstatePlan,
    FirstPartySnt,
    ThirdPartySnt,
}

impl TemplateVariant {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SingleLivingTrust => "Single Living Trust",
            Self::JointLivingTrust => "Joint Living Trust",
            Self::SingleIrrevocableTrust => "Single Irrevocable Trust",
            Self::JointIrrevocableTrust => "Joint Irrevocable Trust",
            Self::SingleEstatePlan => "Single Estate Planning Package",
            Self::JointEstatePlan => "Joint Estate Planning Package",
            Self::FirstPartySnt => "First Party Special Needs Trust",
            Self::ThirdPartySnt => "Third Party Special Needs Trust",
        }
    }

    /// File name the variant is stored under.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::SingleLivingTrust => "single_living_trust_template.docx",
            Self::JointLivingTrust => "joint_living_trust_template.docx",
            Self::SingleIrrevocableTrust => "single_irrevocable_trust_template.docx",
            Self::JointIrrevocableTrust => "joint_irrevocable_trust_template.docx",
            Self::SingleEstatePlan => "single_estate_planning_template.docx",
            Self::JointEstatePlan => "joint_estate_planning_template.docx",
            Self::FirstPartySnt => "first_party_snt_template.docx",
            Self::ThirdPartySnt => "third_party_snt_template.docx",
        }
    }
}

impl std::fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Selects the template variant for an intake record.
pub fn select_template(record: &IntakeRecord, scope: PlanScope) -> TemplateVariant {
    match record.trust_type {
        Some(TrustType::FirstPartySnt) => return TemplateVariant::FirstPartySnt,
        Some(TrustType::ThirdPartySnt) => return TemplateVariant::ThirdPartySnt,
        _ => {}
    }

    warn_on_flag_disagreement(record);

    let joint = record.joint();
    let complete = scope == PlanScope::CompletePlan
        || record.trust_type.is_some_and(TrustType::implies_complete_plan);

    if complete {
        if joint {
            TemplateVariant::JointEstatePlan
        } else {
            TemplateVariant::SingleEstatePlan
        }
    } else if record.irrevocable() {
        if joint {
            TemplateVariant::JointIrrevocableTrust
        } else {
            TemplateVariant::SingleIrrevocableTrust
        }
    } else if joint {
        TemplateVariant::JointLivingTrust
    } else {
        TemplateVariant::SingleLivingTrust
    }
}

/// The explicit flags and the trust-type tag are OR'd, so a disagreement
/// still selects a template, but it usually means the intake was edited
/// inconsistently and is worth a trace in the log.
fn warn_on_flag_disagreement(record: &IntakeRecord) {
    let Some(tag) = record.trust_type else { return };
    if record.is_joint && !tag.implies_joint() {
        log::warn!(
            "intake flags isJoint but trust type tag {:?} is a single variant; treating as joint",
            tag.as_tag()
        );
    }
    if record.is_irrevocable && !tag.implies_irrevocable() {
        log::warn!(
            "intake flags isIrrevocable but trust type tag {:?} is a revocable variant; treating as irrevocable",
            tag.as_tag()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(trust_type: Option<TrustType>, joint: bool, irrevocable: bool) -> IntakeRecord {
        IntakeRecord {
            trust_type,
            is_joint: joint,
            is_irrevocable: irrevocable,
            ..IntakeRecord::default()
        }
    }

    #[test]
    fn snt_tag_short_circuits_everything() {
        // Joint, irrevocable, and complete-plan are all ignored for SNTs.
        let r = record(Some(TrustType::FirstPartySnt), true, true);
        assert_eq!(
            select_template(&r, PlanScope::CompletePlan),
            TemplateVariant::FirstPartySnt
        );
        let r = record(Some(TrustType::ThirdPartySnt), false, false);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::ThirdPartySnt
        );
    }

    #[test]
    fn default_selection_is_single_living_trust() {
        let r = IntakeRecord::default();
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::SingleLivingTrust
        );
    }

    #[test]
    fn joint_and_irrevocable_combine() {
        let r = record(None, true, true);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::JointIrrevocableTrust
        );
        let r = record(None, false, true);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::SingleIrrevocableTrust
        );
    }

    #[test]
    fn complete_plan_wins_over_irrevocable() {
        let r = record(None, true, true);
        assert_eq!(
            select_template(&r, PlanScope::CompletePlan),
            TemplateVariant::JointEstatePlan
        );
    }

    #[test]
    fn joint_inferred_from_tag_alone() {
        let r = record(Some(TrustType::JointLiving), false, false);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::JointLivingTrust
        );
        let r = record(Some(TrustType::JointIrrevocable), false, false);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::JointIrrevocableTrust
        );
    }

    #[test]
    fn estate_plan_tag_implies_complete_scope() {
        let r = record(Some(TrustType::SingleEstatePlan), false, false);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::SingleEstatePlan
        );
    }

    #[test]
    fn explicit_flag_wins_over_single_tag() {
        let r = record(Some(TrustType::SingleLiving), true, false);
        assert_eq!(
            select_template(&r, PlanScope::TrustOnly),
            TemplateVariant::JointLivingTrust
        );
    }

    #[test]
    fn file_names_follow_variant() {
        assert_eq!(
            TemplateVariant::JointEstatePlan.file_name(),
            "joint_estate_planning_template.docx"
        );
        assert_eq!(
            TemplateVariant::FirstPartySnt.file_name(),
            "first_party_snt_template.docx"
        );
        assert_eq!(
            TemplateVariant::SingleLivingTrust.to_string(),
            "Single Living Trust"
        );
    }
}

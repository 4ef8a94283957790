//! The client intake record: the single external input to document assembly.
//!
//! Everything here is plain serde-derived data. Every list field defaults to
//! empty and every string field to `""`, so downstream consumers never have
//! to distinguish "absent" from "empty"; the projection layer relies on
//! this when it applies its null-object policy.

pub mod estate;
pub mod person;
pub mod record;
pub mod snt;
pub mod trust;

pub use estate::{
    AgeRule, DistributionType, ResiduaryBeneficiary, ServeType, SpecificDistribution,
};
pub use person::{Child, NamedParty, Person};
pub use record::{
    AgentAssignments, AnatomicalGifts, FirmProfile, IntakeRecord, PourOverWill,
    RepresentativeList,
};
pub use snt::{GovernmentBenefits, RemainderBeneficiary, SntBeneficiary, SntData};
pub use trust::TrustType;

//! Estate-planning document assembly.
//!
//! `codicil` turns a client intake record into a filled document package:
//! it selects the stored template variant for the intake, repairs
//! placeholder tokens that a word processor split across styled runs,
//! projects the intake into the data object the template binds against,
//! and invokes a pluggable rendering engine.
//!
//! The crates underneath split along those seams:
//!
//! - `codicil-intake`: the serde data model for an intake record
//! - `codicil-tag-repair`: split-token repair and grammar normalization
//! - `codicil-projection`: intake-to-template-data projection
//! - `codicil-catalog`: template variant selection
//! - `codicil-render-core`: the rendering engine trait and tag error model
//! - `codicil-store`: template byte storage (filesystem, memory, HTTP)
//!
//! [`fill_document`] ties them together; everything it uses is also
//! exported here for callers that need a single piece.

pub mod error;
pub mod pipeline;

pub use error::CodicilError;
pub use pipeline::{FilledDocument, fill_document};

pub use codicil_catalog::{PlanScope, TemplateVariant, select_template};
pub use codicil_intake::IntakeRecord;
pub use codicil_projection::project;
pub use codicil_render_core::{
    DocumentRenderer, NopRenderer, RenderError, TagError, report_tag_errors,
};
pub use codicil_store::{
    FilesystemTemplateStore, HttpTemplateStore, InMemoryTemplateStore, StoreError, TemplateStore,
};
pub use codicil_tag_repair::{RepairOutcome, RepairWarning, prepare, repair};

//! The document assembly pipeline.
//!
//! One call renders one document: select the template variant, fetch its
//! bytes, repair and normalize the body, project the intake data, and hand
//! both to the rendering engine. The store operations are the only awaits;
//! everything in between is synchronous and owns its data, so concurrent
//! calls share nothing.

use crate::error::CodicilError;
use codicil_catalog::{PlanScope, TemplateVariant, select_template};
use codicil_intake::IntakeRecord;
use codicil_render_core::{DocumentRenderer, RenderError, report_tag_errors};
use codicil_store::TemplateStore;
use codicil_tag_repair::RepairWarning;

/// A rendered document package plus what went into it.
#[derive(Debug)]
pub struct FilledDocument {
    pub bytes: Vec<u8>,
    pub variant: TemplateVariant,
    /// Split placeholders the repair pass could not merge. Non-fatal when
    /// the engine still accepted the body.
    pub repair_warnings: Vec<RepairWarning>,
}

/// Renders the document for an intake record.
///
/// Tag-level failures from the engine are each logged with their context
/// before the aggregate error is returned, so a template author gets the
/// complete list in one run.
pub async fn fill_document(
    record: &IntakeRecord,
    scope: PlanScope,
    store: &dyn TemplateStore,
    renderer: &dyn DocumentRenderer,
) -> Result<FilledDocument, CodicilError> {
    let variant = select_template(record, scope);
    let file = variant.file_name();

    if !store.exists(file).await? {
        return Err(CodicilError::TemplateNotFound { variant, file });
    }
    let package = store.fetch(file).await?;

    let body = renderer.extract_body(&package)?;
    let prepared = codicil_tag_repair::prepare(&body);
    let data = codicil_projection::project(record);

    log::debug!(
        "rendering {variant} ({} bytes, {} repair warnings)",
        package.len(),
        prepared.warnings.len()
    );

    match renderer.render(&package, &prepared.body, &data) {
        Ok(bytes) => Ok(FilledDocument {
            bytes,
            variant,
            repair_warnings: prepared.warnings,
        }),
        Err(RenderError::Tags(errors)) => {
            report_tag_errors(&errors);
            Err(RenderError::Tags(errors).into())
        }
        Err(other) => Err(other.into()),
    }
}

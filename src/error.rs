use codicil_catalog::TemplateVariant;
use codicil_render_core::RenderError;
use codicil_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodicilError {
    /// The catalog selected a variant the store does not hold. The message
    /// names the variant and file so the operator knows exactly what to
    /// upload.
    #[error(
        "no stored template for the {variant} variant: expected {file:?} in the template store"
    )]
    TemplateNotFound {
        variant: TemplateVariant,
        file: &'static str,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

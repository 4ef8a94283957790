use thiserror::Error;

/// One data-binding failure from the rendering engine, tied to a single
/// placeholder tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagError {
    /// The engine's own failure message.
    pub message: String,
    /// The placeholder text as it appears in the template.
    pub tag: String,
    /// Template text surrounding the failing tag.
    pub context: String,
    /// Human-readable explanation of what is wrong with the tag.
    pub explanation: String,
    /// Byte offset of the tag in the document body, when the engine knows it.
    pub offset: Option<usize>,
}

#[derive(Error, Debug)]
pub enum RenderError {
    /// The engine rejected one or more tags. Always carries the complete
    /// list; the engine does not stop at the first bad tag.
    #[error("{} template tag error(s)", .0.len())]
    Tags(Vec<TagError>),
    /// The engine failed outside of tag binding (corrupt package, internal
    /// failure).
    #[error("rendering engine error: {0}")]
    Engine(String),
    #[error("template body is not valid UTF-8: {0}")]
    BodyEncoding(#[from] std::string::FromUtf8Error),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Engine(s.to_string())
    }
}

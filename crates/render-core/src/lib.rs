//! The seam between document assembly and the external rendering engine.
//!
//! The engine itself (placeholder grammar, substitution, loops,
//! conditionals, package read/write) lives behind [`DocumentRenderer`].
//! This crate owns the error model that crosses the seam and the
//! diagnostic reporting for tag failures: every bad tag in a template is
//! logged individually so a document author can fix the whole template in
//! one pass, then a single aggregate failure is surfaced.

mod error;

pub use error::{RenderError, TagError};

use serde_json::Value;

/// Longest context snippet printed per tag diagnostic.
const MAX_CONTEXT_CHARS: usize = 150;

/// A pluggable document rendering engine.
///
/// `extract_body` exposes the serialized text body of a template package so
/// the repair and normalization passes can run on it; `render` binds the
/// projected data against that (repaired) body and produces the final
/// package bytes. The package is treated as opaque bytes on both sides.
pub trait DocumentRenderer: Send + Sync {
    fn extract_body(&self, package: &[u8]) -> Result<String, RenderError>;

    fn render(&self, package: &[u8], body: &str, data: &Value) -> Result<Vec<u8>, RenderError>;
}

/// Renderer that passes the body through untouched and returns it as the
/// output package. Stands in where no engine is wired up, and gives tests a
/// renderer with no engine dependency.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopRenderer;

impl DocumentRenderer for NopRenderer {
    fn extract_body(&self, package: &[u8]) -> Result<String, RenderError> {
        Ok(String::from_utf8(package.to_vec())?)
    }

    fn render(&self, _package: &[u8], body: &str, _data: &Value) -> Result<Vec<u8>, RenderError> {
        Ok(body.as_bytes().to_vec())
    }
}

/// Logs one diagnostic line per tag error and returns the aggregate summary
/// line. Never attempts a fix; the template author owns the template.
pub fn report_tag_errors(errors: &[TagError]) -> String {
    for e in errors {
        let context = trim_context(&e.context);
        match e.offset {
            Some(offset) => log::error!(
                "template tag {:?} at byte {offset}: {} (near {context:?})",
                e.tag,
                e.explanation
            ),
            None => log::error!("template tag {:?}: {} (near {context:?})", e.tag, e.explanation),
        }
    }
    let summary = format!(
        "template rejected: {} tag error(s); see log for each tag",
        errors.len()
    );
    log::error!("{summary}");
    summary
}

/// Collapses whitespace runs and caps the snippet length so a context that
/// spans markup stays on one log line.
fn trim_context(context: &str) -> String {
    let collapsed: String = context.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_CONTEXT_CHARS {
        collapsed
    } else {
        let truncated: String = collapsed.chars().take(MAX_CONTEXT_CHARS).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nop_renderer_round_trips_body() {
        let renderer = NopRenderer;
        let body = renderer.extract_body(b"hello {name}").unwrap();
        assert_eq!(body, "hello {name}");
        let out = renderer.render(b"hello {name}", &body, &json!({})).unwrap();
        assert_eq!(out, b"hello {name}");
    }

    #[test]
    fn nop_renderer_rejects_non_utf8() {
        let err = NopRenderer.extract_body(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, RenderError::BodyEncoding(_)));
    }

    #[test]
    fn aggregate_summary_counts_errors() {
        let errors = vec![
            TagError {
                message: "unclosed tag".into(),
                tag: "{trustName".into(),
                context: "some   \n  context".into(),
                explanation: "tag is never closed".into(),
                offset: Some(42),
            },
            TagError {
                message: "unknown key".into(),
                tag: "{nope}".into(),
                context: String::new(),
                explanation: "no such key".into(),
                offset: None,
            },
        ];
        let summary = report_tag_errors(&errors);
        assert_eq!(summary, "template rejected: 2 tag error(s); see log for each tag");
    }

    #[test]
    fn context_is_collapsed_and_capped() {
        let long = "word ".repeat(100);
        let trimmed = trim_context(&long);
        assert!(trimmed.chars().count() <= MAX_CONTEXT_CHARS + 1);
        assert!(trimmed.ends_with('…'));
        assert_eq!(trim_context("a \n  b"), "a b");
    }

    #[test]
    fn tags_error_displays_count() {
        let err = RenderError::Tags(vec![TagError {
            message: String::new(),
            tag: "{x}".into(),
            context: String::new(),
            explanation: String::new(),
            offset: None,
        }]);
        assert_eq!(err.to_string(), "1 template tag error(s)");
    }
}

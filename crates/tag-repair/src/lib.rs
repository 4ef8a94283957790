//! Placeholder token repair for word-processing document bodies.
//!
//! Editors persist a paragraph's text as a sequence of independently styled
//! runs, and re-split those runs mid-token during editing (autocorrect,
//! spell-check, smart quotes). A placeholder typed as `{trustName}` is then
//! serialized as `{trust</w:t></w:r><w:r><w:t>Name}` and is invisible to any
//! text-level tokenizer. This crate reconstructs each placeholder as a
//! single contiguous token before the body reaches the rendering engine.
//!
//! Two passes run over the serialized body:
//!
//! 1. a single-delimiter pass merging every innermost `{…}` span that
//!    contains inline markup, and
//! 2. a double-delimiter pass over the partially repaired body, catching
//!    `{{…}}` tokens whose outer braces are themselves separated by markup
//!    (only visible once the inner span has been merged).
//!
//! A token the scanner cannot merge (one crossing a paragraph or
//! table-cell boundary, or left open at end of input) is reported as a
//! recoverable [`RepairWarning`] and left untouched; the rendering engine's
//! own parse failure carries the final diagnosis.
//!
//! The [`normalize`] pass then inserts a separating space between control
//! tokens that abut with no intervening text, which the downstream
//! tokenizer would otherwise merge.

mod normalizer;
mod scanner;

pub use normalizer::normalize;
pub use scanner::count_tokens;

use thiserror::Error;

/// A split token the repair pass detected but could not merge. Non-fatal:
/// the token is left as written and the rendering stage reports the parse
/// failure with full context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("split placeholder could not be repaired at byte {offset}: {snippet:?}")]
pub struct RepairWarning {
    /// Byte offset of the opening delimiter in the input body.
    pub offset: usize,
    /// The start of the unrepairable span, trimmed for logging.
    pub snippet: String,
}

/// The repaired body plus any warnings raised along the way.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub body: String,
    pub warnings: Vec<RepairWarning>,
}

/// Runs both repair passes over a document body.
///
/// The output contains the same logical placeholder tokens as the input,
/// with every mergeable split token made contiguous. Markup outside token
/// spans is never rewritten. Idempotent.
pub fn repair(body: &str) -> RepairOutcome {
    let mut warnings = Vec::new();
    let merged = scanner::merge_single(body, &mut warnings);
    let merged = scanner::merge_double(&merged, &mut warnings);
    for warning in &warnings {
        log::warn!("{warning}");
    }
    RepairOutcome {
        body: merged,
        warnings,
    }
}

/// Repair followed by grammar normalization, the full preprocessing a body
/// needs before it is handed to the rendering engine.
pub fn prepare(body: &str) -> RepairOutcome {
    let outcome = repair(body);
    RepairOutcome {
        body: normalize(&outcome.body),
        warnings: outcome.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT: &str =
        "<w:p><w:r><w:t>{trust</w:t></w:r><w:r><w:rPr/><w:t>Name}</w:t></w:r></w:p>";

    #[test]
    fn repair_is_idempotent() {
        let once = repair(SPLIT);
        let twice = repair(&once.body);
        assert_eq!(once.body, twice.body);
        assert!(twice.warnings.is_empty());
    }

    #[test]
    fn repair_preserves_token_count() {
        let body = "<w:t>{a</w:t><w:t>b} plain {c} and {{d</w:t><w:t>e}}</w:t>";
        let before = count_tokens(body);
        let outcome = repair(body);
        assert_eq!(count_tokens(&outcome.body), before);
    }

    #[test]
    fn no_split_tokens_remain_after_repair() {
        let outcome = repair(SPLIT);
        assert!(outcome.body.contains("{trustName}"));
        assert!(outcome.warnings.is_empty());
        // No opening brace is still separated from its text by markup.
        assert!(!outcome.body.contains("{trust<"));
    }

    #[test]
    fn prepare_spaces_abutting_control_tokens() {
        let body = "<w:t>{/children}{#guardians}</w:t>";
        let outcome = prepare(body);
        assert_eq!(outcome.body, "<w:t>{/children} {#guardians}</w:t>");
    }
}

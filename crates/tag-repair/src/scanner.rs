//! Finite-state scanner over a serialized element tree.
//!
//! The scanner walks the body text directly rather than pattern-matching
//! over it: each position is either outside a token, inside a token, or
//! inside a token that has crossed inline markup. A `<…>` run is treated as
//! a single opaque markup unit; braces inside markup are never token
//! delimiters.

use crate::RepairWarning;

/// End tags the scanner refuses to merge across. A placeholder split over a
/// paragraph, table-cell, or row boundary was authored wrong, and merging it
/// would corrupt the surrounding structure.
const BLOCK_BARRIERS: &[&str] = &["p", "tc", "tr", "tbl", "body"];

/// Index one past the `>` closing the markup unit starting at `start`
/// (which must index a `<`). `None` when the markup never closes.
pub(crate) fn markup_end(body: &str, start: usize) -> Option<usize> {
    body[start..].find('>').map(|i| start + i + 1)
}

/// True when `tag` (the text between `<` and `>`) closes a block element.
fn is_block_barrier(tag: &str) -> bool {
    let Some(name) = tag.strip_prefix('/') else {
        return false;
    };
    let name = name.trim();
    let local = name.rsplit(':').next().unwrap_or(name);
    BLOCK_BARRIERS.contains(&local)
}

fn snippet_of(span: &str) -> String {
    const MAX: usize = 60;
    let mut end = span.len().min(MAX);
    while !span.is_char_boundary(end) {
        end -= 1;
    }
    span[..end].to_string()
}

/// Outcome of scanning a single-delimiter span from its opening brace.
enum Span {
    /// Contiguous token; copy through untouched. `end` is one past `}`.
    Clean { end: usize },
    /// Token contained markup; emit `{text}` in place of the span.
    Repaired { end: usize, text: String },
    /// Another opening brace appeared before this span closed (the inner
    /// token of a `{{…}}`, or a stray literal brace); rescan from `at`.
    Restart { at: usize },
    /// Span crossed a block barrier or ran out of input; copy verbatim.
    /// Warn only when markup made it look like a split token.
    Broken { end: usize, had_markup: bool },
}

fn scan_single_span(body: &str, open: usize) -> Span {
    let mut text = String::new();
    let mut saw_markup = false;
    let mut i = open + 1;
    loop {
        let rest = &body[i..];
        let Some(off) = rest.find(['<', '{', '}']) else {
            return Span::Broken {
                end: body.len(),
                had_markup: saw_markup,
            };
        };
        text.push_str(&rest[..off]);
        let pos = i + off;
        match body.as_bytes()[pos] {
            b'<' => {
                let Some(end) = markup_end(body, pos) else {
                    return Span::Broken {
                        end: body.len(),
                        had_markup: true,
                    };
                };
                if is_block_barrier(&body[pos + 1..end - 1]) {
                    return Span::Broken {
                        end,
                        had_markup: true,
                    };
                }
                saw_markup = true;
                i = end;
            }
            b'{' => return Span::Restart { at: pos },
            _ => {
                // Closing brace.
                return if saw_markup {
                    Span::Repaired { end: pos + 1, text }
                } else {
                    Span::Clean { end: pos + 1 }
                };
            }
        }
    }
}

/// First pass: merge every innermost `{…}` span containing markup.
///
/// The inner span of a `{{…}}` token is an innermost `{…}` span itself, so
/// this pass also repairs inner splits of double-delimiter tokens; the
/// outer braces are [`merge_double`]'s job.
pub(crate) fn merge_single(body: &str, warnings: &mut Vec<RepairWarning>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        let Some(off) = rest.find(['{', '<']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..off]);
        let pos = i + off;
        if body.as_bytes()[pos] == b'<' {
            let end = markup_end(body, pos).unwrap_or(body.len());
            out.push_str(&body[pos..end]);
            i = end;
            continue;
        }
        match scan_single_span(body, pos) {
            Span::Clean { end } => {
                out.push_str(&body[pos..end]);
                i = end;
            }
            Span::Repaired { end, text } => {
                out.push('{');
                out.push_str(&text);
                out.push('}');
                i = end;
            }
            Span::Restart { at } => {
                out.push_str(&body[pos..at]);
                i = at;
            }
            Span::Broken { end, had_markup } => {
                if had_markup {
                    warnings.push(RepairWarning {
                        offset: pos,
                        snippet: snippet_of(&body[pos..end]),
                    });
                }
                out.push_str(&body[pos..end]);
                i = end;
            }
        }
    }
    out
}

/// Outcome of scanning a double-delimiter candidate from its outer brace.
enum DoubleSpan {
    /// A lone `{` with no second opening brace behind it; emit it and keep
    /// scanning at the next byte.
    NotDouble,
    /// Well-formed contiguous `{{…}}`; copy through untouched.
    Clean { end: usize },
    /// Markup separated the braces; emit `{{text}}` in place of the span.
    Repaired { end: usize, text: String },
    /// Looked like a double but is not one; copy verbatim, no warning.
    Passthrough { end: usize },
    /// Split double that cannot be merged; copy verbatim and warn.
    Broken { end: usize },
}

fn scan_double_span(body: &str, open: usize) -> DoubleSpan {
    let bytes = body.as_bytes();
    let mut saw_markup = false;
    let mut i = open + 1;

    // Markup between the outer and inner opening braces. Barriers and
    // unterminated markup here were already reported by the single pass,
    // so they pass through silently.
    while bytes.get(i) == Some(&b'<') {
        let Some(end) = markup_end(body, i) else {
            return DoubleSpan::Passthrough { end: body.len() };
        };
        if is_block_barrier(&body[i + 1..end - 1]) {
            return DoubleSpan::Passthrough { end };
        }
        saw_markup = true;
        i = end;
    }
    if bytes.get(i) != Some(&b'{') {
        return if saw_markup {
            DoubleSpan::Passthrough { end: i }
        } else {
            DoubleSpan::NotDouble
        };
    }
    i += 1;

    // Inner text. After the single pass a mergeable inner span is already
    // contiguous; residual markup is merged the same way, residual
    // structure problems were already warned about.
    let mut text = String::new();
    loop {
        let rest = &body[i..];
        let Some(off) = rest.find(['<', '{', '}']) else {
            return DoubleSpan::Passthrough { end: body.len() };
        };
        text.push_str(&rest[..off]);
        let pos = i + off;
        match bytes[pos] {
            b'<' => {
                let Some(end) = markup_end(body, pos) else {
                    return DoubleSpan::Passthrough { end: body.len() };
                };
                if is_block_barrier(&body[pos + 1..end - 1]) {
                    return DoubleSpan::Passthrough { end };
                }
                saw_markup = true;
                i = end;
            }
            b'{' => {
                // Nested opener inside a double span is malformed; leave
                // everything before it untouched and rescan there.
                return DoubleSpan::Passthrough { end: pos };
            }
            _ => {
                i = pos + 1;
                break;
            }
        }
    }

    // Markup between the inner and outer closing braces. This region was
    // never part of a single-pass span, so problems here are new.
    let mut trailing_markup = false;
    while bytes.get(i) == Some(&b'<') {
        let Some(end) = markup_end(body, i) else {
            return DoubleSpan::Broken { end: body.len() };
        };
        if is_block_barrier(&body[i + 1..end - 1]) {
            return DoubleSpan::Broken { end };
        }
        trailing_markup = true;
        i = end;
    }
    if bytes.get(i) == Some(&b'}') {
        let end = i + 1;
        if saw_markup || trailing_markup {
            DoubleSpan::Repaired { end, text }
        } else {
            DoubleSpan::Clean { end }
        }
    } else if saw_markup || trailing_markup {
        // `{<mk>{text}x`: the outer brace never closes as a double.
        DoubleSpan::Broken { end: i }
    } else {
        // `{{text}` followed by ordinary text: a literal brace before a
        // single token. Nothing to repair.
        DoubleSpan::Passthrough { end: i }
    }
}

/// Second pass: merge `{{…}}` tokens whose braces are separated by markup.
///
/// Runs over the output of [`merge_single`], because a double token whose
/// outer braces are split only becomes recognizable once its inner span has
/// been merged.
pub(crate) fn merge_double(body: &str, warnings: &mut Vec<RepairWarning>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        let Some(off) = rest.find(['{', '<']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..off]);
        let pos = i + off;
        if body.as_bytes()[pos] == b'<' {
            let end = markup_end(body, pos).unwrap_or(body.len());
            out.push_str(&body[pos..end]);
            i = end;
            continue;
        }
        match scan_double_span(body, pos) {
            DoubleSpan::NotDouble => {
                out.push('{');
                i = pos + 1;
            }
            DoubleSpan::Clean { end } | DoubleSpan::Passthrough { end } => {
                out.push_str(&body[pos..end]);
                i = end.max(pos + 1);
            }
            DoubleSpan::Repaired { end, text } => {
                out.push_str("{{");
                out.push_str(&text);
                out.push_str("}}");
                i = end;
            }
            DoubleSpan::Broken { end } => {
                warnings.push(RepairWarning {
                    offset: pos,
                    snippet: snippet_of(&body[pos..end.max(pos + 1)]),
                });
                out.push_str(&body[pos..end.max(pos + 1)]);
                i = end.max(pos + 1);
            }
        }
    }
    out
}

/// Counts the logical placeholder tokens in a body, treating markup as
/// invisible, so a split token and its repaired form count identically.
pub fn count_tokens(body: &str) -> usize {
    let mut visible = String::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        let Some(off) = rest.find('<') else {
            visible.push_str(rest);
            break;
        };
        visible.push_str(&rest[..off]);
        i = markup_end(body, i + off).unwrap_or(body.len());
    }

    let bytes = visible.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < visible.len() {
        let Some(off) = visible[i..].find('{') else {
            break;
        };
        let pos = i + off;
        if bytes.get(pos + 1) == Some(&b'{') {
            match visible[pos + 2..].find("}}") {
                Some(close) => {
                    count += 1;
                    i = pos + 2 + close + 2;
                }
                None => i = pos + 2,
            }
        } else {
            match visible[pos + 1..].find('}') {
                Some(close) => {
                    count += 1;
                    i = pos + 1 + close + 1;
                }
                None => i = pos + 1,
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair_once(body: &str) -> (String, Vec<RepairWarning>) {
        let mut warnings = Vec::new();
        let merged = merge_single(body, &mut warnings);
        let merged = merge_double(&merged, &mut warnings);
        (merged, warnings)
    }

    #[test]
    fn untouched_when_no_markup_inside() {
        let body = "<w:t>plain {trustName} text</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert!(warnings.is_empty());
    }

    #[test]
    fn merges_token_split_across_runs() {
        let body = "<w:t>{trust</w:t></w:r><w:r><w:t>Name}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, "<w:t>{trustName}</w:t>");
        assert!(warnings.is_empty());
    }

    #[test]
    fn merges_token_split_three_ways() {
        let body = "<w:t>{cli</w:t></w:r><w:r><w:t>ent.full</w:t></w:r><w:r><w:t>Name}</w:t>";
        let (out, _) = repair_once(body);
        assert!(out.contains("{client.fullName}"));
    }

    #[test]
    fn merges_double_token_with_inner_split() {
        let body = "<w:t>{{gran</w:t></w:r><w:r><w:t>tor}}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, "<w:t>{{grantor}}</w:t>");
        assert!(warnings.is_empty());
    }

    #[test]
    fn merges_double_token_with_split_outer_braces() {
        let body = "<w:t>{</w:t></w:r><w:r><w:t>{grantor}</w:t></w:r><w:r><w:t>}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, "<w:t>{{grantor}}</w:t>");
        assert!(warnings.is_empty());
    }

    #[test]
    fn contiguous_double_token_is_untouched() {
        let body = "<w:t>{{grantor}}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert!(warnings.is_empty());
    }

    #[test]
    fn refuses_to_merge_across_table_cell_boundary() {
        let body = "<w:t>{first</w:t></w:tc><w:tc><w:t>Name}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].offset, 5);
    }

    #[test]
    fn refuses_to_merge_across_paragraph_boundary() {
        let body = "<w:t>{half</w:t></w:p><w:p><w:t>Token}</w:t>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unterminated_split_token_warns() {
        let body = "<w:t>{dangling</w:t><w:r>";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert!(!warnings.is_empty());
    }

    #[test]
    fn stray_literal_brace_is_silent() {
        // No markup follows the brace, so nothing suggests a split token.
        let body = "<w:t>text</w:t> a lone { brace and nothing else";
        let (out, warnings) = repair_once(body);
        assert_eq!(out, body);
        assert!(warnings.is_empty());
    }

    #[test]
    fn surrounding_markup_is_never_rewritten() {
        let body = "<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>{a</w:t></w:r><w:r><w:t>b}</w:t></w:r></w:p>";
        let (out, _) = repair_once(body);
        assert!(out.starts_with("<w:p><w:r><w:rPr><w:b/></w:rPr>"));
        assert!(out.ends_with("</w:r></w:p>"));
        assert!(out.contains("{ab}"));
    }

    #[test]
    fn counts_tokens_through_markup() {
        assert_eq!(count_tokens("{a} {b}"), 2);
        assert_eq!(count_tokens("<w:t>{a</w:t><w:t>b}</w:t>"), 1);
        assert_eq!(count_tokens("{{x</w:t><w:t>y}} {z}"), 2);
        assert_eq!(count_tokens("no tokens here"), 0);
    }
}

//! Spacing normalization between adjacent placeholder tokens.
//!
//! The downstream tokenizer treats `}}{{` and `}{#` as one malformed token.
//! Authors who place a section close directly against the next open (common
//! when a loop ends where another begins on the same line) need a separating
//! space inserted, and only there: spacing inside ordinary prose, inside
//! markup, or around lone braces must not change.

use crate::scanner::markup_end;

/// Inserts a space between placeholder tokens that abut with no intervening
/// text. Two forms are rewritten:
///
/// * `}}{{` becomes `}} {{`, and
/// * `}{` followed by a control sigil (`#`, `/`, `^`) becomes `} {`.
///
/// Markup is copied verbatim. Idempotent.
pub fn normalize(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;

    while i < body.len() {
        let rest = &body[i..];
        let Some(off) = rest.find(['<', '}']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..off]);
        let pos = i + off;

        match bytes[pos] {
            b'<' => match markup_end(body, pos) {
                Some(end) => {
                    out.push_str(&body[pos..end]);
                    i = end;
                }
                None => {
                    out.push_str(&body[pos..]);
                    break;
                }
            },
            _ => {
                if rest[off..].starts_with("}}{{") {
                    out.push_str("}} {{");
                    i = pos + 4;
                } else if rest[off..].starts_with("}{")
                    && matches!(bytes.get(pos + 2), Some(b'#' | b'/' | b'^'))
                {
                    out.push_str("} {");
                    i = pos + 2;
                } else {
                    out.push('}');
                    i = pos + 1;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_abutting_double_tokens() {
        assert_eq!(
            normalize("{{/children}}{{#guardians}}"),
            "{{/children}} {{#guardians}}"
        );
    }

    #[test]
    fn separates_abutting_control_tokens() {
        assert_eq!(normalize("{/children}{#guardians}"), "{/children} {#guardians}");
        assert_eq!(normalize("{/a}{/b}"), "{/a} {/b}");
        assert_eq!(normalize("{/a}{^b}"), "{/a} {^b}");
    }

    #[test]
    fn leaves_plain_interpolations_alone() {
        // A close against an ordinary interpolation is valid as written.
        assert_eq!(normalize("{firstName}{lastName}"), "{firstName}{lastName}");
    }

    #[test]
    fn already_spaced_is_unchanged() {
        let body = "{/children} {#guardians} and {{a}} {{b}}";
        assert_eq!(normalize(body), body);
    }

    #[test]
    fn markup_between_tokens_is_untouched() {
        let body = "<w:t>{/a}</w:t><w:t>{#b}</w:t>";
        assert_eq!(normalize(body), body);
    }

    #[test]
    fn idempotent() {
        let once = normalize("{{/a}}{{#b}}{/c}{#d}");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn unterminated_markup_is_copied_verbatim() {
        let body = "text <w:t unfinished";
        assert_eq!(normalize(body), body);
    }
}

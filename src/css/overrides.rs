/// Removal of overridden custom-property declarations.
///
/// Within one declaration block, a custom property declared twice shadows its
/// earlier declarations: only the last write can ever take effect, so the
/// earlier ones are dead weight. This pass deletes them. Properties with any
/// `!important` declaration in the block are left completely untouched,
/// because importance changes which declaration wins.
use std::collections::HashSet;

use super::parser::{ParseError, parse_stylesheet};

/// Result of one override-removal pass.
#[derive(Debug, Clone)]
pub struct StripOutcome {
    /// The stylesheet text with shadowed declarations removed.
    pub output: String,
    /// Property names of the removed declarations, in source order.
    pub removed: Vec<String>,
}

/// Remove shadowed custom-property declarations from a stylesheet.
///
/// The output is the input text minus the removed declaration spans; nothing
/// else is reformatted.
///
/// # Errors
///
/// Returns [`ParseError`] when the stylesheet cannot be scanned.
pub fn remove_overridden_custom_properties(source: &str) -> Result<StripOutcome, ParseError> {
    let sheet = parse_stylesheet(source)?;

    // (start, end, property) of every declaration to delete.
    let mut doomed: Vec<(usize, usize, String)> = Vec::new();

    for block in &sheet.blocks {
        let important_props: HashSet<&str> = block
            .declarations
            .iter()
            .filter(|d| d.important)
            .map(|d| d.property.as_str())
            .collect();

        for (i, decl) in block.declarations.iter().enumerate() {
            if important_props.contains(decl.property.as_str()) {
                continue;
            }
            let shadowed = block.declarations[i + 1..]
                .iter()
                .any(|later| later.property == decl.property);
            if shadowed {
                doomed.push((decl.start, decl.end, decl.property.clone()));
            }
        }
    }

    doomed.sort_by_key(|(start, _, _)| *start);
    let removed = doomed.iter().map(|(_, _, p)| p.clone()).collect();
    let output = strip_spans(source, &doomed);

    Ok(StripOutcome { output, removed })
}

/// Rebuild `source` without the given spans, tidying surrounding whitespace:
/// a declaration that occupied its own line takes the whole line with it.
fn strip_spans(source: &str, spans: &[(usize, usize, String)]) -> String {
    let bytes = source.as_bytes();
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;

    for (start, end, _) in spans {
        let (start, end) = widen_span(bytes, *start, *end);
        if start < cursor {
            continue;
        }
        output.push_str(&source[cursor..start]);
        cursor = end;
    }
    output.push_str(&source[cursor..]);
    output
}

/// Extend a span over adjacent indentation, and over the trailing newline
/// when the declaration was alone on its line.
fn widen_span(bytes: &[u8], mut start: usize, end: usize) -> (usize, usize) {
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }
    let mut after = end;
    while after < bytes.len() && matches!(bytes[after], b' ' | b'\t') {
        after += 1;
    }
    let at_line_start = start == 0 || bytes[start - 1] == b'\n';
    if at_line_start && after < bytes.len() && bytes[after] == b'\n' {
        return (start, after + 1);
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_declaration_wins() {
        let css = ":root {\n  --ifm-color: red;\n  --ifm-color: blue;\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ":root {\n  --ifm-color: blue;\n}\n");
        assert_eq!(outcome.removed, vec!["--ifm-color"]);
    }

    #[test]
    fn test_three_declarations_keep_only_last() {
        let css = ".a { --x: 1; --x: 2; --x: 3; }";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ".a { --x: 3; }");
        assert_eq!(outcome.removed.len(), 2);
    }

    #[test]
    fn test_important_leaves_property_untouched() {
        let css = ".a {\n  --x: red !important;\n  --x: blue;\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, css);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn test_important_with_trailing_comment_still_exempts() {
        let css = ".a {\n  --x: red !important /* keep */;\n  --x: blue;\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, css);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn test_non_custom_properties_untouched() {
        let css = ".a { color: red; color: blue; }";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, css);
    }

    #[test]
    fn test_scopes_are_independent() {
        let css = ".a { --x: 1; }\n.b { --x: 2; }\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, css);
    }

    #[test]
    fn test_media_block_is_its_own_scope() {
        let css = ":root { --x: 1; }\n@media (max-width: 700px) {\n  :root { --x: 2; --x: 3; }\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(
            outcome.output,
            ":root { --x: 1; }\n@media (max-width: 700px) {\n  :root { --x: 3; }\n}\n"
        );
    }

    #[test]
    fn test_unrelated_properties_between_duplicates_survive() {
        let css = ".a {\n  --x: 1;\n  color: green;\n  --x: 2;\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ".a {\n  color: green;\n  --x: 2;\n}\n");
    }

    #[test]
    fn test_comments_are_preserved() {
        let css = ".a {\n  /* base */\n  --x: 1;\n  --x: 2; /* final */\n}\n";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ".a {\n  /* base */\n  --x: 2; /* final */\n}\n");
    }

    #[test]
    fn test_inline_removal_keeps_line() {
        let css = ".a { --x: 1; --x: 2; color: red; }";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ".a { --x: 2; color: red; }");
    }

    #[test]
    fn test_value_with_url_semicolon() {
        let css = ".a { --bg: url(data:image/png;base64,AA); --bg: none; }";
        let outcome = remove_overridden_custom_properties(css).unwrap();
        assert_eq!(outcome.output, ".a { --bg: none; }");
    }

    #[test]
    fn test_parse_error_propagates() {
        let result = remove_overridden_custom_properties(".a { --x: 1;");
        assert!(result.is_err());
    }

    #[test]
    fn test_idempotent() {
        let css = ".a { --x: 1; --x: 2; }";
        let once = remove_overridden_custom_properties(css).unwrap();
        let twice = remove_overridden_custom_properties(&once.output).unwrap();
        assert_eq!(once.output, twice.output);
        assert!(twice.removed.is_empty());
    }
}

/// Line-based Markdown rewrite adding explicit `{#id}` heading anchors.
///
/// Level-1 headings are left alone (page titles get their ids elsewhere);
/// levels 2-6 get an appended ` {#slug}` unless they already carry one.
/// Fenced code blocks are skipped. Explicit anchors are registered with the
/// slugger before any id is generated, so a generated id never collides with
/// an explicit one later in the file.
use super::slugger::Slugger;

/// Options for [`write_heading_ids`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingIdOptions {
    /// Keep the original casing in generated ids.
    pub maintain_case: bool,
    /// Recompute and replace existing explicit anchors.
    pub overwrite: bool,
}

/// A parsed ATX heading line.
struct Heading<'a> {
    /// Leading indentation (up to three spaces).
    indent: &'a str,
    /// The `#` marker run (2-6 for lines we touch).
    level: usize,
    /// Heading text without marker, closing hashes, or anchor.
    text: String,
    /// Explicit `{#id}` anchor, if present.
    anchor: Option<&'a str>,
}

/// Rewrite a Markdown document, returning the new text and the number of
/// headings that received a new or replaced anchor.
#[must_use]
pub fn write_heading_ids(content: &str, options: &HeadingIdOptions) -> (String, usize) {
    let mut slugger = Slugger::new();

    // First pass: reserve anchors that will survive the rewrite.
    if !options.overwrite {
        let mut in_fence = false;
        for line in content.lines() {
            if is_fence(line) {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }
            if let Some(heading) = parse_heading(line) {
                if let Some(anchor) = heading.anchor {
                    slugger.register(anchor);
                }
            }
        }
    }

    let mut output = String::with_capacity(content.len());
    let mut updated = 0;
    let mut in_fence = false;

    for line in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);

        if is_fence(body) {
            in_fence = !in_fence;
            output.push_str(line);
            continue;
        }
        if in_fence {
            output.push_str(line);
            continue;
        }

        match parse_heading(body) {
            Some(heading) if heading.anchor.is_none() || options.overwrite => {
                // Symbols-only headings have no usable slug; leave them as-is.
                let Some(slug) = slugger.slug(&heading.text, options.maintain_case) else {
                    output.push_str(line);
                    continue;
                };
                let markers = "#".repeat(heading.level);
                output.push_str(&format!(
                    "{}{markers} {} {{#{slug}}}{ending}",
                    heading.indent, heading.text
                ));
                updated += 1;
            }
            _ => output.push_str(line),
        }
    }

    (output, updated)
}

/// Whether a line opens or closes a fenced code block.
fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Parse an ATX heading of level 2-6, splitting off any trailing anchor and
/// closing `#` run.
fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let indent_len = line.len() - line.trim_start_matches(' ').len();
    if indent_len > 3 {
        return None;
    }
    let (indent, rest) = line.split_at(indent_len);

    let level = rest.bytes().take_while(|b| *b == b'#').count();
    if !(2..=6).contains(&level) {
        return None;
    }
    let after = &rest[level..];
    if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
        return None;
    }

    let (body, anchor) = split_anchor(after.trim());
    let text = strip_closing_hashes(body).to_owned();

    Some(Heading {
        indent,
        level,
        text,
        anchor,
    })
}

/// Split a trailing `{#id}` anchor off the heading text.
fn split_anchor(text: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = text.strip_suffix('}') {
        if let Some(open) = stripped.rfind("{#") {
            let id = &stripped[open + 2..];
            if !id.is_empty() && !id.contains(['{', '}']) {
                return (text[..open].trim_end(), Some(id));
            }
        }
    }
    (text, None)
}

/// Strip an optional closing `###` run (`## Title ##` style).
fn strip_closing_hashes(text: &str) -> &str {
    let trimmed = text.trim_end();
    let without = trimmed.trim_end_matches('#');
    if without.len() < trimmed.len() && without.ends_with(' ') {
        without.trim_end()
    } else {
        trimmed
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

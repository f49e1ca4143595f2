/// Minimal span-recording CSS scanner.
///
/// Walks a stylesheet once and records every custom-property declaration
/// (`--name: value`) together with its byte span and enclosing declaration
/// block. Selectors, at-rule preludes, non-custom declarations, and comments
/// are scanned only far enough to keep brace/semicolon bookkeeping correct;
/// the source text itself is never rewritten here.
///
/// Structure the scanner understands:
/// - comments `/* ... */` (treated as whitespace between items)
/// - single- and double-quoted strings (delimiters inside are ignored)
/// - parentheses (a `;` inside `url(...)` does not end a declaration)
/// - nested blocks (`@media { .a { ... } }`), arbitrarily deep

/// A parse failure with its 1-indexed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-indexed line of the failure.
    pub line: usize,
    /// What went wrong.
    pub reason: String,
}

/// A custom-property declaration inside one declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name including the leading `--`.
    pub property: String,
    /// Whether the value carries an `!important` flag.
    pub important: bool,
    /// Byte offset of the first character of the property name.
    pub start: usize,
    /// Byte offset just past the terminating `;` (or past the last value
    /// byte when the block ends without one).
    pub end: usize,
}

/// The custom-property declarations of one `{ ... }` block, in source order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationBlock {
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// All declaration blocks of a stylesheet, in closing order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// One entry per `{ ... }` block that contained at least one declaration.
    pub blocks: Vec<DeclarationBlock>,
}

/// Scan a stylesheet and collect custom-property declarations per block.
///
/// # Errors
///
/// Returns [`ParseError`] on unbalanced braces or an unterminated comment or
/// string.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, ParseError> {
    let bytes = source.as_bytes();
    let len = bytes.len();

    let mut sheet = Stylesheet::default();
    // Stack of open blocks; declarations attach to the innermost.
    let mut stack: Vec<DeclarationBlock> = Vec::new();
    // Start of the current item (prelude or declaration), if any.
    let mut seg_start: Option<usize> = None;
    let mut paren_depth: usize = 0;
    let mut i = 0;

    while i < len {
        let b = bytes[i];
        match b {
            b'/' if i + 1 < len && bytes[i + 1] == b'*' => {
                let close = find_comment_end(source, i + 2)
                    .ok_or_else(|| err_at(source, i, "unterminated comment"))?;
                i = close;
            }
            b'"' | b'\'' => {
                if seg_start.is_none() {
                    seg_start = Some(i);
                }
                let close = find_string_end(bytes, i + 1, b)
                    .ok_or_else(|| err_at(source, i, "unterminated string"))?;
                i = close;
            }
            b'(' => {
                if seg_start.is_none() {
                    seg_start = Some(i);
                }
                paren_depth += 1;
                i += 1;
            }
            b')' => {
                paren_depth = paren_depth.saturating_sub(1);
                i += 1;
            }
            b'{' if paren_depth == 0 => {
                // The pending segment was this block's prelude.
                stack.push(DeclarationBlock::default());
                seg_start = None;
                i += 1;
            }
            b'}' if paren_depth == 0 => {
                let mut block = stack
                    .pop()
                    .ok_or_else(|| err_at(source, i, "unmatched '}'"))?;
                if let Some(start) = seg_start.take() {
                    // Final declaration not terminated by ';'.
                    push_declaration(&mut block, source, start, i);
                }
                if !block.declarations.is_empty() {
                    sheet.blocks.push(block);
                }
                i += 1;
            }
            b';' if paren_depth == 0 => {
                if let Some(start) = seg_start.take() {
                    match stack.last_mut() {
                        // Include the ';' in the span.
                        Some(block) => push_declaration(block, source, start, i + 1),
                        // Top-level at-statement (@import, @charset): not a
                        // declaration, nothing to record.
                        None => {}
                    }
                }
                i += 1;
            }
            _ => {
                if seg_start.is_none() && !b.is_ascii_whitespace() {
                    seg_start = Some(i);
                }
                i += 1;
            }
        }
    }

    if !stack.is_empty() {
        return Err(err_at(source, len, "unterminated block"));
    }
    Ok(sheet)
}

/// Parse the segment `[start, end)` as a declaration and record it if it is a
/// custom property. `end` already includes the `;` when there was one.
fn push_declaration(block: &mut DeclarationBlock, source: &str, start: usize, end: usize) {
    let stop = if source.as_bytes().get(end.wrapping_sub(1)) == Some(&b';') {
        end - 1
    } else {
        end
    };
    let Some(text) = source.get(start..stop) else {
        return;
    };
    let Some((property, value)) = text.split_once(':') else {
        return;
    };
    let property = property.trim();
    if !property.starts_with("--") {
        return;
    }
    block.declarations.push(Declaration {
        property: property.to_owned(),
        important: has_important_flag(value),
        start,
        end,
    });
}

/// Whether a declaration value ends in `!important` (whitespace-tolerant,
/// case-insensitive). Trailing comments do not hide the flag.
fn has_important_flag(value: &str) -> bool {
    let trimmed = strip_trailing_comments(value);
    let Some(cut) = trimmed.len().checked_sub("important".len()) else {
        return false;
    };
    if !trimmed.is_char_boundary(cut) {
        return false;
    }
    let (head, tail) = trimmed.split_at(cut);
    tail.eq_ignore_ascii_case("important") && head.trim_end().ends_with('!')
}

/// Drop any run of trailing `/* ... */` comments and the whitespace around
/// them.
fn strip_trailing_comments(value: &str) -> &str {
    let mut rest = value.trim_end();
    while let Some(head) = rest.strip_suffix("*/") {
        match head.rfind("/*") {
            Some(open) => rest = head[..open].trim_end(),
            None => break,
        }
    }
    rest
}

/// Find the index just past a `*/` starting the search at `from`.
fn find_comment_end(source: &str, from: usize) -> Option<usize> {
    source.get(from..)?.find("*/").map(|off| from + off + 2)
}

/// Find the index just past the closing quote, honoring `\` escapes.
fn find_string_end(bytes: &[u8], mut i: usize, quote: u8) -> Option<usize> {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            b'\n' => return None,
            _ => i += 1,
        }
    }
    None
}

fn err_at(source: &str, pos: usize, reason: &str) -> ParseError {
    let line = source
        .get(..pos)
        .map_or(1, |head| head.bytes().filter(|b| *b == b'\n').count() + 1);
    ParseError {
        line,
        reason: reason.to_owned(),
    }
}

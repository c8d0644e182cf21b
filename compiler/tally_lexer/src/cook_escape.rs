//! Escape processing for string literals.
//!
//! Valid escapes: `\"` `\\` `\n` `\t`.

use crate::lex_error::LexError;
use crate::Span;

/// Unescape a string literal's content (between the `"`s).
///
/// `base_offset` is the source offset of the first content byte, used to
/// locate a bad escape.
pub(crate) fn unescape_string(content: &str, base_offset: u32) -> Result<String, LexError> {
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let esc_start = base_offset + i as u32;
        match chars.next() {
            Some((_, '"')) => result.push('"'),
            Some((_, '\\')) => result.push('\\'),
            Some((_, 'n')) => result.push('\n'),
            Some((_, 't')) => result.push('\t'),
            Some((j, esc)) => {
                let esc_end = base_offset + (j + esc.len_utf8()) as u32;
                return Err(LexError::invalid_string_escape(
                    Span::new(esc_start, esc_end),
                    esc,
                ));
            }
            None => {
                return Err(LexError::invalid_string_escape(
                    Span::new(esc_start, esc_start + 1),
                    '\\',
                ));
            }
        }
    }

    Ok(result)
}

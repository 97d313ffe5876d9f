//! Escaping and rendering of the character dispatch body.
//!
//! The dispatch body is a C# `switch` expression with one arm per optimized
//! character and a trailing discard arm that falls back to `value.ToString()`:
//!
//! ```text
//! => value switch
//! {
//!     '0' => "0",
//!     '\'' => "'",
//!     '"' => "\"",
//!     '\\' => "\\",
//!     _ => value.ToString()
//! };
//! ```
//!
//! Arms are written in the order the characters were configured. Dispatch is by
//! equality, so the order only matters for reproducible output.
//!
//! ## Escaping
//!
//! | Character | Char literal | String literal |
//! |-----------|--------------|----------------|
//! | `'` | `'\''` | `"'"` |
//! | `"` | `'"'` | `"\""` |
//! | `\` | `'\\'` | `"\\"` |
//! | control, U+0085, U+2028, U+2029 | `'\uXXXX'` | `"\uXXXX"` |
//! | anything else | verbatim | verbatim |

use std::fmt::Write;

/// Fallback expression for characters without an arm.
pub const FALLBACK: &str = "value.ToString()";

/// Returns `true` when `ch` has to be written as a `\uXXXX` escape.
///
/// C# treats these as line terminators or invisible control input inside a
/// literal, so writing them verbatim would not produce valid source.
#[inline]
fn needs_unicode_escape(ch: char) -> bool {
    ch.is_control() || matches!(ch, '\u{0085}' | '\u{2028}' | '\u{2029}')
}

#[inline]
fn push_unicode_escape(output: &mut String, ch: char) {
    // writing into a String cannot fail
    let _ = write!(output, "\\u{:04X}", ch as u32);
}

/// Writes `ch` as a C# character literal, quotes included.
pub fn write_char_literal(output: &mut String, ch: char) {
    output.push('\'');
    match ch {
        '\'' => output.push_str("\\'"),
        '\\' => output.push_str("\\\\"),
        c if needs_unicode_escape(c) => push_unicode_escape(output, c),
        c => output.push(c),
    }
    output.push('\'');
}

/// Writes `ch` as a one-character C# string literal, quotes included.
pub fn write_string_literal(output: &mut String, ch: char) {
    output.push('"');
    match ch {
        '"' => output.push_str("\\\""),
        '\\' => output.push_str("\\\\"),
        c if needs_unicode_escape(c) => push_unicode_escape(output, c),
        c => output.push(c),
    }
    output.push('"');
}

/// Renders a single dispatch arm, `'c' => "c"`, without indentation or the
/// trailing comma.
///
/// # Examples
///
/// ```rust
/// use char_generators::render::render_arm;
///
/// assert_eq!(render_arm('a'), r#"'a' => "a""#);
/// assert_eq!(render_arm('\''), r#"'\'' => "'""#);
/// assert_eq!(render_arm('"'), r#"'"' => "\"""#);
/// assert_eq!(render_arm('\\'), r#"'\\' => "\\""#);
/// ```
#[must_use]
pub fn render_arm(ch: char) -> String {
    let mut output = String::with_capacity(16);
    write_arm(&mut output, ch);
    output
}

fn write_arm(output: &mut String, ch: char) {
    write_char_literal(output, ch);
    output.push_str(" => ");
    write_string_literal(output, ch);
}

/// Writes the dispatch body at `indent`, one line per arm.
///
/// The first line (`=> value switch`) starts at `indent`; arms sit one `step`
/// deeper. Every line, including the last, ends with `\n`.
pub fn write_dispatch_body(output: &mut String, characters: &[char], indent: &str, step: &str) {
    let arm_indent = format!("{}{}", indent, step);

    output.push_str(indent);
    output.push_str("=> value switch\n");
    output.push_str(indent);
    output.push_str("{\n");
    for &ch in characters {
        output.push_str(&arm_indent);
        write_arm(output, ch);
        output.push_str(",\n");
    }
    output.push_str(&arm_indent);
    output.push_str("_ => ");
    output.push_str(FALLBACK);
    output.push('\n');
    output.push_str(indent);
    output.push_str("};\n");
}

/// Renders the dispatch body for `characters` with 4-space arm indentation and
/// no leading indentation.
///
/// Pure and deterministic: equal inputs give byte-identical output.
///
/// # Examples
///
/// ```rust
/// use char_generators::render_dispatch_body;
///
/// let body = render_dispatch_body(&['0', '1']);
/// assert_eq!(
///     body,
///     "=> value switch\n{\n    '0' => \"0\",\n    '1' => \"1\",\n    _ => value.ToString()\n};\n"
/// );
/// ```
#[must_use]
pub fn render_dispatch_body(characters: &[char]) -> String {
    // ~16 bytes per arm plus the switch scaffolding
    let mut output = String::with_capacity(64 + characters.len() * 16);
    write_dispatch_body(&mut output, characters, "", "    ");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_arm() {
        assert_eq!(render_arm('Z'), "'Z' => \"Z\"");
        assert_eq!(render_arm(' '), "' ' => \" \"");
    }

    #[test]
    fn test_apostrophe_escaped_only_in_char_literal() {
        assert_eq!(render_arm('\''), "'\\'' => \"'\"");
    }

    #[test]
    fn test_quote_escaped_only_in_string_literal() {
        assert_eq!(render_arm('"'), "'\"' => \"\\\"\"");
    }

    #[test]
    fn test_backslash_escaped_in_both() {
        assert_eq!(render_arm('\\'), "'\\\\' => \"\\\\\"");
    }

    #[test]
    fn test_control_characters_use_unicode_escapes() {
        assert_eq!(render_arm('\n'), "'\\u000A' => \"\\u000A\"");
        assert_eq!(render_arm('\u{2028}'), "'\\u2028' => \"\\u2028\"");
        assert_eq!(render_arm('\0'), "'\\u0000' => \"\\u0000\"");
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        assert_eq!(render_arm('é'), "'é' => \"é\"");
    }

    #[test]
    fn test_empty_body_has_only_fallback() {
        assert_eq!(
            render_dispatch_body(&[]),
            "=> value switch\n{\n    _ => value.ToString()\n};\n"
        );
    }

    #[test]
    fn test_arm_order_follows_input() {
        let body = render_dispatch_body(&['b', 'a']);
        let b = body.find("'b'").unwrap();
        let a = body.find("'a'").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_indented_body() {
        let mut output = String::new();
        write_dispatch_body(&mut output, &['x'], "  ", "  ");
        assert_eq!(
            output,
            "  => value switch\n  {\n    'x' => \"x\",\n    _ => value.ToString()\n  };\n"
        );
    }
}

//! Shared helpers: re-parse emitted C# literals and simulate the dispatch body.

#![allow(dead_code)]

/// Decodes the body of a C# char or string literal (quotes stripped).
fn unescape(body: &str, quote: char) -> Option<String> {
    let mut out = String::new();
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let escaped = match chars.next()? {
                    '\'' => '\'',
                    '"' => '"',
                    '\\' => '\\',
                    '0' => '\0',
                    'a' => '\u{0007}',
                    'b' => '\u{0008}',
                    'f' => '\u{000C}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{000B}',
                    'u' => {
                        let hex: String = chars.by_ref().take(4).collect();
                        if hex.len() != 4 {
                            return None;
                        }
                        char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
                    }
                    _ => return None,
                };
                out.push(escaped);
            }
            c if c == quote => return None,
            '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

/// Parses a complete C# char literal such as `'\''`.
pub fn parse_char_literal(literal: &str) -> Option<char> {
    let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let decoded = unescape(body, '\'')?;
    let mut chars = decoded.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(ch)
}

/// Parses a complete C# regular string literal such as `"\\"`.
pub fn parse_string_literal(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    unescape(body, '"')
}

/// The arms of a rendered `switch` expression.
#[derive(Debug, Default)]
pub struct DispatchTable {
    pub arms: Vec<(char, String)>,
    pub has_fallback: bool,
}

impl DispatchTable {
    /// Simulates `value switch { ... }` for `value`.
    pub fn evaluate(&self, value: char) -> String {
        self.arms
            .iter()
            .find(|(c, _)| *c == value)
            .map(|(_, s)| s.clone())
            .unwrap_or_else(|| {
                assert!(self.has_fallback, "no arm and no fallback for {:?}", value);
                // value.ToString()
                value.to_string()
            })
    }

    pub fn arms_for(&self, value: char) -> usize {
        self.arms.iter().filter(|(c, _)| *c == value).count()
    }
}

/// Splits one arm line (`'c' => "c",`) into its decoded parts.
fn parse_arm(line: &str) -> Option<(char, String)> {
    let rest = line.strip_suffix(',')?;
    let char_len = if rest.starts_with("'\\u") {
        8
    } else if rest.starts_with("'\\") {
        4
    } else {
        3
    };
    let split = rest.char_indices().nth(char_len).map(|(i, _)| i)?;
    let (char_literal, tail) = rest.split_at(split);
    let string_literal = tail.strip_prefix(" => ")?;
    Some((
        parse_char_literal(char_literal)?,
        parse_string_literal(string_literal)?,
    ))
}

/// Extracts every arm from rendered source, panicking on anything malformed
/// between the `{` of the switch and its closing `};`.
pub fn parse_dispatch(source: &str) -> DispatchTable {
    let mut table = DispatchTable::default();
    let mut inside = false;
    for line in source.lines() {
        let trimmed = line.trim_start_matches(' ');
        if trimmed == "=> value switch" {
            inside = true;
            continue;
        }
        if !inside || trimmed == "{" {
            continue;
        }
        if trimmed == "};" {
            break;
        }
        if trimmed == "_ => value.ToString()" {
            table.has_fallback = true;
            continue;
        }
        let arm = parse_arm(trimmed).unwrap_or_else(|| panic!("malformed arm: {:?}", trimmed));
        table.arms.push(arm);
    }
    table
}

/// Strips the header and returns the remaining lines.
pub fn body_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .skip_while(|l| *l != "#nullable enable")
        .skip(1)
        .collect()
}

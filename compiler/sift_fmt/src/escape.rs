//! String escaping for JSON output.

use std::fmt::Write;

/// How string payloads are escaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapeStyle {
    /// Strict JSON: output always parses as JSON.
    #[default]
    Json,
    /// C-style table: adds `\v` and `\'`, and writes other control bytes
    /// and DEL as `\xHH`. Not valid JSON when those occur.
    Classic,
}

impl EscapeStyle {
    pub fn escape(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.escape_into(text, &mut out);
        out
    }

    pub fn escape_into(self, text: &str, out: &mut String) {
        for c in text.chars() {
            match (self, c) {
                (_, '\u{8}') => out.push_str("\\b"),
                (_, '\t') => out.push_str("\\t"),
                (_, '\n') => out.push_str("\\n"),
                (_, '\u{c}') => out.push_str("\\f"),
                (_, '\r') => out.push_str("\\r"),
                (_, '"') => out.push_str("\\\""),
                (_, '\\') => out.push_str("\\\\"),
                (EscapeStyle::Classic, '\u{b}') => out.push_str("\\v"),
                (EscapeStyle::Classic, '\'') => out.push_str("\\'"),
                (EscapeStyle::Classic, c) if c < ' ' || c == '\u{7f}' => {
                    let _ = write!(out, "\\x{:02X}", u32::from(c));
                }
                (EscapeStyle::Json, c) if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", u32::from(c));
                }
                (_, c) => out.push(c),
            }
        }
    }
}

//! Python-style string literals for rendering `Str` values

use std::fmt::{self, Write};

/// Python `str()` rendering of a [`Key`](super::Key) or [`Value`](super::Value):
/// text without quotes, anything else as its repr
///
/// Created by [`Key::plain`](super::Key::plain) and [`Value::plain`](super::Value::plain).
pub struct Plain<'a, T>(pub(super) &'a T);

/// Writes `s` as a quoted literal: single quotes unless the text contains a
/// single quote and no double quote
pub(crate) fn write_str_literal<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(out, "\\x{:02x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

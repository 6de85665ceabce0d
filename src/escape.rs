//! Character escaping for the macro consumer.
//!
//! Every character that lands in the output goes through [`escape`]. Characters
//! that are structurally significant to TeX become marker macros, printable
//! ASCII passes through, and everything else is wrapped in `\wrp{}` so the
//! consumer can apply its own font or encoding handling.
//!
//! Argumentless control words are always followed by a single space. TeX
//! discards that space while tokenizing, so a marker can be followed by a
//! letter without the two running together.

use std::borrow::Cow;

/// Where the escaped text will end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Natural-language text typeset in the document body.
    #[default]
    Text,
    /// Raw data (number patterns, identifiers) that must survive verbatim.
    Data,
}

/// Escape a single character for the given context.
pub fn escape(c: char, context: Context) -> Cow<'static, str> {
    let text = context == Context::Text;
    let marker = match c {
        '\\' => "\\bks ",
        '{' => "\\lbr ",
        '}' => "\\rbr ",
        '#' if text => "\\#",
        '#' => "\\hsh ",
        '_' if text => "\\_",
        '\'' if text => "\\csq ",
        '\'' => "\\apo ",
        '`' if text => "\\grv ",
        '"' if text => "\\dqt ",
        ' ' if text => "\\spc ",
        ' ' => "\\lspc ",
        ' '..='~' => return Cow::Owned(c.to_string()),
        _ => return Cow::Owned(format!("\\wrp{{{}}}", c)),
    };
    Cow::Borrowed(marker)
}

/// Escape every character of `s` for the given context.
pub fn escape_str(s: &str, context: Context) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        result.push_str(&escape(c, context));
    }
    result
}

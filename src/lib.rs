//! patfmt - locale layout patterns as TeX macro token streams
//!
//! This crate translates date/time patterns (`dd-MMM-yyyy`) and decimal
//! patterns (`#,##0.00;(#,##0.00)`) into macro calls that a TeX document can
//! expand against its own values, plus small helpers for shaping other
//! host-supplied values for TeX.

pub mod ast;
pub mod error;
pub mod escape;
pub mod options;
pub mod output;

mod cache;
pub mod parser;
mod translator;

pub use ast::{
    DigitKind, MacroToken, Marker, MarkerPosition, NumberTranslation, TokenStream, Translation,
};
pub use error::PatternError;
pub use escape::{escape, escape_str, Context};
pub use options::{PatternKind, TranslateOptions, DEFAULT_DIGIT_BUDGET};
pub use translator::{
    render_digit_tokens, render_digits, translate, translate_date_pattern,
    translate_number_pattern, translate_number_pattern_with, Padding, FIELD_LETTERS,
};

/// Translate a date/time pattern to TeX text, using the translation cache.
pub fn date_pattern(pattern: &str) -> String {
    cache::get_or_translate(PatternKind::DateTime, pattern, &TranslateOptions::default())
}

/// Translate a number pattern to TeX text, using the translation cache.
pub fn number_pattern(pattern: &str) -> String {
    cache::get_or_translate(PatternKind::Number, pattern, &TranslateOptions::default())
}

/// Translate a pattern of either kind to TeX text with explicit options,
/// using the translation cache.
pub fn pattern_with(kind: PatternKind, pattern: &str, options: &TranslateOptions) -> String {
    cache::get_or_translate(kind, pattern, options)
}

//! Pattern translation engine

mod date;
mod digits;
mod number;

pub use date::{translate_date_pattern, FIELD_LETTERS};
pub use digits::{render_digit_tokens, render_digits, Padding};
pub use number::{translate_number_pattern, translate_number_pattern_with};

use crate::ast::{MacroToken, TokenStream, Translation};
use crate::error::PatternError;
use crate::escape::{escape, escape_str, Context};
use crate::options::{PatternKind, TranslateOptions};
use crate::parser::tokens::{SpannedToken, Token};

/// Translate a pattern of the given kind.
///
/// A missing pattern is not an error for the caller: the result is an empty
/// translation carrying a [`PatternError::MissingPattern`] diagnostic.
/// Number patterns render as the `{positive}{negative}` pair.
pub fn translate(
    kind: PatternKind,
    pattern: Option<&str>,
    options: &TranslateOptions,
) -> Translation {
    let Some(pattern) = pattern else {
        tracing::warn!(?kind, "no pattern supplied, emitting nothing");
        return Translation::new(TokenStream::new(), vec![PatternError::MissingPattern]);
    };

    match kind {
        PatternKind::DateTime => translate_date_pattern(pattern),
        PatternKind::Number => translate_number_pattern_with(pattern, options).into(),
    }
}

/// Render a non-digit number-pattern token as data.
pub(crate) fn render_literal_token(out: &mut TokenStream, token: &Token) {
    match token {
        Token::Minus => out.push(MacroToken::Minus),
        Token::Apostrophe => out.push(MacroToken::Apostrophe),
        Token::QuotedString(content) => {
            let mut inner = TokenStream::new();
            inner.push_literal(&escape_str(content, Context::Data));
            out.push(MacroToken::Str(inner));
        }
        Token::InternationalCurrency => {
            let sign = escape('\u{00a4}', Context::Data);
            out.push_literal(&sign);
            out.push_literal(&sign);
        }
        other => {
            if let Some(c) = other.as_char() {
                out.push_literal(&escape(c, Context::Data));
            }
        }
    }
}

/// Render the literal side of a currency or percent sub-pattern.
pub(crate) fn render_literal(tokens: &[SpannedToken]) -> TokenStream {
    let mut out = TokenStream::new();
    for spanned in tokens {
        render_literal_token(&mut out, &spanned.token);
    }
    out
}

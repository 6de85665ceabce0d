//! Structural parsing of number patterns.
//!
//! A number pattern is lexed once and then cut into pieces by token index:
//! first into positive/negative sub-patterns at `;`, then around a currency or
//! percent marker, then at `E` and `.`. Quoted text is a single token, so none
//! of these splits can land inside a literal.

pub mod lexer;
pub mod tokens;

use crate::ast::Marker;
use crate::error::PatternError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// A number pattern split into its sub-patterns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPatterns {
    pub positive: Vec<SpannedToken>,
    pub negative: Option<Vec<SpannedToken>>,
    pub diagnostics: Vec<PatternError>,
}

/// Lex a number pattern and split it into positive and negative sub-patterns.
///
/// Only the first unquoted `;` is honoured. Any further separator is reported
/// as [`PatternError::ExtraSectionSeparator`] and the text after it dropped.
pub fn parse(pattern: &str) -> SubPatterns {
    let mut lexer = Lexer::new(pattern);
    let mut sections: Vec<Vec<SpannedToken>> = vec![Vec::new()];
    let mut diagnostics = Vec::new();

    loop {
        let spanned = lexer.next_token();
        match spanned.token {
            Token::Eof => break,
            Token::SectionSep if sections.len() < 2 => sections.push(Vec::new()),
            Token::SectionSep => {
                tracing::warn!(
                    pattern = lexer.source(),
                    position = spanned.start,
                    "ignoring extra sub-pattern separator"
                );
                diagnostics.push(PatternError::ExtraSectionSeparator {
                    position: spanned.start,
                });
                sections.push(Vec::new());
            }
            _ => {
                if let Some(section) = sections.last_mut() {
                    section.push(spanned);
                }
            }
        }
    }

    if let Some(position) = lexer.unterminated_quote() {
        tracing::warn!(
            pattern = lexer.source(),
            position,
            "unterminated quoted literal"
        );
        diagnostics.push(PatternError::UnterminatedQuote { position });
    }

    let mut sections = sections.into_iter();
    let positive = sections.next().unwrap_or_default();
    let negative = sections.next();

    SubPatterns {
        positive,
        negative,
        diagnostics,
    }
}

/// Find the marker that classifies a sub-pattern.
///
/// A currency sign anywhere wins over percent or per-mille signs; otherwise
/// the first percent or per-mille sign is used.
pub fn find_marker(tokens: &[SpannedToken]) -> Option<(usize, Marker)> {
    let currency = tokens.iter().enumerate().find_map(|(i, t)| match t.token {
        Token::Currency => Some((i, Marker::Currency)),
        Token::InternationalCurrency => Some((i, Marker::InternationalCurrency)),
        _ => None,
    });

    currency.or_else(|| {
        tokens.iter().enumerate().find_map(|(i, t)| match t.token {
            Token::Percent => Some((i, Marker::Percent)),
            Token::PerMille => Some((i, Marker::PerMille)),
            _ => None,
        })
    })
}

/// Split around the first token equal to `separator`, dropping the separator.
pub fn split_once<'t>(
    tokens: &'t [SpannedToken],
    separator: &Token,
) -> Option<(&'t [SpannedToken], &'t [SpannedToken])> {
    let index = tokens.iter().position(|t| &t.token == separator)?;
    Some((&tokens[..index], &tokens[index + 1..]))
}

/// Index of the exponent marker, the first `E` that follows a placeholder.
///
/// An `E` before any placeholder is affix text (`EUR 0`), not an exponent.
pub fn find_exponent(tokens: &[SpannedToken]) -> Option<usize> {
    let first_digit = tokens.iter().position(|t| t.token.is_digit())?;
    tokens[first_digit..]
        .iter()
        .position(|t| t.token == Token::Exponent)
        .map(|offset| first_digit + offset)
}

/// Returns true if any `0` or `#` placeholder is present.
pub fn has_digits(tokens: &[SpannedToken]) -> bool {
    tokens.iter().any(|t| t.token.is_digit())
}

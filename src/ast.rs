//! Output types for translated patterns.
//!
//! A translation is a flat [`TokenStream`] of macro tokens. A few tokens wrap
//! nested streams (`\str{}`, `\decfmt{}{}`, the currency and percent
//! wrappers), so the stream is a shallow tree. Rendering with `Display` gives
//! the TeX text handed to the macro consumer.

use std::fmt;

use crate::error::PatternError;

/// Digit placeholder class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitKind {
    /// `0` - always show the digit (`\dgt`)
    Mandatory,
    /// `#` - show unless a redundant leading/trailing zero (`\dgtnz`)
    Optional,
}

/// Marker that turns a number into a currency or percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `¤` - local currency symbol
    Currency,
    /// `¤¤` - international (ISO 4217) currency code
    InternationalCurrency,
    /// `%`
    Percent,
    /// `‰`
    PerMille,
}

/// Which side of the number the marker's symbol is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPosition {
    /// Symbol before the number (`¤#,##0`)
    Prefix,
    /// Symbol after the number (`#,##0 ¤`)
    Suffix,
}

/// A single macro token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroToken {
    /// Already-escaped literal text
    Literal(String),
    /// `\dtf{len}{letter}` - date/time field run
    Field { len: usize, letter: char },
    /// `\str{...}` - quoted literal span
    Str(TokenStream),
    /// `\apo` - literal apostrophe from a doubled quote
    Apostrophe,
    /// `\dgt` or `\dgtnz`
    Digit(DigitKind),
    /// `\ngp` - grouping separator
    GroupSeparator,
    /// `\msg` - minus sign
    Minus,
    /// `\decfmt{integer}{fraction}`
    Decimal {
        integer: TokenStream,
        fraction: TokenStream,
    },
    /// `\sinumfmt{mantissa}{exponent}`
    Scientific {
        mantissa: TokenStream,
        exponent: TokenStream,
    },
    /// Currency, percent or per-mille wrapper around a number.
    ///
    /// Prefix forms render `\pcur{literal}{number}`, suffix forms render
    /// `\scur{number}{literal}`.
    Affixed {
        marker: Marker,
        position: MarkerPosition,
        number: TokenStream,
        literal: TokenStream,
    },
    /// `{...}` - plain group, used for the positive/negative pair
    Group(TokenStream),
}

impl MacroToken {
    /// Control-word name of an affix wrapper.
    pub fn affix_macro(marker: Marker, position: MarkerPosition) -> &'static str {
        match (marker, position) {
            (Marker::Currency, MarkerPosition::Prefix) => "pcur",
            (Marker::Currency, MarkerPosition::Suffix) => "scur",
            (Marker::InternationalCurrency, MarkerPosition::Prefix) => "picur",
            (Marker::InternationalCurrency, MarkerPosition::Suffix) => "sicur",
            (Marker::Percent, MarkerPosition::Prefix) => "ppct",
            (Marker::Percent, MarkerPosition::Suffix) => "spct",
            (Marker::PerMille, MarkerPosition::Prefix) => "ppml",
            (Marker::PerMille, MarkerPosition::Suffix) => "spml",
        }
    }

    /// Nested streams held by this token, in rendering order.
    fn children(&self) -> Vec<&TokenStream> {
        match self {
            MacroToken::Str(inner) | MacroToken::Group(inner) => vec![inner],
            MacroToken::Decimal { integer, fraction } => vec![integer, fraction],
            MacroToken::Scientific { mantissa, exponent } => vec![mantissa, exponent],
            MacroToken::Affixed {
                position: MarkerPosition::Prefix,
                number,
                literal,
                ..
            } => vec![literal, number],
            MacroToken::Affixed { number, literal, .. } => vec![number, literal],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for MacroToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroToken::Literal(s) => f.write_str(s),
            MacroToken::Field { len, letter } => write!(f, "\\dtf{{{}}}{{{}}}", len, letter),
            MacroToken::Str(inner) => write!(f, "\\str{{{}}}", inner),
            MacroToken::Apostrophe => f.write_str("\\apo "),
            MacroToken::Digit(DigitKind::Mandatory) => f.write_str("\\dgt "),
            MacroToken::Digit(DigitKind::Optional) => f.write_str("\\dgtnz "),
            MacroToken::GroupSeparator => f.write_str("\\ngp "),
            MacroToken::Minus => f.write_str("\\msg "),
            MacroToken::Decimal { integer, fraction } => {
                write!(f, "\\decfmt{{{}}}{{{}}}", integer, fraction)
            }
            MacroToken::Scientific { mantissa, exponent } => {
                write!(f, "\\sinumfmt{{{}}}{{{}}}", mantissa, exponent)
            }
            MacroToken::Affixed {
                marker, position, ..
            } => {
                f.write_str("\\")?;
                f.write_str(MacroToken::affix_macro(*marker, *position))?;
                for child in self.children() {
                    write!(f, "{{{}}}", child)?;
                }
                Ok(())
            }
            MacroToken::Group(inner) => write!(f, "{{{}}}", inner),
        }
    }
}

/// An ordered sequence of macro tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<MacroToken>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn push(&mut self, token: MacroToken) {
        self.tokens.push(token);
    }

    /// Append escaped literal text, merging with a trailing literal.
    pub fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(MacroToken::Literal(last)) = self.tokens.last_mut() {
            last.push_str(text);
        } else {
            self.tokens.push(MacroToken::Literal(text.to_string()));
        }
    }

    pub fn tokens(&self) -> &[MacroToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MacroToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Visit every token depth-first, including tokens inside wrappers.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&MacroToken),
    {
        for token in &self.tokens {
            visit(token);
            for child in token.children() {
                child.walk(visit);
            }
        }
    }

    /// Date/time field runs at the top level, as `(len, letter)` pairs.
    pub fn fields(&self) -> Vec<(usize, char)> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                MacroToken::Field { len, letter } => Some((*len, *letter)),
                _ => None,
            })
            .collect()
    }

    /// Digit macros at the top level, in order.
    pub fn digits(&self) -> Vec<DigitKind> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                MacroToken::Digit(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    /// Count tokens anywhere in the tree matching the predicate.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&MacroToken) -> bool,
    {
        let mut count = 0;
        self.walk(&mut |t| {
            if predicate(t) {
                count += 1;
            }
        });
        count
    }
}

impl From<Vec<MacroToken>> for TokenStream {
    fn from(tokens: Vec<MacroToken>) -> Self {
        TokenStream { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a MacroToken;
    type IntoIter = std::slice::Iter<'a, MacroToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Result of translating a single pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    tokens: TokenStream,
    diagnostics: Vec<PatternError>,
}

impl Translation {
    pub fn new(tokens: TokenStream, diagnostics: Vec<PatternError>) -> Self {
        Translation {
            tokens,
            diagnostics,
        }
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Problems recovered from while translating.
    pub fn diagnostics(&self) -> &[PatternError] {
        &self.diagnostics
    }

    /// Returns true if the pattern translated without any diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.fmt(f)
    }
}

/// Result of translating a number pattern.
///
/// Renders as two groups, `{positive}{negative}`, with an empty second group
/// when the pattern has no negative sub-pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberTranslation {
    pub positive: TokenStream,
    pub negative: Option<TokenStream>,
    diagnostics: Vec<PatternError>,
}

impl NumberTranslation {
    pub fn new(
        positive: TokenStream,
        negative: Option<TokenStream>,
        diagnostics: Vec<PatternError>,
    ) -> Self {
        NumberTranslation {
            positive,
            negative,
            diagnostics,
        }
    }

    /// Number of sub-patterns that were translated (1 or 2).
    pub fn sub_pattern_count(&self) -> usize {
        if self.negative.is_some() {
            2
        } else {
            1
        }
    }

    pub fn diagnostics(&self) -> &[PatternError] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl From<NumberTranslation> for Translation {
    fn from(number: NumberTranslation) -> Self {
        let tokens = TokenStream::from(vec![
            MacroToken::Group(number.positive),
            MacroToken::Group(number.negative.unwrap_or_default()),
        ]);
        Translation::new(tokens, number.diagnostics)
    }
}

impl fmt::Display for NumberTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{{", self.positive)?;
        if let Some(ref negative) = self.negative {
            write!(f, "{}", negative)?;
        }
        f.write_str("}")
    }
}

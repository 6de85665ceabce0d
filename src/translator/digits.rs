//! Digit-run rendering.
//!
//! The macro consumer addresses a number as a fixed number of digit positions
//! (the digit budget). Every integer or fraction run is therefore padded or
//! truncated to exactly the budget: integer runs grow and shrink at the most
//! significant end, fraction runs at the least significant end. Grouping
//! separators are recomputed from the padded position, so inserted padding
//! digits are grouped like the ones written in the pattern.

use crate::ast::{DigitKind, MacroToken, TokenStream};
use crate::options::TranslateOptions;
use crate::parser::lexer::Lexer;
use crate::parser::tokens::{SpannedToken, Token};

use super::render_literal_token;

/// Which end of a digit run absorbs padding and truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Integer side: pad and truncate before the first placeholder.
    Leading,
    /// Fraction side: pad and truncate after the last placeholder.
    Trailing,
}

/// Placeholder count and grouping interval of a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DigitLayout {
    count: usize,
    /// Placeholders after the last `,` (0 when there is no grouping)
    group_size: usize,
}

impl DigitLayout {
    fn scan(tokens: &[SpannedToken]) -> Self {
        let mut count = 0;
        let mut since_group: Option<usize> = None;

        for spanned in tokens {
            match spanned.token {
                Token::Zero | Token::Hash => {
                    count += 1;
                    if let Some(n) = since_group.as_mut() {
                        *n += 1;
                    }
                }
                Token::Grouping => since_group = Some(0),
                _ => {}
            }
        }

        DigitLayout {
            count,
            group_size: since_group.unwrap_or(0),
        }
    }
}

/// Emits digit macros and inserts grouping separators at padded positions.
struct DigitCursor {
    padding: Padding,
    budget: usize,
    group_size: usize,
    emitted: usize,
}

impl DigitCursor {
    fn push(&mut self, out: &mut TokenStream, kind: DigitKind) {
        out.push(MacroToken::Digit(kind));
        self.emitted += 1;

        if self.group_size == 0 || self.emitted >= self.budget {
            return;
        }
        // Digits between this one and the decimal point.
        let towards_point = match self.padding {
            Padding::Leading => self.budget - self.emitted,
            Padding::Trailing => self.emitted,
        };
        if towards_point % self.group_size == 0 {
            out.push(MacroToken::GroupSeparator);
        }
    }

    fn pad(&mut self, out: &mut TokenStream, count: usize) {
        for _ in 0..count {
            self.push(out, DigitKind::Optional);
        }
    }
}

/// Render a lexed digit run into exactly `budget` digit macros plus any
/// literal tokens it contains.
pub fn render_digit_tokens(
    tokens: &[SpannedToken],
    padding: Padding,
    options: &TranslateOptions,
) -> TokenStream {
    let layout = DigitLayout::scan(tokens);
    let budget = options.budget();
    let kept = layout.count.min(budget);
    let dropped = layout.count - kept;
    let missing = budget - kept;

    if dropped > 0 {
        tracing::debug!(
            placeholders = layout.count,
            budget,
            ?padding,
            "truncating digit placeholders to the digit budget"
        );
    }

    // 1-based ordinals of the placeholders that survive truncation
    let (first_kept, last_kept) = match padding {
        Padding::Leading => (dropped + 1, layout.count),
        Padding::Trailing => (1, kept),
    };

    let mut cursor = DigitCursor {
        padding,
        budget,
        group_size: layout.group_size,
        emitted: 0,
    };
    let mut out = TokenStream::new();
    let mut ordinal = 0;

    for spanned in tokens {
        let kind = match spanned.token {
            Token::Zero => DigitKind::Mandatory,
            Token::Hash => DigitKind::Optional,
            // Grouping is recomputed from the padded position
            Token::Grouping => continue,
            ref other => {
                render_literal_token(&mut out, other);
                continue;
            }
        };

        ordinal += 1;
        if ordinal < first_kept || ordinal > last_kept {
            continue;
        }
        if padding == Padding::Leading && ordinal == first_kept {
            cursor.pad(&mut out, missing);
        }
        cursor.push(&mut out, kind);
        if padding == Padding::Trailing && ordinal == last_kept {
            cursor.pad(&mut out, missing);
        }
    }

    out
}

/// Render a digit-run sub-pattern such as `#,##0` or `00#`.
///
/// An unterminated quote is closed at the end of the run and logged.
pub fn render_digits(pattern: &str, padding: Padding, options: &TranslateOptions) -> TokenStream {
    let mut lexer = Lexer::new(pattern);
    let tokens = lexer.drain();
    if let Some(position) = lexer.unterminated_quote() {
        tracing::warn!(pattern, position, "unterminated quoted literal");
    }
    render_digit_tokens(&tokens, padding, options)
}

//! Number pattern translation (decimals, currency, percentages, scientific notation)

use crate::ast::{MacroToken, MarkerPosition, NumberTranslation, TokenStream};
use crate::options::TranslateOptions;
use crate::parser::tokens::{SpannedToken, Token};
use crate::parser::{self, find_exponent, find_marker, has_digits, split_once};

use super::digits::{render_digit_tokens, Padding};
use super::render_literal;

/// Translate a number pattern with the default digit budget.
pub fn translate_number_pattern(pattern: &str) -> NumberTranslation {
    translate_number_pattern_with(pattern, &TranslateOptions::default())
}

/// Translate a number pattern such as `#,##0.00;(#,##0.00)`.
pub fn translate_number_pattern_with(
    pattern: &str,
    options: &TranslateOptions,
) -> NumberTranslation {
    let parsed = parser::parse(pattern);

    let positive = translate_sub_pattern(&parsed.positive, options);
    let negative = parsed
        .negative
        .as_deref()
        .map(|tokens| translate_sub_pattern(tokens, options));

    NumberTranslation::new(positive, negative, parsed.diagnostics)
}

/// Classify a sub-pattern as currency, percentage or plain number.
fn translate_sub_pattern(tokens: &[SpannedToken], options: &TranslateOptions) -> TokenStream {
    let Some((index, marker)) = find_marker(tokens) else {
        return translate_numeric(tokens, options);
    };

    let before = &tokens[..index];
    let after = &tokens[index + 1..];

    // The side holding the placeholders is the number, the other is literal text
    let (position, number_side, literal_side) = if has_digits(before) {
        (MarkerPosition::Suffix, before, after)
    } else {
        (MarkerPosition::Prefix, after, before)
    };

    let mut out = TokenStream::new();
    out.push(MacroToken::Affixed {
        marker,
        position,
        number: translate_numeric(number_side, options),
        literal: render_literal(literal_side),
    });
    out
}

/// Split off an exponent, if any, and translate the parts.
fn translate_numeric(tokens: &[SpannedToken], options: &TranslateOptions) -> TokenStream {
    let Some(index) = find_exponent(tokens) else {
        return translate_decimal(tokens, options);
    };
    let (mantissa, exponent) = (&tokens[..index], &tokens[index + 1..]);

    let mut out = TokenStream::new();
    out.push(MacroToken::Scientific {
        mantissa: translate_decimal(mantissa, options),
        exponent: render_digit_tokens(exponent, Padding::Leading, options),
    });
    out
}

/// Split at the decimal point, if any, and render the digit runs.
fn translate_decimal(tokens: &[SpannedToken], options: &TranslateOptions) -> TokenStream {
    let Some((integer, fraction)) = split_once(tokens, &Token::DecimalPoint) else {
        return render_digit_tokens(tokens, Padding::Leading, options);
    };

    let mut out = TokenStream::new();
    out.push(MacroToken::Decimal {
        integer: render_digit_tokens(integer, Padding::Leading, options),
        fraction: render_digit_tokens(fraction, Padding::Trailing, options),
    });
    out
}

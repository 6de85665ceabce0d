//! Token types for the number pattern lexer.

/// A token in a number pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    /// Content of a `'...'` span, with `''` already reduced to `'`
    QuotedString(String),
    /// `''` outside a quoted span
    Apostrophe,

    // Digit placeholders
    Zero, // 0
    Hash, // #

    // Separators
    DecimalPoint, // .
    Grouping,     // ,
    SectionSep,   // ;
    Exponent,     // E

    Minus, // -

    // Markers
    Percent,               // %
    PerMille,              // ‰
    Currency,              // ¤
    InternationalCurrency, // ¤¤

    // End of input
    Eof,
}

impl Token {
    /// Returns true for `0` and `#`.
    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Zero | Token::Hash)
    }

    /// The pattern character this token was lexed from, for single-character
    /// tokens that end up rendered as literal text.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Literal(c) => Some(*c),
            Token::Zero => Some('0'),
            Token::Hash => Some('#'),
            Token::DecimalPoint => Some('.'),
            Token::Grouping => Some(','),
            Token::SectionSep => Some(';'),
            Token::Exponent => Some('E'),
            Token::Minus => Some('-'),
            Token::Percent => Some('%'),
            Token::PerMille => Some('\u{2030}'),
            Token::Currency => Some('\u{00a4}'),
            _ => None,
        }
    }
}

/// A token with its character span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

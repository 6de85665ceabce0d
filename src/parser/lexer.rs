//! Lexer for tokenizing number patterns.
//!
//! The lexer is the only place that knows about quoting. Everything after it
//! splits patterns by looking for separator tokens, so a `;`, `.` or `¤` inside
//! a quoted literal can never be mistaken for structure. It handles:
//! - Quoted spans (`'text'`) become QuotedString tokens, `''` inside them is a quote
//! - `''` outside a quoted span becomes an Apostrophe token
//! - `¤¤` is a single InternationalCurrency token
//! - An unterminated quote runs to the end of the pattern
//!
//! Spans are measured in characters, not bytes.

use crate::parser::tokens::{SpannedToken, Token};

const QUOTE: char = '\'';
const CURRENCY_SIGN: char = '\u{00a4}';
const PER_MILLE_SIGN: char = '\u{2030}';

/// A lexer for number patterns.
pub struct Lexer<'a> {
    /// The input pattern being tokenized.
    input: &'a str,
    chars: Vec<char>,
    /// The current character position.
    position: usize,
    /// Start of a quoted span that reached the end of input, if any.
    unterminated_quote: Option<usize>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given pattern.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            position: 0,
            unterminated_quote: None,
        }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        };

        let token = match ch {
            QUOTE if self.peek_char() == Some(QUOTE) => {
                self.position += 2;
                Token::Apostrophe
            }
            QUOTE => self.lex_quoted_string(),

            '0' => self.single(Token::Zero),
            '#' => self.single(Token::Hash),
            '.' => self.single(Token::DecimalPoint),
            ',' => self.single(Token::Grouping),
            ';' => self.single(Token::SectionSep),
            'E' => self.single(Token::Exponent),
            '-' => self.single(Token::Minus),
            '%' => self.single(Token::Percent),
            PER_MILLE_SIGN => self.single(Token::PerMille),

            CURRENCY_SIGN if self.peek_char() == Some(CURRENCY_SIGN) => {
                self.position += 2;
                Token::InternationalCurrency
            }
            CURRENCY_SIGN => self.single(Token::Currency),

            // Everything else is a literal
            _ => self.single(Token::Literal(ch)),
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    /// The pattern being tokenized.
    pub fn source(&self) -> &'a str {
        self.input
    }

    /// Start of an unterminated quoted span, once lexing has passed it.
    pub fn unterminated_quote(&self) -> Option<usize> {
        self.unterminated_quote
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn single(&mut self, token: Token) -> Token {
        self.position += 1;
        token
    }

    /// Lexes a quoted string ('...'), honouring doubled quotes inside it.
    fn lex_quoted_string(&mut self) -> Token {
        let start = self.position;
        self.position += 1; // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some(QUOTE) if self.peek_char() == Some(QUOTE) => {
                    content.push(QUOTE);
                    self.position += 2;
                }
                Some(QUOTE) => {
                    self.position += 1; // Skip the closing quote
                    return Token::QuotedString(content);
                }
                Some(ch) => {
                    content.push(ch);
                    self.position += 1;
                }
                None => {
                    self.unterminated_quote = Some(start);
                    return Token::QuotedString(content);
                }
            }
        }
    }

    /// Returns all remaining tokens, without the trailing Eof.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        self.drain()
    }

    /// Returns all remaining tokens, without the trailing Eof, leaving the
    /// lexer at the end of input so its quote state can still be inspected.
    pub fn drain(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if matches!(token.token, Token::Eof) {
                break;
            }
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().token, Token::Eof));
    }

    #[test]
    fn test_single_zero() {
        let mut lexer = Lexer::new("0");
        assert!(matches!(lexer.next_token().token, Token::Zero));
        assert!(matches!(lexer.next_token().token, Token::Eof));
    }

    #[test]
    fn test_spans_count_characters() {
        let tokens = Lexer::new("\u{00a4}\u{00a4}#").tokenize();
        assert_eq!(tokens[0].token, Token::InternationalCurrency);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!((tokens[1].start, tokens[1].end), (2, 3));
    }

    #[test]
    fn test_unterminated_quote() {
        let mut lexer = Lexer::new("0 'abc");
        while !matches!(lexer.next_token().token, Token::Eof) {}
        assert_eq!(lexer.unterminated_quote(), Some(2));
    }
}

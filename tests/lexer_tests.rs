//! Tests for the number pattern lexer.

use patfmt::parser::lexer::Lexer;
use patfmt::parser::tokens::Token;

#[test]
fn test_lex_simple_number_pattern() {
    let mut lexer = Lexer::new("#,##0.00");
    assert_eq!(lexer.next_token().token, Token::Hash);
    assert_eq!(lexer.next_token().token, Token::Grouping);
    assert_eq!(lexer.next_token().token, Token::Hash);
    assert_eq!(lexer.next_token().token, Token::Hash);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::DecimalPoint);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_quoted_string() {
    let mut lexer = Lexer::new("'USD'0.00");
    assert_eq!(lexer.next_token().token, Token::QuotedString("USD".into()));
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::DecimalPoint);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_doubled_quote_inside_string() {
    let mut lexer = Lexer::new("'o''clock'");
    assert_eq!(
        lexer.next_token().token,
        Token::QuotedString("o'clock".into())
    );
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_doubled_quote_outside_string() {
    let mut lexer = Lexer::new("0''");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Apostrophe);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_sections() {
    let mut lexer = Lexer::new("0;-0");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::SectionSep);
    assert_eq!(lexer.next_token().token, Token::Minus);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_quoted_section_separator() {
    let mut lexer = Lexer::new("0';'0");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::QuotedString(";".into()));
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_percent_and_per_mille() {
    let mut lexer = Lexer::new("0%\u{2030}");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Percent);
    assert_eq!(lexer.next_token().token, Token::PerMille);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_currency_signs() {
    let mut lexer = Lexer::new("\u{00a4}\u{00a4}\u{00a4}0");
    // Two signs pair up, the third stands alone
    assert_eq!(lexer.next_token().token, Token::InternationalCurrency);
    assert_eq!(lexer.next_token().token, Token::Currency);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_scientific_notation() {
    let mut lexer = Lexer::new("0.00E00");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::DecimalPoint);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Exponent);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_lowercase_e_is_literal() {
    let mut lexer = Lexer::new("0e");
    assert_eq!(lexer.next_token().token, Token::Zero);
    assert_eq!(lexer.next_token().token, Token::Literal('e'));
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_lex_unterminated_quote_runs_to_end() {
    let tokens = Lexer::new("0'abc;0").tokenize();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].token, Token::QuotedString("abc;0".into()));
}

#[test]
fn test_tokenize_spans() {
    let tokens = Lexer::new("'ab'0").tokenize();
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
    assert_eq!((tokens[1].start, tokens[1].end), (4, 5));
}

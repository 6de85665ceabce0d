//! Date and time pattern translation
//!
//! The translator walks the pattern one character at a time, with a single
//! character of lookahead to tell a doubled quote (`''`) from a closing one.
//! Runs of the same field letter become one `\dtf{len}{letter}` macro; every
//! other character is escaped as natural-language text.

use std::mem;

use crate::ast::{MacroToken, TokenStream, Translation};
use crate::error::PatternError;
use crate::escape::{escape, Context};

/// Letters that denote a date/time field outside quotes.
///
/// Era, year, week year, month, week of year, week of month, day of year, day
/// of month, day of week in month, day name, ISO day number, am/pm, the four
/// hour variants, minute, second, millisecond and the three time zone forms.
pub const FIELD_LETTERS: &[char] = &[
    'G', 'y', 'Y', 'M', 'w', 'W', 'D', 'd', 'F', 'E', 'u', 'a', 'H', 'k', 'K', 'h', 'm', 's', 'S',
    'z', 'Z', 'X',
];

const QUOTE: char = '\'';

fn is_field_letter(c: char) -> bool {
    FIELD_LETTERS.contains(&c)
}

/// What the translator is in the middle of.
#[derive(Debug, Default)]
enum Run {
    #[default]
    Idle,
    /// Collecting a run of one field letter
    Field { letter: char, len: usize },
    /// Inside `'...'`; `content` becomes the body of `\str{}`
    Quoted { start: usize, content: TokenStream },
}

struct DateTranslator {
    out: TokenStream,
    run: Run,
    diagnostics: Vec<PatternError>,
}

impl DateTranslator {
    fn new() -> Self {
        DateTranslator {
            out: TokenStream::new(),
            run: Run::Idle,
            diagnostics: Vec::new(),
        }
    }

    fn translate(mut self, pattern: &str) -> Translation {
        let chars: Vec<char> = pattern.chars().collect();
        let mut position = 0;

        while let Some(&c) = chars.get(position) {
            if c == QUOTE {
                if chars.get(position + 1) == Some(&QUOTE) {
                    self.flush_field();
                    self.emit(MacroToken::Apostrophe);
                    position += 2;
                } else {
                    self.toggle_quote(position);
                    position += 1;
                }
                continue;
            }

            if let Run::Quoted { content, .. } = &mut self.run {
                content.push_literal(&escape(c, Context::Text));
            } else if is_field_letter(c) {
                self.extend_field(c);
            } else {
                self.flush_field();
                self.out.push_literal(&escape(c, Context::Text));
            }
            position += 1;
        }

        self.finish(pattern)
    }

    /// Push a token into the open quoted span, or the output.
    fn emit(&mut self, token: MacroToken) {
        match &mut self.run {
            Run::Quoted { content, .. } => content.push(token),
            _ => self.out.push(token),
        }
    }

    fn extend_field(&mut self, c: char) {
        if let Run::Field { letter, len } = &mut self.run {
            if *letter == c {
                *len += 1;
                return;
            }
        }
        self.flush_field();
        self.run = Run::Field { letter: c, len: 1 };
    }

    /// Emit a pending field run. Does nothing inside a quoted span.
    fn flush_field(&mut self) {
        if let Run::Field { letter, len } = self.run {
            self.out.push(MacroToken::Field { len, letter });
            self.run = Run::Idle;
        }
    }

    fn toggle_quote(&mut self, position: usize) {
        match mem::take(&mut self.run) {
            Run::Quoted { content, .. } => self.out.push(MacroToken::Str(content)),
            previous => {
                self.run = previous;
                self.flush_field();
                self.run = Run::Quoted {
                    start: position,
                    content: TokenStream::new(),
                };
            }
        }
    }

    fn finish(mut self, pattern: &str) -> Translation {
        if let Run::Quoted { start, content } = mem::take(&mut self.run) {
            tracing::warn!(pattern, position = start, "unterminated quoted literal");
            self.diagnostics
                .push(PatternError::UnterminatedQuote { position: start });
            self.out.push(MacroToken::Str(content));
        }
        self.flush_field();
        Translation::new(self.out, self.diagnostics)
    }
}

/// Translate a date/time pattern such as `dd-MMM-yyyy` or `h:mm a`.
pub fn translate_date_pattern(pattern: &str) -> Translation {
    DateTranslator::new().translate(pattern)
}

use std::str::Chars;

use log::trace;
use thiserror::Error;

use super::token::{Token, TokenKind};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    #[error("unmatched quote")]
    UnmatchedQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    InToken,
    InLiteral,
    JustClosedLiteral,
    InSpecialRun,
}

/// Single-pass tokenizer for one input line.
///
/// The lexer owns everything it accumulates; on failure the partial token and
/// all tokens produced so far are dropped together with it.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    state: LexState,
    buf: String,
    tokens: Vec<Token>,
}

fn is_blank(ch: char) -> bool {
    // same set as C isspace(), which includes vertical tab
    ch.is_ascii_whitespace() || ch == '\x0b'
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars(),
            state: LexState::Start,
            buf: String::new(),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.chars.next() {
            self.state = match self.state {
                LexState::Start => self.on_start(ch),
                LexState::InToken | LexState::JustClosedLiteral => self.on_word(ch),
                LexState::InLiteral => self.on_literal(ch),
                LexState::InSpecialRun => {
                    self.emit(TokenKind::Special);
                    self.on_start(ch)
                }
            };
        }

        match self.state {
            LexState::InLiteral => return Err(LexError::UnmatchedQuote),
            LexState::InToken | LexState::JustClosedLiteral => self.emit(TokenKind::Ordinary),
            LexState::InSpecialRun => self.emit(TokenKind::Special),
            LexState::Start => {}
        }

        trace!("tokenized {} token(s)", self.tokens.len());
        Ok(self.tokens)
    }

    fn on_start(&mut self, ch: char) -> LexState {
        match ch {
            c if is_blank(c) => LexState::Start,
            '<' | '>' => {
                self.buf.push(ch);
                LexState::InSpecialRun
            }
            '"' => LexState::InLiteral,
            _ => {
                self.buf.push(ch);
                LexState::InToken
            }
        }
    }

    // Shared by InToken and JustClosedLiteral. The only difference is that the
    // buffer may be empty after `""`, and that still makes a (blank) word.
    fn on_word(&mut self, ch: char) -> LexState {
        match ch {
            c if is_blank(c) => {
                self.emit(TokenKind::Ordinary);
                LexState::Start
            }
            '<' | '>' => {
                self.emit(TokenKind::Ordinary);
                self.buf.push(ch);
                LexState::InSpecialRun
            }
            '"' => LexState::InLiteral,
            _ => {
                self.buf.push(ch);
                LexState::InToken
            }
        }
    }

    fn on_literal(&mut self, ch: char) -> LexState {
        if ch == '"' {
            LexState::JustClosedLiteral
        } else {
            self.buf.push(ch);
            LexState::InLiteral
        }
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buf);
        self.tokens.push(Token::new(kind, text));
    }
}

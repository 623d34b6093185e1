use log::debug;

use super::{ParseError, Parser};
use crate::command::{Command, RedirectKind};
use crate::lexer::{Token, TokenKind};

/// Syntax stage: validates one line's tokens and assembles a [`Command`].
pub struct CommandBuilder<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect_target(&mut self, kind: RedirectKind) -> Result<String, ParseError> {
        match self.next() {
            Some(tok) if !tok.is_special() => Ok(tok.text().to_owned()),
            _ => Err(ParseError::MissingRedirectTarget(kind)),
        }
    }
}

impl<'a> Parser for CommandBuilder<'a> {
    fn parse(&mut self) -> Result<Option<Command>, ParseError> {
        let Some(first) = self.next() else {
            return Ok(None);
        };
        if first.kind() != TokenKind::Ordinary || first.text().is_empty() {
            return Err(ParseError::MissingCommandName);
        }
        let name = first.text().to_owned();

        let mut args = Vec::new();
        let mut stdin = None;
        let mut stdout = None;

        while let Some(tok) = self.next() {
            let Some(kind) = tok.redirect_kind() else {
                args.push(tok.text().to_owned());
                continue;
            };
            let slot = match kind {
                RedirectKind::In => &mut stdin,
                RedirectKind::Out => &mut stdout,
            };
            if slot.is_some() {
                return Err(ParseError::multiple(kind));
            }
            *slot = Some(self.expect_target(kind)?);
        }

        let command = Command::new(name, args, stdin, stdout);
        debug!("built command {:?}", command);
        Ok(Some(command))
    }
}

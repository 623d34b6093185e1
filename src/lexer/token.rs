use std::fmt;

use crate::command::RedirectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ordinary, // word text, quotes already stripped
    Special,  // unquoted `<` or `>`
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ordinary => write!(f, "ordinary"),
            TokenKind::Special => write!(f, "special"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn ordinary(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Ordinary, text)
    }

    pub fn special(ch: char) -> Self {
        Token::new(TokenKind::Special, ch.to_string())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_special(&self) -> bool {
        self.kind == TokenKind::Special
    }

    /// The redirection this token introduces, if it is a `<` or `>` operator.
    pub fn redirect_kind(&self) -> Option<RedirectKind> {
        match (self.kind, self.text.as_str()) {
            (TokenKind::Special, "<") => Some(RedirectKind::In),
            (TokenKind::Special, ">") => Some(RedirectKind::Out),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token: {} ({})", self.text, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_kind() {
        assert_eq!(Token::special('<').redirect_kind(), Some(RedirectKind::In));
        assert_eq!(Token::special('>').redirect_kind(), Some(RedirectKind::Out));
        // quoted operators stay ordinary words
        assert_eq!(Token::ordinary("<").redirect_kind(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::ordinary("b c").to_string(), "Token: b c (ordinary)");
        assert_eq!(Token::special('>').to_string(), "Token: > (special)");
    }
}

//! Token types for the search query lexer

use std::borrow::Cow;
use std::fmt;

/// Token kinds in the search query language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A double-quoted phrase, escapes already resolved
    QuotedString,
    /// A bare run of non-whitespace characters
    Word,
    /// Field separator, only produced by the fields grammar
    Colon,

    // Special
    Eof,
}

impl TokenKind {
    /// Check if this token can stand as a term or a field value
    pub fn is_value(&self) -> bool {
        matches!(self, TokenKind::QuotedString | TokenKind::Word)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::QuotedString => write!(f, "quoted string"),
            TokenKind::Word => write!(f, "word"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with position information
///
/// `text` borrows from the input unless a quoted string contained escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: impl Into<Cow<'a, str>>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: Cow::Borrowed(""),
            offset,
        }
    }

    pub fn into_text(self) -> String {
        self.text.into_owned()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::QuotedString => write!(f, "\"{}\"", self.text),
            TokenKind::Word => write!(f, "'{}'", self.text),
            TokenKind::Colon | TokenKind::Eof => write!(f, "{}", self.kind),
        }
    }
}

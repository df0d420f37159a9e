//! Search-box query parser
//!
//! Turns a line of search-box input into ordered free-text terms plus a map
//! of `key:value` field filters.
//!
//! # Grammar
//!
//! ```text
//! query ::= item+
//! item  ::= field | term
//! field ::= WORD ':' value
//! value ::= QUOTED_STRING | WORD
//! term  ::= QUOTED_STRING | WORD
//! ```
//!
//! `WORD ':' value` is always reduced as a field, never as two terms. Under
//! [`Grammar::TERMS_ONLY`] the lexer never emits `':'`, so only the `term`
//! production applies.
//!
//! # Example
//!
//! ```rust
//! use searchbox_core::parser::parse_search_query;
//!
//! let query = parse_search_query("comfortable red shoes category:clothing size:10").unwrap();
//! assert_eq!(query.search_terms, vec!["comfortable", "red", "shoes"]);
//! assert_eq!(query.field("category"), Some("clothing"));
//! assert_eq!(query.field("size"), Some("10"));
//! ```

mod ast;
mod grammar;
mod lexer;
mod token;

pub use ast::{Item, SearchQuery, TermsOnlyQuery};
pub use grammar::Grammar;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use grammar::{FIELDS_GRAMMAR, TERMS_ONLY_GRAMMAR};
use thiserror::Error;
use tracing::debug;

/// Parser errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Recovered by the lexer; reported through `diagnostics`, never as the
    /// error of a parse.
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter { character: char, position: usize },

    #[error("unterminated quoted string starting at position {position}")]
    UnterminatedQuotedString { position: usize },

    #[error("syntax error at {found} (position {position})")]
    UnexpectedToken { found: String, position: usize },

    #[error("syntax error at end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("empty query")]
    EmptyQuery,
}

impl ParseError {
    /// True for grammar violations, as opposed to lexical errors
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedToken { .. }
                | ParseError::UnexpectedEof { .. }
                | ParseError::EmptyQuery
        )
    }

    fn unexpected(token: &Token<'_>) -> Self {
        ParseError::UnexpectedToken {
            found: token.to_string(),
            position: token.offset,
        }
    }
}

/// Parse a query with the fields grammar
pub fn parse_search_query(query: &str) -> Result<SearchQuery, ParseError> {
    Parser::parse(query)
}

/// Parse a query with the terms-only grammar, where `:` is part of a word
pub fn parse_terms(query: &str) -> Result<TermsOnlyQuery, ParseError> {
    Parser::new(query, &TERMS_ONLY_GRAMMAR)
        .run()
        .map(TermsOnlyQuery::from)
}

/// Search query parser
///
/// Pulls tokens from the [`Lexer`] one at a time with a single token of
/// lookahead, which is all the `field` production needs.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, grammar: &Grammar) -> Self {
        Self {
            lexer: Lexer::new(input, grammar),
            peeked: None,
        }
    }

    /// Parse input with the fields grammar
    pub fn parse(input: &'a str) -> Result<SearchQuery, ParseError> {
        Parser::new(input, &FIELDS_GRAMMAR).run()
    }

    /// Run the parser and fold the items into a `SearchQuery`
    pub fn run(mut self) -> Result<SearchQuery, ParseError> {
        let query: SearchQuery = self.items()?.into_iter().collect();
        debug!(
            terms = query.search_terms.len(),
            fields = query.fields.len(),
            skipped = self.lexer.diagnostics().len(),
            "parsed search query"
        );
        Ok(query)
    }

    /// Illegal characters the lexer skipped so far
    pub fn diagnostics(&self) -> &[ParseError] {
        self.lexer.diagnostics()
    }

    /// Reduce the whole input to items in input order.
    ///
    /// Consumes the token stream; a second call sees only end of input.
    pub fn items(&mut self) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();

        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::QuotedString => items.push(Item::Term(token.into_text())),
                TokenKind::Word => {
                    if self.peek()?.kind == TokenKind::Colon {
                        self.next()?;
                        let value = self.expect_value()?;
                        items.push(Item::Field {
                            key: token.text.to_lowercase(),
                            value,
                        });
                    } else {
                        items.push(Item::Term(token.into_text()));
                    }
                }
                TokenKind::Colon => return Err(ParseError::unexpected(&token)),
            }
        }

        if items.is_empty() {
            return Err(ParseError::EmptyQuery);
        }
        Ok(items)
    }

    fn peek(&mut self) -> Result<&Token<'a>, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(self.peeked.insert(token))
    }

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    fn pull(&mut self) -> Result<Token<'a>, ParseError> {
        match self.lexer.next() {
            Some(result) => result,
            None => Ok(Token::eof(self.lexer.position())),
        }
    }

    fn expect_value(&mut self) -> Result<String, ParseError> {
        let token = self.next()?;
        match token.kind {
            kind if kind.is_value() => Ok(token.into_text()),
            TokenKind::Eof => Err(ParseError::UnexpectedEof {
                expected: "field value".to_string(),
            }),
            _ => Err(ParseError::unexpected(&token)),
        }
    }
}

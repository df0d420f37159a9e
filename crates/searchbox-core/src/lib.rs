//! Search-box query parsing
//!
//! Parses one line of search-box input, mixing free terms, quoted phrases
//! and `field:value` qualifiers, into a [`SearchQuery`].
//!
//! # Example
//!
//! ```rust
//! use searchbox_core::{parse_search_query, parse_terms};
//!
//! let query = parse_search_query("\"red winter shoes\" Color:Red").unwrap();
//! assert_eq!(query.search_terms, vec!["red winter shoes"]);
//! assert_eq!(query.field("color"), Some("Red"));
//!
//! // Without fields, `:` is just part of a word
//! let terms = parse_terms("size:10 shoes").unwrap();
//! assert_eq!(terms.search_terms, vec!["size:10", "shoes"]);
//! ```

pub mod parser;

// Re-export main types at crate root
pub use parser::{
    parse_search_query, parse_terms, Grammar, Item, Lexer, ParseError, Parser, SearchQuery,
    TermsOnlyQuery, Token, TokenKind,
};

//! Sample queries replayed by `searchbox --demo`

use searchbox_core::Grammar;

/// Queries exercising terms, phrases and fields
pub const FIELD_QUERIES: &[&str] = &[
    "\"red shoes\" category:clothing size:10 color:red brand:nike",
    "red shoes category:clothing size:10 color:red brand:nike",
    "comfortable red shoes category:clothing size:10",
    "category:clothing \"red winter shoes\" warm cozy",
    "\"quoted term\" another term yet:another",
];

/// Queries for the terms-only grammar
pub const TERM_QUERIES: &[&str] = &[
    "\"red shoes\"",
    "red shoes",
    "comfortable red shoes",
    "\"red winter shoes\" warm cozy",
];

pub fn queries(grammar: &Grammar) -> &'static [&'static str] {
    if grammar.fields {
        FIELD_QUERIES
    } else {
        TERM_QUERIES
    }
}

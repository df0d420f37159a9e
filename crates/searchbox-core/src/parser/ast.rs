//! Result types for parsed search queries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One reduced item of a query, in input order
///
/// Field keys produced by the parser are already lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Term(String),
    Field { key: String, value: String },
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Term(text) => write_value(f, text),
            Item::Field { key, value } => {
                write_value(f, key)?;
                write!(f, ":")?;
                write_value(f, value)
            }
        }
    }
}

/// A fully parsed search query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub search_terms: Vec<String>,
    /// Lower-cased field name to value. Later fields overwrite earlier ones.
    pub fields: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_terms(&self) -> bool {
        !self.search_terms.is_empty()
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Fold one item into the query
    pub fn push(&mut self, item: Item) {
        match item {
            Item::Term(text) => self.search_terms.push(text),
            Item::Field { key, value } => {
                self.fields.insert(key, value);
            }
        }
    }
}

impl FromIterator<Item> for SearchQuery {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut query = SearchQuery::new();
        for item in iter {
            query.push(item);
        }
        query
    }
}

/// Renders a query string that parses back to an equal `SearchQuery`:
/// terms in order, then fields in key order.
impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let terms = self.search_terms.iter().cloned().map(Item::Term);
        let fields = self.fields.iter().map(|(key, value)| Item::Field {
            key: key.clone(),
            value: value.clone(),
        });

        for item in terms.chain(fields) {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Result of the terms-only grammar
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TermsOnlyQuery {
    pub search_terms: Vec<String>,
}

impl From<SearchQuery> for TermsOnlyQuery {
    fn from(query: SearchQuery) -> Self {
        Self {
            search_terms: query.search_terms,
        }
    }
}

impl fmt::Display for TermsOnlyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.search_terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write_value(f, term)?;
        }
        Ok(())
    }
}

fn needs_quotes(text: &str) -> bool {
    text.is_empty() || text.chars().any(|c| c.is_whitespace() || c == '"' || c == ':')
}

fn write_value(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if !needs_quotes(text) {
        return write!(f, "{}", text);
    }
    write!(f, "\"")?;
    for c in text.chars() {
        match c {
            '"' | '\\' => write!(f, "\\{}", c)?,
            _ => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

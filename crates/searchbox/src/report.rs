//! Parse a query and render the outcome for the terminal or as JSON.

use std::fmt;

use searchbox_core::{Grammar, ParseError, Parser, SearchQuery, TermsOnlyQuery};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// A successfully parsed query together with the characters the lexer skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    #[serde(skip)]
    pub grammar: Grammar,
    pub query: SearchQuery,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

#[derive(Serialize)]
struct TermsReport<'a> {
    input: &'a str,
    query: TermsOnlyQuery,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    skipped: &'a [String],
}

impl Report {
    pub fn parse(input: &str, grammar: &Grammar) -> Result<Self> {
        let mut parser = Parser::new(input, grammar);
        let items = parser.items()?;
        let skipped = parser
            .diagnostics()
            .iter()
            .map(ParseError::to_string)
            .collect();
        debug!(input, items = items.len(), "query parsed");

        Ok(Self {
            input: input.to_string(),
            grammar: *grammar,
            query: items.into_iter().collect(),
            skipped,
        })
    }

    /// One JSON object on a single line
    pub fn to_json(&self) -> Result<String> {
        if self.grammar.fields {
            return Ok(serde_json::to_string(self)?);
        }
        let report = TermsReport {
            input: &self.input,
            query: TermsOnlyQuery::from(self.query.clone()),
            skipped: &self.skipped,
        };
        Ok(serde_json::to_string(&report)?)
    }
}

/// Human-readable listing of terms and fields
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsing query: {}", self.input)?;
        writeln!(f, "Search terms: {:?}", self.query.search_terms)?;
        if self.grammar.fields {
            writeln!(f, "Fields:")?;
            for (key, value) in &self.query.fields {
                writeln!(f, "  {}: {}", key, value)?;
            }
        }
        for warning in &self.skipped {
            writeln!(f, "Skipped: {}", warning)?;
        }
        Ok(())
    }
}

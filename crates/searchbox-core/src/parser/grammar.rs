//! Grammar selection for the lexer and parser

/// Immutable grammar configuration shared by the lexer and the parser.
///
/// The two variants are process-wide statics; build a custom value with
/// [`Grammar::new`] only when neither fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Recognise `key:value` fields. When false, `:` is an ordinary word
    /// character and no `Colon` token is ever produced.
    pub fields: bool,
}

impl Grammar {
    /// Terms plus `key:value` fields
    pub const FIELDS: Grammar = Grammar::new(true);

    /// Bare and quoted terms only
    pub const TERMS_ONLY: Grammar = Grammar::new(false);

    pub const fn new(fields: bool) -> Self {
        Self { fields }
    }

    /// Check if `c` terminates a word under this grammar
    pub(crate) fn ends_word(&self, c: char) -> bool {
        c.is_whitespace() || c == '"' || (self.fields && c == ':')
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::FIELDS
    }
}

pub(crate) static FIELDS_GRAMMAR: Grammar = Grammar::FIELDS;
pub(crate) static TERMS_ONLY_GRAMMAR: Grammar = Grammar::TERMS_ONLY;

//! Lexer for search-box queries
//!
//! Produces tokens lazily. Words and unescaped quoted strings borrow from the
//! input; only quoted strings containing `\"` or `\\` allocate.

use std::borrow::Cow;

use tracing::warn;

use super::grammar::Grammar;
use super::token::{Token, TokenKind};
use super::ParseError;

/// Lexer for search-box queries
///
/// Yields `Ok` tokens ending with a single `Eof`, or stops after the first
/// fatal error. Characters it cannot classify are skipped and recorded in
/// [`Lexer::diagnostics`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    grammar: Grammar,
    diagnostics: Vec<ParseError>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, grammar: &Grammar) -> Self {
        Self {
            input,
            position: 0,
            grammar: *grammar,
            diagnostics: Vec::new(),
            done: false,
        }
    }

    /// Current byte position in the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// Illegal characters skipped so far
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<ParseError> {
        self.diagnostics
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    /// Skip spaces, tabs and newlines. Other whitespace is left for the
    /// caller to report.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek_char() {
            if matches!(c, ' ' | '\t' | '\n') {
                self.advance(1);
            } else {
                break;
            }
        }
    }

    fn skip_illegal(&mut self, character: char) {
        let position = self.position;
        warn!(%position, character = ?character, "skipping illegal character");
        self.diagnostics.push(ParseError::IllegalCharacter {
            character,
            position,
        });
        self.advance(character.len_utf8());
    }

    fn read_quoted_string(&mut self) -> Result<Token<'a>, ParseError> {
        let input = self.input;
        let start = self.position;
        self.advance(1);
        let content_start = self.position;

        // Only allocated once the first escape is seen
        let mut unescaped: Option<String> = None;
        let mut chars = self.remaining().char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    let content_end = content_start + i;
                    self.position = content_end + 1;
                    let text = match unescaped {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(&input[content_start..content_end]),
                    };
                    return Ok(Token::new(TokenKind::QuotedString, text, start));
                }
                '\\' => match chars.next() {
                    Some((_, escaped @ ('"' | '\\'))) => {
                        unescaped
                            .get_or_insert_with(|| input[content_start..content_start + i].to_string())
                            .push(escaped);
                    }
                    Some((_, other)) => {
                        if let Some(buf) = unescaped.as_mut() {
                            buf.push('\\');
                            buf.push(other);
                        }
                    }
                    None => break,
                },
                _ => {
                    if let Some(buf) = unescaped.as_mut() {
                        buf.push(c);
                    }
                }
            }
        }

        self.position = input.len();
        Err(ParseError::UnterminatedQuotedString { position: start })
    }

    fn read_word(&mut self) -> Token<'a> {
        let start = self.position;

        while let Some(c) = self.peek_char() {
            if self.grammar.ends_word(c) {
                break;
            }
            self.advance(c.len_utf8());
        }

        Token::new(TokenKind::Word, &self.input[start..self.position], start)
    }

    fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        loop {
            self.skip_ignored();

            let Some(c) = self.peek_char() else {
                return Ok(Token::eof(self.position));
            };

            match c {
                '"' => return self.read_quoted_string(),
                ':' if self.grammar.fields => {
                    let start = self.position;
                    self.advance(1);
                    return Ok(Token::new(
                        TokenKind::Colon,
                        &self.input[start..self.position],
                        start,
                    ));
                }
                _ if c.is_whitespace() => self.skip_illegal(c),
                _ => return Ok(self.read_word()),
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind != TokenKind::Eof => {}
            _ => self.done = true,
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect_tokens(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input, &Grammar::FIELDS)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn kinds(input: &str, grammar: &Grammar) -> Vec<TokenKind> {
        Lexer::new(input, grammar)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    fn texts(input: &str, grammar: &Grammar) -> Vec<String> {
        Lexer::new(input, grammar)
            .map(|t| t.unwrap())
            .filter(|t| t.kind != TokenKind::Eof)
            .map(Token::into_text)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = collect_tokens("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = collect_tokens("  \t\n\n ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].offset, 6);
    }

    #[test]
    fn test_words() {
        assert_eq!(
            texts("red  winter\tshoes\n", &Grammar::FIELDS),
            vec!["red", "winter", "shoes"]
        );
    }

    #[test]
    fn test_field_tokens() {
        assert_eq!(
            kinds("size:10", &Grammar::FIELDS),
            vec![
                TokenKind::Word,
                TokenKind::Colon,
                TokenKind::Word,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_colon_is_word_character_in_terms_only() {
        assert_eq!(
            kinds("size:10 :x", &Grammar::TERMS_ONLY),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Eof]
        );
        assert_eq!(texts("size:10 :x", &Grammar::TERMS_ONLY), vec!["size:10", ":x"]);
    }

    #[test]
    fn test_quoted_string() {
        let tokens = collect_tokens("\"red winter shoes\" warm");
        assert_eq!(tokens[0].kind, TokenKind::QuotedString);
        assert_eq!(tokens[0].text, "red winter shoes");
        assert!(matches!(tokens[0].text, Cow::Borrowed(_)));
        assert_eq!(tokens[1].text, "warm");
        assert_eq!(tokens[1].offset, 19);
    }

    #[test]
    fn test_quoted_string_escapes() {
        let tokens = collect_tokens(r#""a \"b\" c" "back\\slash""#);
        assert_eq!(tokens[0].text, r#"a "b" c"#);
        assert!(matches!(tokens[0].text, Cow::Owned(_)));
        assert_eq!(tokens[1].text, r"back\slash");
    }

    #[test]
    fn test_unknown_escape_kept_verbatim() {
        let tokens = collect_tokens(r#""tab\t \"x\"""#);
        assert_eq!(tokens[0].text, r#"tab\t "x""#);
    }

    #[test]
    fn test_quote_terminates_word() {
        assert_eq!(
            texts("red\"blue\"green", &Grammar::FIELDS),
            vec!["red", "blue", "green"]
        );
    }

    #[test]
    fn test_colon_inside_quotes() {
        let tokens = collect_tokens("\"a:b\"");
        assert_eq!(tokens[0].kind, TokenKind::QuotedString);
        assert_eq!(tokens[0].text, "a:b");
    }

    #[test]
    fn test_unterminated_quote() {
        let results: Vec<_> = Lexer::new("red \"unterminated", &Grammar::FIELDS).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1],
            Err(ParseError::UnterminatedQuotedString { position: 4 })
        );
    }

    #[test]
    fn test_trailing_backslash_is_unterminated() {
        let results: Vec<_> = Lexer::new("\"abc\\", &Grammar::FIELDS).collect();
        assert_eq!(
            results,
            vec![Err(ParseError::UnterminatedQuotedString { position: 0 })]
        );
    }

    #[test]
    fn test_illegal_character_skipped() {
        let mut lexer = Lexer::new("red\r\nshoes", &Grammar::FIELDS);
        let texts: Vec<_> = lexer
            .by_ref()
            .map(|t| t.unwrap().into_text())
            .collect();
        assert_eq!(texts, vec!["red", "shoes", ""]);
        assert_eq!(
            lexer.diagnostics(),
            &[ParseError::IllegalCharacter {
                character: '\r',
                position: 3
            }]
        );
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(
            texts("日本語 café\u{00a0}Москва", &Grammar::FIELDS),
            vec!["日本語", "café", "Москва"]
        );
    }

    #[test]
    fn test_stops_after_eof() {
        let mut lexer = Lexer::new("x", &Grammar::FIELDS);
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
    }
}

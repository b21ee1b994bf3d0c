//! Token sequences of single view content statements.

use std::fmt;

use crate::span::Span;

/// One whitespace-separated word of a statement, with quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The ordered tokens of one statement.
///
/// Index 0 holds the statement keyword, arguments start at index 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens, keyword included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Text of the token at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(Token::text)
    }

    /// Returns `true` if there is a token at `index`.
    pub fn includes(&self, index: usize) -> bool {
        index < self.tokens.len()
    }

    /// Returns `true` if any token, keyword included, equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.tokens.iter().any(|token| token.text == text)
    }

    /// Span of the token at `index`.
    pub fn span(&self, index: usize) -> Option<Span> {
        self.tokens.get(index).map(Token::span)
    }

    /// Span covering the whole statement.
    pub fn statement_span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.union(last.span),
            _ => Span::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tokens {
        Tokens::new(vec![
            Token::new("include", Span::new(0..7)),
            Token::new("a", Span::new(8..9)),
            Token::new("->", Span::new(10..12)),
            Token::new("*", Span::new(13..14)),
        ])
    }

    #[test]
    fn test_queries() {
        let tokens = sample();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.get(2), Some("->"));
        assert_eq!(tokens.get(4), None);
        assert!(tokens.includes(3));
        assert!(!tokens.includes(4));
        assert!(tokens.contains("*"));
        assert!(!tokens.contains("b"));
    }

    #[test]
    fn test_spans() {
        let tokens = sample();

        assert_eq!(tokens.span(1), Some(Span::new(8..9)));
        assert_eq!(tokens.statement_span(), Span::new(0..14));
        assert_eq!(Tokens::default().statement_span(), Span::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "include a -> *");
    }
}

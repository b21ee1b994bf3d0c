//! Lexical analyzer for view content statements.
//!
//! A statement is one line of source. The lexer splits it into whitespace
//! separated [`Token`]s: bare words, or double-quoted strings that may
//! contain whitespace and the escapes `\"` and `\\`. A `#` or `//` at the
//! start of a token comments out the rest of the line.
//!
//! The entry point is [`tokenize`], which keeps lexing after an error so that
//! every problem on the line is reported at once.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    token::{none_of, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{Token, Tokens},
};

/// Diagnostic information attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
}

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<LexerDiagnostic>>>;

/// Parse an escape sequence inside a quoted token, starting at the backslash.
fn escape(input: &mut Input<'_>) -> IResult<char> {
    preceded(
        '\\',
        cut_err(one_of(['"', '\\'])).context(LexerDiagnostic {
            code: ErrorCode::E002,
            message: "invalid escape sequence",
            help: Some("only `\\\"` and `\\\\` can be escaped inside quotes"),
        }),
    )
    .parse_next(input)
}

/// Parse a double-quoted token, returning its unescaped content.
fn quoted(input: &mut Input<'_>) -> IResult<String> {
    let content = repeat(0.., alt((escape, none_of(['"', '\\'])))).fold(
        String::new,
        |mut acc, ch| {
            acc.push(ch);
            acc
        },
    );

    preceded(
        '"',
        cut_err(terminated(content, '"')).context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("add a closing `\"` before the end of the line"),
        }),
    )
    .parse_next(input)
}

/// Parse a bare word: any run of characters up to whitespace or a quote.
fn bare_word<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '"').parse_next(input)
}

fn token(input: &mut Input<'_>) -> IResult<String> {
    alt((quoted, bare_word.map(String::from))).parse_next(input)
}

fn whitespace<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(0.., |c: char| c.is_whitespace()).parse_next(input)
}

fn is_comment(input: &str) -> bool {
    input.starts_with('#') || input.starts_with("//")
}

/// Lexer state for one line.
struct Lexer<'a> {
    line: &'a str,
    offset: usize,
    tokens: Vec<Token>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new(line: &'a str, offset: usize) -> Self {
        Self {
            line,
            offset,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Byte position of `rest` within the line.
    fn position(&self, rest: &str) -> usize {
        self.line.len() - rest.len()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.offset + start..self.offset + end)
    }

    fn tokenize(&mut self) {
        let mut input: Input<'a> = self.line;

        loop {
            // Cannot fail: it matches zero or more characters.
            let _ = whitespace(&mut input);
            if input.is_empty() || is_comment(input) {
                break;
            }

            let start = self.position(input);
            match token(&mut input) {
                Ok(text) => {
                    let end = self.position(input);
                    self.tokens.push(Token::new(text, self.span(start, end)));
                }
                Err(err) => {
                    let error_pos = self.position(input);
                    let error_end = error_pos + input.chars().next().map_or(0, char::len_utf8);
                    let span = self.span(start, error_end);
                    self.diagnostics.emit(Self::convert_err_mode(err, span));

                    // Resume after the quote that closes the broken token, if any.
                    match self.line[error_end..].find('"') {
                        Some(quote) => input = &self.line[error_end + quote + 1..],
                        None => break,
                    }
                }
            }
        }
    }

    fn finish(self) -> Result<Tokens, ParseError> {
        self.diagnostics.finish()?;
        Ok(Tokens::new(self.tokens))
    }

    fn convert_err_mode(err: ErrMode<ContextError<LexerDiagnostic>>, span: Span) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            _ => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
        }) = context_error.context().next()
        {
            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        Diagnostic::error("unexpected input").with_label(span, "cannot be tokenized")
    }
}

/// Split one line of view content into tokens.
///
/// `offset` is the byte position of `line` within the whole content, so
/// token spans point into the original source.
///
/// # Returns
///
/// - `Ok(tokens)` - possibly empty for blank and comment lines
/// - `Err(ParseError)` - every lexer error found on the line
pub fn tokenize(line: &str, offset: usize) -> Result<Tokens, ParseError> {
    let mut lexer = Lexer::new(line, offset);
    lexer.tokenize();
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        tokenize(line, 0)
            .unwrap()
            .iter()
            .map(|token| token.text().to_string())
            .collect()
    }

    #[test]
    fn test_bare_words() {
        assert_eq!(texts("include a b"), vec!["include", "a", "b"]);
        assert_eq!(texts("  exclude\t* ->  api  "), vec!["exclude", "*", "->", "api"]);
    }

    #[test]
    fn test_arrow_needs_whitespace() {
        assert_eq!(texts("include a->b"), vec!["include", "a->b"]);
    }

    #[test]
    fn test_quoted_tokens() {
        assert_eq!(
            texts(r#"include "web app" b"#),
            vec!["include", "web app", "b"]
        );
        assert_eq!(
            texts(r#"include "say \"hi\"" "back\\slash""#),
            vec!["include", "say \"hi\"", "back\\slash"]
        );
        assert_eq!(texts(r#"include """#), vec!["include", ""]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert!(tokenize("", 0).unwrap().is_empty());
        assert!(tokenize("    ", 0).unwrap().is_empty());
        assert!(tokenize("# include a", 0).unwrap().is_empty());
        assert!(tokenize("  // include a", 0).unwrap().is_empty());
        assert_eq!(texts("include a // trailing"), vec!["include", "a"]);
        assert_eq!(texts("include a#b"), vec!["include", "a#b"]);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("include  web", 20).unwrap();

        assert_eq!(tokens.span(0), Some(Span::new(20..27)));
        assert_eq!(tokens.span(1), Some(Span::new(29..32)));

        let quoted = tokenize(r#"include "a b""#, 0).unwrap();
        assert_eq!(quoted.span(1), Some(Span::new(8..13)));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize(r#"include "web"#, 0).unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels()[0].span(), Span::new(8..12));
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_invalid_escape() {
        let err = tokenize(r#"include "a\qb" c"#, 0).unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.labels()[0].span(), Span::new(8..12));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let err = tokenize(r#"include "a\q" "b\x" "open"#, 0).unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();

        assert_eq!(
            codes,
            vec![
                Some(ErrorCode::E002),
                Some(ErrorCode::E002),
                Some(ErrorCode::E001)
            ]
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn identifier_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_.\\-]{0,15}"
    }

    proptest! {
        #[test]
        fn whitespace_separated_words_tokenize(
            words in proptest::collection::vec(identifier_strategy(), 1..6),
            gap in "[ \t]{1,3}",
        ) {
            let line = words.join(&gap);
            let tokens = tokenize(&line, 0).unwrap();

            prop_assert_eq!(tokens.len(), words.len());
            for (idx, word) in words.iter().enumerate() {
                prop_assert_eq!(tokens.get(idx), Some(word.as_str()));
                let span = tokens.span(idx).unwrap();
                prop_assert_eq!(&line[span.start()..span.end()], word.as_str());
            }
        }

        #[test]
        fn quoted_content_round_trips(content in "[A-Za-z0-9 _*>-]{0,20}") {
            let line = format!("include \"{content}\"");
            let tokens = tokenize(&line, 0).unwrap();

            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens.get(1), Some(content.as_str()));
        }
    }
}

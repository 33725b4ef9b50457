//! Responsible for converting egg source text into a token stream

use crate::lexer::cursor::Cursor;
use crate::lexer::dfa::{State, Step};
use egg_tokens::Token;
use tracing::{debug, trace};

mod cursor;
mod dfa;
mod error;

pub use error::{Found, LexProblem, LexerError};

/// Converts egg source into tokens, one char at a time.
///
/// A lexer is reusable. [`Lexer::lex`] starts over on a new input, and the lexer is
/// then an iterator over the tokens of that input. Tokens are produced lazily, and
/// iteration stops after the first error.
#[derive(Debug, Default)]
pub struct Lexer {
    state: Option<LexerState>,
}

impl Lexer {
    /// Creates a new lexer with no input
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts lexing `src`, discarding whatever input this lexer was working on
    pub fn lex(&mut self, src: &str) -> &mut Self {
        debug!(len = src.len(), "lexing new input");
        self.state = Some(LexerState {
            cursor: Cursor::new(src),
            node: State::Start,
        });
        self
    }

    /// Discards the current input
    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let state = self.state.as_mut()?;
            if let Some(token) = state.cursor.pop_token() {
                return Some(Ok(token));
            }
            let result = if state.cursor.has_input() {
                state.step()
            } else {
                let finished = state.finish();
                self.state = None;
                return finished.err().map(Err);
            };
            if let Err(e) = result {
                self.state = None;
                return Some(Err(e));
            }
        }
    }
}

#[derive(Debug)]
struct LexerState {
    cursor: Cursor,
    node: State,
}

impl LexerState {
    fn step(&mut self) -> Result<(), LexerError> {
        let Some(c) = self.cursor.current() else {
            return Ok(());
        };
        let node = std::mem::replace(&mut self.node, State::Start);
        let name: &'static str = (&node).into();
        let step = node
            .consume(c, &mut self.cursor)
            .map_err(|problem| self.error(problem, name))?;
        let next = match step {
            Step::Advance(next) => {
                self.cursor.head += 1;
                next
            }
            Step::Reread(next) => next,
        };
        let next_name: &'static str = (&next).into();
        if next_name != name {
            trace!(from = name, to = next_name, head = self.cursor.head, "transition");
        }
        self.node = next;
        Ok(())
    }

    /// Input is padded so that a well formed source always ends inside a comment
    fn finish(&self) -> Result<(), LexerError> {
        match self.node {
            State::Comment => Ok(()),
            _ => Err(LexerError::new(
                LexProblem::UnexpectedEof,
                self.cursor.head,
                Found::Eof,
                (&self.node).into(),
            )),
        }
    }

    fn error(&self, problem: LexProblem, state: &'static str) -> LexerError {
        let found = self.cursor.current().map_or(Found::Eof, Found::Char);
        LexerError::new(problem, self.cursor.head, found, state)
    }
}

/// Tokenizes an entire source
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new().lex(src).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg_tokens::{Spanned, TokenKind};
    use test_log::test;

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   ").unwrap(), vec![]);
        assert_eq!(tokenize("# just a comment").unwrap(), vec![]);
    }

    #[test]
    fn test_lexer_is_reusable() {
        let mut lexer = Lexer::new();
        let first = lexer.lex("ls").collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(first, vec![Token::from((TokenKind::ExecArg, "ls"))]);
        let second = lexer.lex("x = 1").collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(second.len(), 3);
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_reset_discards_input() {
        let mut lexer = Lexer::new();
        lexer.lex("a b c");
        assert!(lexer.next().is_some());
        lexer.reset();
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lazy_tokens_before_error() {
        let mut lexer = Lexer::new();
        lexer.lex("x = 1 ?");
        assert_eq!(lexer.next().unwrap().unwrap().kind(), TokenKind::Name);
        assert_eq!(lexer.next().unwrap().unwrap().kind(), TokenKind::Assign);
        assert_eq!(lexer.next().unwrap().unwrap().kind(), TokenKind::Integer);
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none(), "lexing stops after an error");
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("foo := 45kb").unwrap();
        assert_eq!(tokens[0].span().offset(), 0);
        assert_eq!(tokens[0].span().len(), 3);
        assert_eq!(tokens[1].span().offset(), 4);
        assert_eq!(tokens[1].span().len(), 2);
        assert_eq!(tokens[2].span().offset(), 7);
        assert_eq!(tokens[2].span().len(), 4);
        assert_eq!(tokens[2].text(), "45:kb");
    }

    #[test]
    fn test_error_details() {
        let error = tokenize("?").unwrap_err();
        assert_eq!(error.problem(), &LexProblem::UnimplementedChar);
        assert_eq!(error.offset(), 0);
        assert_eq!(error.found(), Found::Char('?'));
        assert_eq!(error.state(), "Start");

        let error = tokenize("\"abc").unwrap_err();
        assert_eq!(error.problem(), &LexProblem::UnexpectedEof);
        assert_eq!(error.found(), Found::Eof);
        assert_eq!(error.offset(), 6);
        assert_eq!(error.state(), "QuotedLiteral");
    }
}

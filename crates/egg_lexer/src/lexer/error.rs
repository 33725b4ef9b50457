use egg_tokens::units::UnknownUnit;
use egg_tokens::{Span, Spanned};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A failure to tokenize some input. Lexing stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{problem} at offset {offset} (found {found}) while in the {state} state")]
pub struct LexerError {
    problem: LexProblem,
    offset: usize,
    found: Found,
    state: &'static str,
}

impl LexerError {
    pub(crate) fn new(problem: LexProblem, offset: usize, found: Found, state: &'static str) -> Self {
        Self {
            problem,
            offset,
            found,
            state,
        }
    }

    /// What went wrong
    pub fn problem(&self) -> &LexProblem {
        &self.problem
    }

    /// The char offset the lexer was reading when the error occurred
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The char that triggered the error
    pub fn found(&self) -> Found {
        self.found
    }

    /// The name of the state the lexer was in
    pub fn state(&self) -> &'static str {
        self.state
    }
}

impl Spanned for LexerError {
    fn span(&self) -> Span {
        match self.found {
            Found::Char(_) => Span::new(self.offset, 1),
            Found::Eof => Span::empty(self.offset),
        }
    }
}

/// The offending input of a [`LexerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    Eof,
}

impl Display for Found {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Found::Char(c) => write!(f, "{c:?}"),
            Found::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexProblem {
    /// No state knows what to do with this char
    #[error("read unimplemented char")]
    UnimplementedChar,
    #[error("read unexpected char")]
    UnexpectedChar,
    /// Input ended inside a string, command argument list or identifier
    #[error("read unexpected end of input")]
    UnexpectedEof,
    #[error("identifier is empty")]
    EmptyIdentifier,
    #[error("number literal has unknown unit: {0}")]
    UnknownUnit(String),
}

impl From<UnknownUnit> for LexProblem {
    fn from(value: UnknownUnit) -> Self {
        LexProblem::UnknownUnit(value.0)
    }
}

#![doc = include_str!("../README.md")]

pub mod lexer;
pub mod max_munch;
pub mod operators;

pub use lexer::{tokenize, Found, LexProblem, Lexer, LexerError};

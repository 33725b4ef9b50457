#![doc = include_str!("../README.md")]

pub mod keywords;
pub mod span;
pub mod token;
pub mod units;

pub use span::{Span, Spanned};
pub use token::{Token, TokenKind};

//! Locations of tokens within a source string

use std::fmt::{Display, Formatter};

/// A trait that can provide the [Span] of something read from a source
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A region of a source string, measured in characters
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Creates a zero-length span at an offset
    pub const fn empty(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    /// The character offset this span starts at
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the 1-based line and 0-based column of the start of this span within `src`
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        src.chars()
            .take(self.offset)
            .fold((1, 0), |(line, col), c| match c {
                '\n' => (line + 1, 0),
                _ => (line, col + 1),
            })
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.offset, self.offset + self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let src = "ls -la\n  echo hi";
        assert_eq!(Span::new(0, 2).line_col(src), (1, 0));
        assert_eq!(Span::new(9, 4).line_col(src), (2, 2));
    }
}

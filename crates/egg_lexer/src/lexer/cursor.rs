use crate::operators::{ALL_OPERATORS_TRIE, NON_ARITHMETIC_TRIE};
use crate::max_munch::TrieMatch;
use egg_tokens::{Span, Token, TokenKind};
use std::collections::VecDeque;
use tracing::trace;

/// Appended to every input so that the last token is always flushed and lexing
/// finishes inside a comment.
pub(super) const SENTINEL: &str = " #";

/// Position and context of the lexer within its input
#[derive(Debug)]
pub(super) struct Cursor {
    data: Vec<char>,
    pub head: usize,
    pub token_start: usize,
    prev: Option<TokenKind>,
    paren_depth: usize,
    curly_depth: usize,
    square_depth: usize,
    out: VecDeque<Token>,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            data: src.chars().chain(SENTINEL.chars()).collect(),
            head: 0,
            token_start: 0,
            prev: None,
            paren_depth: 0,
            curly_depth: 0,
            square_depth: 0,
            out: VecDeque::new(),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.data.get(self.head).copied()
    }

    pub fn next_char(&self) -> Option<char> {
        self.data.get(self.head + 1).copied()
    }

    /// The first char after the head that isn't whitespace
    pub fn next_non_whitespace(&self) -> Option<char> {
        self.data[self.head + 1..]
            .iter()
            .copied()
            .find(|c| !c.is_whitespace())
    }

    /// The run of alphabetic chars starting at the head
    pub fn alphabetic_run(&self) -> String {
        self.data[self.head..]
            .iter()
            .take_while(|c| c.is_alphabetic())
            .collect()
    }

    pub fn prev(&self) -> Option<TokenKind> {
        self.prev
    }

    pub fn clear_prev(&mut self) {
        self.prev = None;
    }

    pub fn prev_is(&self, kind: TokenKind) -> bool {
        self.prev == Some(kind)
    }

    /// Whether the cursor is nested inside any bracket pair
    pub fn in_block(&self) -> bool {
        self.paren_depth > 0 || self.curly_depth > 0 || self.square_depth > 0
    }

    pub fn in_parens(&self) -> bool {
        self.paren_depth > 0
    }

    pub fn track_brackets(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::ParenOpen => self.paren_depth += 1,
            TokenKind::ParenClose => self.paren_depth = self.paren_depth.saturating_sub(1),
            TokenKind::CurlyOpen => self.curly_depth += 1,
            TokenKind::CurlyClose => self.curly_depth = self.curly_depth.saturating_sub(1),
            TokenKind::SquareOpen => self.square_depth += 1,
            TokenKind::SquareClose => self.square_depth = self.square_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Finds the operator at the head.
    ///
    /// Arithmetic operators are only recognized inside brackets or when the previous
    /// token wasn't an external command argument.
    pub fn match_operator(&self) -> Option<TrieMatch<TokenKind>> {
        let trie = if self.in_block() || !self.prev_is(TokenKind::ExecArg) {
            &*ALL_OPERATORS_TRIE
        } else {
            &*NON_ARITHMETIC_TRIE
        };
        trie.largest_prefix(&self.data, self.head)
    }

    /// The text from the token start up to the head
    pub fn pending_text(&self) -> String {
        self.text(self.token_start, self.head)
    }

    pub fn text(&self, start: usize, end: usize) -> String {
        self.data[start..end].iter().collect()
    }

    /// Emits a token made of the chars from the token start up to the head
    pub fn emit_pending(&mut self, kind: TokenKind) {
        let text = self.pending_text();
        self.emit(kind, self.token_start, text);
    }

    /// Emits a token whose text was read starting at `start`
    pub fn emit(&mut self, kind: TokenKind, start: usize, text: String) {
        let span = Span::new(start, text.chars().count());
        self.emit_at(span, kind, text);
    }

    /// Emits a token, recording it as the previous token
    pub fn emit_at(&mut self, span: Span, kind: TokenKind, text: String) {
        let token = Token::new(span, kind, text);
        trace!(?token, %span, "emitting");
        self.prev = Some(kind);
        self.out.push_back(token);
    }

    /// Emits an inserted statement terminator, which is not recorded as the previous token
    pub fn emit_terminator(&mut self) {
        trace!(offset = self.head, "emitting statement terminator");
        self.out
            .push_back(Token::synthetic(self.head, TokenKind::Semicolon));
    }

    pub fn pop_token(&mut self) -> Option<Token> {
        self.out.pop_front()
    }

    /// Whether there is still input left to read
    pub fn has_input(&self) -> bool {
        self.head < self.data.len()
    }
}

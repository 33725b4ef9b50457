//! Properties of the lexer checked over pseudo-random sources

use common::assert_reconstructs;
use egg_lexer::tokenize;
use egg_tokens::TokenKind;
use test_log::test;

mod common;

/// A small xorshift generator so sources are the same on every run
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).max(1))
    }

    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const FRAGMENTS: &[&str] = &[
    "ls", "foo", "x", "bar.baz", "_", "1", "42", "2.5", "-3", "10kb", "3Sec", "\"a b\"", "'q'",
    "`cmd -x \"y z\"`", "@name", "+", "-", "*", "/", "//", "**", "%", "|", "==", "..", "...", ":=",
    "=", "+=", "(", ")", "[", "]", "{", "}", ",", ";", "\\", "->", "$", "# note\n", "true", "if",
    "fn", "in",
];

const SEPARATORS: &[&str] = &[" ", " ", "\n", "\t"];

const EXPRESSION_PARTS: &[&str] = &[
    "a", "foo", "x1", "1", "2.5", "-3", "+", "-", "*", "/", "//", "**", "%", "..", "==", "_",
];

fn arithmetic_kind(text: &str) -> Option<TokenKind> {
    match text {
        "+" => Some(TokenKind::Plus),
        "-" => Some(TokenKind::Minus),
        "*" => Some(TokenKind::Times),
        "/" => Some(TokenKind::Divide),
        "//" => Some(TokenKind::IntDiv),
        "**" => Some(TokenKind::Power),
        "%" => Some(TokenKind::Mod),
        _ => None,
    }
}

fn expression_parts(rng: &mut XorShift) -> Vec<&'static str> {
    let count = 1 + rng.below(10);
    (0..count).map(|_| rng.pick(EXPRESSION_PARTS)).collect()
}

#[test]
fn test_token_text_covers_source() {
    for seed in 1..=256_u64 {
        let mut rng = XorShift::new(seed);
        let count = 1 + rng.below(12);
        let mut src = String::new();
        for _ in 0..count {
            src.push_str(rng.pick(FRAGMENTS));
            src.push_str(rng.pick(SEPARATORS));
        }
        let tokens = tokenize(&src).unwrap_or_else(|e| panic!("failed to lex {src:?}: {e}"));
        assert_reconstructs(&src, &tokens);
    }
}

#[test]
fn test_brackets_enable_arithmetic() {
    for seed in 1..=256_u64 {
        let mut rng = XorShift::new(seed);
        let parts = expression_parts(&mut rng);
        let (open, close) = [("(", ")"), ("[", "]"), ("{", "}")][rng.below(3)];
        let src = format!("{open}{}{close}", parts.join(" "));
        let tokens = tokenize(&src).unwrap_or_else(|e| panic!("failed to lex {src:?}: {e}"));
        for token in &tokens {
            assert_ne!(token.kind(), TokenKind::ExecArg, "{token:?} in {src:?}");
            if let Some(kind) = arithmetic_kind(token.text()) {
                assert_eq!(token.kind(), kind, "{token:?} in {src:?}");
            }
        }
    }
}

#[test]
fn test_command_arguments_disable_arithmetic() {
    for seed in 1..=256_u64 {
        let mut rng = XorShift::new(seed);
        let parts = expression_parts(&mut rng)
            .into_iter()
            .filter(|part| !matches!(*part, ".." | "==" | "_"))
            .collect::<Vec<_>>();
        let src = format!("ls {}", parts.join(" "));
        let tokens = tokenize(&src).unwrap_or_else(|e| panic!("failed to lex {src:?}: {e}"));
        assert!(
            tokens.iter().all(|token| token.kind() == TokenKind::ExecArg),
            "{src:?} lexed to {tokens:?}"
        );
        assert_reconstructs(&src, &tokens);
    }
}

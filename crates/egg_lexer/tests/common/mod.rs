//! Assertions shared by the lexer integration tests

#![allow(dead_code)]

use egg_lexer::tokenize;
use egg_tokens::{Token, TokenKind};

/// Checks the kinds and texts `src` lexes to, and that the texts account for every
/// significant char of `src`
pub fn assert_lexes(src: &str, expected: &[(TokenKind, &str)]) {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("failed to lex {src:?}: {e}"));
    let actual = tokens
        .iter()
        .map(|token| (token.kind(), token.text()))
        .collect::<Vec<_>>();
    assert_eq!(actual, expected, "tokens of {src:?}");
    assert_reconstructs(src, &tokens);
}

/// The chars of `src` that show up in token text.
///
/// Comments, whitespace and `@` prefixes are dropped, as are the quotes around
/// literals and around the quoted arguments of a backtick list. Escapes are kept.
pub fn significant(src: &str) -> String {
    let mut out = String::new();
    let mut chars = src.chars();
    let mut quote: Option<char> = None;
    let mut inner: Option<char> = None;
    let mut escaped = false;
    while let Some(c) = chars.next() {
        match quote {
            None => match c {
                '#' => chars.by_ref().take_while(|&c| c != '\n').for_each(drop),
                '"' | '\'' | '`' => quote = Some(c),
                '@' => {}
                _ if c.is_whitespace() => {}
                _ => out.push(c),
            },
            Some(_) if escaped => {
                out.push(c);
                escaped = false;
            }
            Some(_) if c == '\\' => {
                out.push(c);
                escaped = true;
            }
            Some('`') if inner.is_none() && (c == '"' || c == '\'') => inner = Some(c),
            Some('`') if inner == Some(c) => inner = None,
            Some(open) if open == c && inner.is_none() => quote = None,
            Some(_) if c.is_whitespace() => {}
            Some(_) => out.push(c),
        }
    }
    out
}

fn is_unit(token: &Token) -> bool {
    matches!(token.kind(), TokenKind::UnitInteger | TokenKind::UnitFloat)
}

/// The texts of all non-synthetic tokens joined, without whitespace. Unit literals
/// lose the `:` between their value and unit.
pub fn reconstructed(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|token| !token.is_synthetic()) {
        let unit = is_unit(token);
        out.extend(
            token
                .text()
                .chars()
                .filter(|&c| !c.is_whitespace() && !(unit && c == ':')),
        );
    }
    out
}

/// Units are lower-cased when lexed, so sources with unit literals compare ignoring case
pub fn assert_reconstructs(src: &str, tokens: &[Token]) {
    let expected = significant(src);
    let actual = reconstructed(tokens);
    if tokens.iter().any(is_unit) {
        assert_eq!(
            actual.to_lowercase(),
            expected.to_lowercase(),
            "token text of {src:?}"
        );
    } else {
        assert_eq!(actual, expected, "token text of {src:?}");
    }
}

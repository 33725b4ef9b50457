//! The compiled-in keyword table

use crate::token::TokenKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Every reserved word and the token it lexes to
pub static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("assert", TokenKind::Assert),
        ("fn", TokenKind::Fn),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("loop", TokenKind::AlwaysLoop),
        ("continue", TokenKind::Continue),
        ("break", TokenKind::Break),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("xor", TokenKind::Xor),
        ("not", TokenKind::Not),
        ("return", TokenKind::Return),
        ("ret", TokenKind::Return),
        ("if", TokenKind::If),
        ("do", TokenKind::Do),
        ("in", TokenKind::In),
        ("import", TokenKind::Import),
        ("else", TokenKind::Else),
        ("elif", TokenKind::Elif),
        ("try", TokenKind::Try),
        ("catch", TokenKind::Catch),
        ("as", TokenKind::As),
        ("var", TokenKind::Var),
        ("const", TokenKind::Const),
        ("class", TokenKind::Class),
        ("with", TokenKind::With),
        ("by", TokenKind::By),
        ("say", TokenKind::Say),
    ])
});

/// Gets the keyword token for a word, if the word is reserved
#[inline]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(keyword("loop"), Some(TokenKind::AlwaysLoop));
        assert_eq!(keyword("ret"), keyword("return"));
        assert_eq!(keyword("cor"), None);
        assert_eq!(keyword("Fn"), None, "keywords are case sensitive");
    }
}

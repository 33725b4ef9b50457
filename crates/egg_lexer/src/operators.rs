//! The operator tables used by the lexer

use crate::max_munch::MaxMunchTrie;
use egg_tokens::TokenKind;
use std::sync::LazyLock;

/// Operators that are recognized even between the arguments of an external command
pub const NON_ARITHMETIC_OPERATORS: &[(&str, TokenKind)] = &[
    ("...", TokenKind::Ellipsis),
    (":=", TokenKind::Declare),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::TimesAssign),
    ("/=", TokenKind::DivideAssign),
    ("%=", TokenKind::ModAssign),
    ("**=", TokenKind::PowerAssign),
    ("//=", TokenKind::IntDivAssign),
    ("++=", TokenKind::ConcatAssign),
    ("|=", TokenKind::PipeAssign),
    ("&&=", TokenKind::SeqAndAssign),
    ("||=", TokenKind::SeqOrAssign),
    (">>", TokenKind::AppendFile),
    ("\\", TokenKind::Lambda),
    ("->", TokenKind::Arrow),
    ("&&", TokenKind::SeqAnd),
    ("||", TokenKind::SeqOr),
    ("::", TokenKind::Namespace),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    (">=", TokenKind::Gte),
    ("<=", TokenKind::Lte),
    ("..", TokenKind::Range),
    ("++", TokenKind::Concat),
    (":", TokenKind::Colon),
    ("=", TokenKind::Assign),
    ("|", TokenKind::Pipe),
    (",", TokenKind::Comma),
    ("(", TokenKind::ParenOpen),
    (")", TokenKind::ParenClose),
    ("{", TokenKind::CurlyOpen),
    ("}", TokenKind::CurlyClose),
    ("<", TokenKind::AngleOpen),
    (">", TokenKind::AngleClose),
    ("[", TokenKind::SquareOpen),
    ("]", TokenKind::SquareClose),
    (";", TokenKind::Semicolon),
    ("$", TokenKind::Curry),
    ("!", TokenKind::Not),
    ("~", TokenKind::Async),
];

/// Operators that only make sense inside an expression. Outside of brackets these
/// are treated as part of external command arguments once such an argument has been seen.
pub const ARITHMETIC_OPERATORS: &[(&str, TokenKind)] = &[
    ("**", TokenKind::Power),
    ("//", TokenKind::IntDiv),
    ("*", TokenKind::Times),
    ("/", TokenKind::Divide),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("%", TokenKind::Mod),
];

/// Trie over [`NON_ARITHMETIC_OPERATORS`]
pub static NON_ARITHMETIC_TRIE: LazyLock<MaxMunchTrie<TokenKind>> =
    LazyLock::new(|| MaxMunchTrie::new(NON_ARITHMETIC_OPERATORS.iter().copied()));

/// Trie over every operator
pub static ALL_OPERATORS_TRIE: LazyLock<MaxMunchTrie<TokenKind>> = LazyLock::new(|| {
    MaxMunchTrie::new(
        NON_ARITHMETIC_OPERATORS
            .iter()
            .chain(ARITHMETIC_OPERATORS)
            .copied(),
    )
});

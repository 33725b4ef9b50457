//! A lexical token from an egg source and the kinds of token

use crate::span::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};
use strum::{AsRefStr, EnumString, IntoStaticStr};

/// A lexical token from an egg source
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            text: text.into(),
        }
    }

    /// Creates a token that has no source text, such as an inserted statement terminator
    pub fn synthetic(offset: usize, kind: TokenKind) -> Self {
        Self::new(Span::empty(offset), kind, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the text of this token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this token was inserted by the lexer rather than read from the source.
    ///
    /// Only statement terminators are ever inserted.
    pub fn is_synthetic(&self) -> bool {
        self.kind == TokenKind::Semicolon && self.text.is_empty()
    }

    /// Consumes this token, returning its text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}: {:?}>", self.kind, self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl From<(TokenKind, &str)> for Token {
    fn from((kind, text): (TokenKind, &str)) -> Self {
        Token::new(Span::empty(0), kind, text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The kind for this token.
///
/// Kinds are named in `SCREAMING_SNAKE_CASE` when displayed, which is also the
/// name the external grammar uses for its terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // content
    Name,
    ExecArg,
    Integer,
    Float,
    UnitInteger,
    UnitFloat,
    QuotedString,
    ImplicitLambdaParam,

    // keywords
    Assert,
    Fn,
    For,
    While,
    AlwaysLoop,
    Continue,
    Break,
    True,
    False,
    And,
    Or,
    Xor,
    /// Both the `not` keyword and `!`
    Not,
    Return,
    If,
    Do,
    In,
    Import,
    Else,
    Elif,
    Try,
    Catch,
    As,
    Var,
    Const,
    Class,
    With,
    By,
    Say,

    // structure
    /// `...`
    Ellipsis,
    /// `:=`
    Declare,
    /// `=`
    Assign,
    /// `:`
    Colon,
    /// `::`
    Namespace,
    /// `.`
    Dot,
    /// `..`
    Range,
    Comma,
    Semicolon,
    Pipe,
    /// `\`
    Lambda,
    /// `->`
    Arrow,
    /// `$`
    Curry,
    /// `~`
    Async,
    /// `>>`
    AppendFile,
    ParenOpen,
    ParenClose,
    CurlyOpen,
    CurlyClose,
    SquareOpen,
    SquareClose,
    AngleOpen,
    AngleClose,

    // comparison and sequencing
    Equals,
    NotEquals,
    Gte,
    Lte,
    SeqAnd,
    SeqOr,
    Concat,

    // arithmetic
    Plus,
    Minus,
    Times,
    Divide,
    IntDiv,
    Mod,
    Power,

    // compound assignment
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    ModAssign,
    PowerAssign,
    IntDivAssign,
    ConcatAssign,
    PipeAssign,
    SeqAndAssign,
    SeqOrAssign,
}

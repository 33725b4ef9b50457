//! The states of the lexer and the transitions between them

use super::cursor::Cursor;
use super::error::LexProblem;
use crate::max_munch::TrieMatch;
use crate::operators::ALL_OPERATORS_TRIE;
use egg_tokens::keywords::keyword;
use egg_tokens::units::unit_category;
use egg_tokens::{Span, TokenKind};
use strum::IntoStaticStr;

/// A state of the lexer. Each state consumes one char at a time.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub(super) enum State {
    Start,
    /// An operator was matched at the token start
    Operator(TrieMatch<TokenKind>),
    Comment,
    /// An `@`-prefixed name that is always a `NAME`
    Identifier,
    QuotedLiteral {
        quote: char,
        escaped: bool,
    },
    /// A backtick-delimited list of external command arguments
    QuotedArgList {
        escaped: bool,
        quote: Option<char>,
    },
    /// A bare word whose kind depends on context
    UnquotedLiteral,
    Number {
        has_decimal: bool,
        first_char: bool,
    },
}

/// What the lexer should do after a state consumed a char
#[derive(Debug)]
pub(super) enum Step {
    /// Move on to the next char
    Advance(State),
    /// Feed the same char to the next state
    Reread(State),
}

impl State {
    pub fn consume(self, c: char, cursor: &mut Cursor) -> Result<Step, LexProblem> {
        match self {
            State::Start => start(c, cursor),
            State::Operator(matched) => {
                cursor.head += matched.len - 1;
                cursor.track_brackets(matched.value);
                let text = cursor.text(cursor.token_start, cursor.head + 1);
                cursor.emit(matched.value, cursor.token_start, text);
                Ok(Step::Advance(State::Start))
            }
            State::Comment => {
                if c == '\n' {
                    newline(cursor);
                    Ok(Step::Advance(State::Start))
                } else {
                    Ok(Step::Advance(State::Comment))
                }
            }
            State::Identifier => identifier(c, cursor),
            State::QuotedLiteral { quote, escaped } => {
                if escaped || c == '\\' {
                    Ok(Step::Advance(State::QuotedLiteral {
                        quote,
                        escaped: !escaped,
                    }))
                } else if c == quote {
                    let kind = if cursor.prev_is(TokenKind::ExecArg) {
                        TokenKind::ExecArg
                    } else {
                        TokenKind::QuotedString
                    };
                    cursor.emit_pending(kind);
                    Ok(Step::Advance(State::Start))
                } else {
                    Ok(Step::Advance(State::QuotedLiteral { quote, escaped }))
                }
            }
            State::QuotedArgList { escaped, quote } => quoted_arg_list(c, escaped, quote, cursor),
            State::UnquotedLiteral => unquoted_literal(c, cursor),
            State::Number {
                has_decimal,
                first_char,
            } => number(c, has_decimal, first_char, cursor),
        }
    }
}

/// A newline ends a statement unless inside parentheses, and resets the token history
fn newline(cursor: &mut Cursor) {
    if !cursor.in_parens() {
        cursor.emit_terminator();
    }
    cursor.clear_prev();
}

fn start(c: char, cursor: &mut Cursor) -> Result<Step, LexProblem> {
    if c == '\n' {
        newline(cursor);
        return Ok(Step::Advance(State::Start));
    }
    if c.is_whitespace() {
        return Ok(Step::Advance(State::Start));
    }
    if let Some(matched) = ALL_OPERATORS_TRIE
        .starts_pattern(c)
        .then(|| cursor.match_operator())
        .flatten()
    {
        cursor.token_start = cursor.head;
        return Ok(Step::Reread(State::Operator(matched)));
    }
    if c.is_ascii_digit() || (c == '-' && cursor.next_char().is_some_and(|n| n.is_ascii_digit())) {
        cursor.token_start = cursor.head;
        return Ok(Step::Reread(State::Number {
            has_decimal: false,
            first_char: true,
        }));
    }
    if c.is_alphabetic() || "./*+-%_".contains(c) {
        cursor.token_start = cursor.head;
        return Ok(Step::Reread(State::UnquotedLiteral));
    }
    let next = match c {
        '#' => State::Comment,
        '@' => State::Identifier,
        '"' | '\'' => State::QuotedLiteral {
            quote: c,
            escaped: false,
        },
        '`' => State::QuotedArgList {
            escaped: false,
            quote: None,
        },
        _ => return Err(LexProblem::UnimplementedChar),
    };
    cursor.token_start = cursor.head + 1;
    Ok(Step::Advance(next))
}

fn identifier(c: char, cursor: &mut Cursor) -> Result<Step, LexProblem> {
    if c == '.' && cursor.next_char() != Some('.') {
        if cursor.token_start == cursor.head {
            return Err(LexProblem::EmptyIdentifier);
        }
        cursor.emit_pending(TokenKind::Name);
        cursor.emit(TokenKind::Dot, cursor.head, ".".to_string());
        cursor.token_start = cursor.head + 1;
        Ok(Step::Advance(State::Identifier))
    } else if c.is_whitespace() || ":=+-/[]{}()<>.".contains(c) {
        if cursor.token_start == cursor.head {
            return Err(LexProblem::EmptyIdentifier);
        }
        cursor.emit_pending(TokenKind::Name);
        Ok(Step::Reread(State::Start))
    } else if c == '@' {
        Err(LexProblem::UnexpectedChar)
    } else {
        Ok(Step::Advance(State::Identifier))
    }
}

fn quoted_arg_list(
    c: char,
    escaped: bool,
    quote: Option<char>,
    cursor: &mut Cursor,
) -> Result<Step, LexProblem> {
    if escaped || c == '\\' {
        return Ok(Step::Advance(State::QuotedArgList {
            escaped: !escaped,
            quote,
        }));
    }
    let mut quote = quote;
    match c {
        '\'' | '"' => match quote {
            None => {
                quote = Some(c);
                cursor.token_start = cursor.head + 1;
            }
            Some(open) if open == c => {
                quote = None;
                cursor.emit_pending(TokenKind::ExecArg);
                cursor.token_start = cursor.head + 1;
            }
            Some(_) => {}
        },
        _ if quote.is_some() => {}
        '|' => {
            flush_arg(cursor);
            cursor.emit(TokenKind::Pipe, cursor.head, "|".to_string());
            cursor.token_start = cursor.head + 1;
        }
        '`' => {
            flush_arg(cursor);
            return Ok(Step::Advance(State::Start));
        }
        _ if c.is_whitespace() => {
            flush_arg(cursor);
            cursor.token_start = cursor.head + 1;
        }
        _ => {}
    }
    Ok(Step::Advance(State::QuotedArgList {
        escaped: false,
        quote,
    }))
}

/// Emits the argument being read by a quoted argument list, if there is one
fn flush_arg(cursor: &mut Cursor) {
    if cursor.head != cursor.token_start {
        cursor.emit_pending(TokenKind::ExecArg);
    }
}

/// Token kinds after which a bare word is a name rather than a command argument
fn precedes_name(kind: TokenKind) -> bool {
    use TokenKind::*;
    matches!(
        kind,
        As | Break
            | Catch
            | Class
            | Colon
            | Continue
            | Dot
            | Ellipsis
            | For
            | Fn
            | Lambda
            | Namespace
            | ParenClose
            | SquareClose
            | Power
            | IntDiv
            | Times
            | Divide
            | Plus
            | Minus
            | Mod
    )
}

/// Decides what kind of token a bare word is, given what came before it
fn word_kind(word: &str, cursor: &Cursor) -> TokenKind {
    if cursor.prev_is(TokenKind::ExecArg) {
        return TokenKind::ExecArg;
    }
    if let Some(kind) = keyword(word) {
        return kind;
    }
    if word == "_" || word.starts_with("_.") {
        return TokenKind::ImplicitLambdaParam;
    }
    if cursor.in_block() || cursor.prev().is_some_and(precedes_name) {
        TokenKind::Name
    } else {
        TokenKind::ExecArg
    }
}

fn unquoted_literal(c: char, cursor: &mut Cursor) -> Result<Step, LexProblem> {
    let (c, space) = if c.is_whitespace() && c != '\n' {
        (cursor.next_non_whitespace().unwrap_or(c), true)
    } else {
        (c, false)
    };
    let word = cursor.pending_text();
    let predicted = word_kind(&word, cursor);
    let followed_by_range = c == '.' && cursor.next_char() == Some('.');

    if !space
        && c == '.'
        && !followed_by_range
        && matches!(predicted, TokenKind::Name | TokenKind::ImplicitLambdaParam)
    {
        if !word.is_empty() {
            cursor.emit_pending(predicted);
        }
        cursor.emit(TokenKind::Dot, cursor.head, ".".to_string());
        Ok(Step::Advance(State::Start))
    } else if "(:=".contains(c) {
        if keyword(&word).is_some() {
            cursor.emit_pending(predicted);
        } else {
            emit_dotted_name(&word, cursor);
        }
        Ok(Step::Reread(State::Start))
    } else if space || "<>{}[])|;,\n".contains(c) || followed_by_range {
        cursor.emit_pending(predicted);
        Ok(Step::Reread(State::Start))
    } else if c == '@' {
        Err(LexProblem::UnexpectedChar)
    } else {
        Ok(Step::Advance(State::UnquotedLiteral))
    }
}

/// Emits a word that is followed by a call, declaration or assignment as a
/// dotted path of names.
fn emit_dotted_name(word: &str, cursor: &mut Cursor) {
    let mut offset = cursor.token_start;
    let mut parts = word.split('.').peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            let kind = if part == "_" {
                TokenKind::ImplicitLambdaParam
            } else {
                TokenKind::Name
            };
            cursor.emit(kind, offset, part.to_string());
        }
        offset += part.chars().count();
        if parts.peek().is_some() {
            cursor.emit(TokenKind::Dot, offset, ".".to_string());
            offset += 1;
        }
    }
}

fn number(
    c: char,
    has_decimal: bool,
    first_char: bool,
    cursor: &mut Cursor,
) -> Result<Step, LexProblem> {
    let number_kind = |cursor: &Cursor, has_decimal: bool| {
        if cursor.prev_is(TokenKind::ExecArg) {
            TokenKind::ExecArg
        } else if has_decimal {
            TokenKind::Float
        } else {
            TokenKind::Integer
        }
    };

    if c == '.' {
        if cursor.next_char() == Some('.') {
            cursor.emit_pending(number_kind(cursor, has_decimal));
            return Ok(Step::Reread(State::Start));
        }
        if has_decimal {
            return Err(LexProblem::UnexpectedChar);
        }
        return Ok(Step::Advance(State::Number {
            has_decimal: true,
            first_char: false,
        }));
    }
    if c.is_ascii_digit() || (first_char && c == '-') {
        return Ok(Step::Advance(State::Number {
            has_decimal,
            first_char: false,
        }));
    }

    let kind = number_kind(cursor, has_decimal);
    if kind != TokenKind::ExecArg && c.is_alphabetic() {
        let unit = cursor.alphabetic_run().to_lowercase();
        unit_category(&unit)?;
        let kind = if has_decimal {
            TokenKind::UnitFloat
        } else {
            TokenKind::UnitInteger
        };
        let unit_len = unit.chars().count();
        let span = Span::new(cursor.token_start, cursor.head + unit_len - cursor.token_start);
        let text = format!("{}:{}", cursor.pending_text(), unit);
        cursor.emit_at(span, kind, text);
        cursor.head += unit_len;
    } else {
        cursor.emit_pending(kind);
    }
    Ok(Step::Reread(State::Start))
}

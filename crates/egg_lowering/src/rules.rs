//! The rewrite applied to each tree once its children are lowered

use crate::poison::{Lowered, PoisonedLambda};
use crate::SHORTHAND_SELECT_PARAM_NAME;
use egg_ast::{tags, tree, Leaf, Node, Tree};
use egg_tokens::units::unit_category;
use tracing::{trace, warn};

/// Rewrites a tree whose children have already been lowered. Tags without a rule
/// are rebuilt unchanged.
pub(crate) fn apply(tag: String, children: Vec<Node>) -> Lowered {
    let rewritten = match tag.as_str() {
        tags::EXEC => exec(children),
        tags::UNIT_INTEGER_LITERAL | tags::UNIT_FLOAT_LITERAL => unit_literal(&tag, children),
        tags::IMPLICIT_LAMBDA_PARAM => return Lowered::Poisoned(PoisonedLambda::identity()),
        tags::ALWAYS_LOOP => {
            let mut items = vec![Node::from(true)];
            items.extend(children);
            Ok(Tree::new(tags::WHILE, items))
        }
        tags::SELECTION_LAMBDA_SHORTHAND => selection_shorthand(children),
        tags::SEQ_AND_ASSIGN => sequence_assignment(tags::AND_SEQUENCE, children),
        tags::SEQ_OR_ASSIGN => sequence_assignment(tags::OR_SEQUENCE, children),
        other => match compound_operator(other) {
            Some(operator) => compound_assignment(operator, children),
            None => Err(children),
        },
    };
    match rewritten {
        Ok(tree) => {
            trace!(from = %tag, to = tree.tag(), "rewrote tree");
            Lowered::Tree(tree)
        }
        Err(children) => Lowered::Tree(Tree::new(tag, children)),
    }
}

/// The operator a compound assignment tag desugars to
fn compound_operator(tag: &str) -> Option<&'static str> {
    let operator = match tag {
        tags::PLUS_ASSIGN => tags::ADDITION,
        tags::MINUS_ASSIGN => tags::SUBTRACTION,
        tags::TIMES_ASSIGN => tags::MULTIPLY,
        tags::DIVIDE_ASSIGN => tags::DIVIDE,
        tags::INT_DIV_ASSIGN => tags::INT_DIVIDE,
        tags::MOD_ASSIGN => tags::MODULUS,
        tags::POWER_ASSIGN => tags::RAISE_POWER,
        tags::PIPE_ASSIGN => tags::PIPELINE,
        tags::CONCAT_ASSIGN => tags::CONCATENATE,
        _ => return None,
    };
    Some(operator)
}

/// A rule either produces its replacement or hands the children back untouched
type RuleResult = Result<Tree, Vec<Node>>;

fn exec(children: Vec<Node>) -> RuleResult {
    let args = children
        .into_iter()
        .map(|child| match child {
            Node::Leaf(Leaf::Str(s)) => Node::Leaf(Leaf::Str(s)),
            Node::Leaf(leaf) => Node::from(leaf.to_string()),
            tree => tree,
        })
        .collect();
    Ok(Tree::new(tags::EXEC, args))
}

/// `value:unit` to `unit_literal(unit_type(category), unit(unit), value)`
fn unit_literal(tag: &str, children: Vec<Node>) -> RuleResult {
    let [Node::Leaf(leaf)] = children.as_slice() else {
        warn!(tag, "unit literal should have exactly one leaf");
        return Err(children);
    };
    let Some((value, unit)) = leaf.as_text().and_then(|text| text.split_once(':')) else {
        warn!(tag, %leaf, "unit literal is not of the form value:unit");
        return Err(children);
    };
    let category = match unit_category(unit) {
        Ok(category) => category,
        Err(e) => {
            warn!(tag, %leaf, "{e}");
            return Err(children);
        }
    };
    let value = if tag == tags::UNIT_FLOAT_LITERAL {
        value.parse::<f64>().ok().map(Node::from)
    } else {
        value.parse::<i64>().ok().map(Node::from)
    };
    let Some(value) = value else {
        warn!(tag, %leaf, "unit literal has an unparsable value");
        return Err(children);
    };
    Ok(tree!(
        tags::UNIT_LITERAL,
        tree!(tags::UNIT_TYPE, category.as_ref()),
        tree!(tags::UNIT, unit.to_lowercase()),
        value
    ))
}

/// `a OP= b` to `reassign(a, OP(a, b))`
fn compound_assignment(operator: &str, children: Vec<Node>) -> RuleResult {
    let (target, value) = binary(children)?;
    Ok(tree!(
        tags::REASSIGN,
        target.clone(),
        tree!(operator, target, value)
    ))
}

/// `a &&= b` to `reassign(a, logical_sequence(and_sequence(a, b)))`
fn sequence_assignment(sequence: &str, children: Vec<Node>) -> RuleResult {
    let (target, value) = binary(children)?;
    Ok(tree!(
        tags::REASSIGN,
        target.clone(),
        tree!(tags::LOGICAL_SEQUENCE, tree!(sequence, target, value))
    ))
}

fn binary(children: Vec<Node>) -> Result<(Node, Node), Vec<Node>> {
    match <[Node; 2]>::try_from(children) {
        Ok([a, b]) => Ok((a, b)),
        Err(children) => {
            warn!(len = children.len(), "expected an assignment target and value");
            Err(children)
        }
    }
}

/// `...field` to `\x -> x.field`
fn selection_shorthand(children: Vec<Node>) -> RuleResult {
    let [field] = <[Node; 1]>::try_from(children)?;
    let selection = tree!(
        tags::SELECT_FIELD,
        tree!(tags::IDENTIFIER, SHORTHAND_SELECT_PARAM_NAME),
        field
    );
    Ok(tree!(tags::LAMBDA_FUNC, SHORTHAND_SELECT_PARAM_NAME, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg_tokens::{Token, TokenKind};
    use test_log::test;

    fn plain(lowered: Lowered) -> Tree {
        match lowered {
            Lowered::Tree(tree) => tree,
            Lowered::Poisoned(p) => panic!("unexpected poison: {p:?}"),
        }
    }

    #[test]
    fn test_exec_stringifies_tokens() {
        let lowered = plain(apply(
            "exec".to_string(),
            vec![
                Token::from((TokenKind::ExecArg, "ls")).into(),
                Token::from((TokenKind::ExecArg, "-o")).into(),
                "foo".into(),
            ],
        ));
        assert_eq!(lowered, tree!("exec", "ls", "-o", "foo"));
    }

    #[test]
    fn test_unit_integer() {
        let lowered = plain(apply(
            "unit_integer_literal".to_string(),
            vec![Token::from((TokenKind::UnitInteger, "45:kb")).into()],
        ));
        assert_eq!(
            lowered,
            tree!(
                "unit_literal",
                tree!("unit_type", "size"),
                tree!("unit", "kb"),
                45_i64
            )
        );
    }

    #[test]
    fn test_unit_float() {
        let lowered = plain(apply(
            "unit_float_literal".to_string(),
            vec!["2.5:min".into()],
        ));
        assert_eq!(
            lowered,
            tree!(
                "unit_literal",
                tree!("unit_type", "time"),
                tree!("unit", "min"),
                2.5_f64
            )
        );
    }

    #[test]
    fn test_malformed_unit_literal_is_kept() {
        for text in ["45", "45:parsecs", "x:kb"] {
            let lowered = plain(apply("unit_integer_literal".to_string(), vec![text.into()]));
            assert_eq!(lowered, tree!("unit_integer_literal", text));
        }
        let lowered = plain(apply("unit_integer_literal".to_string(), vec![]));
        assert_eq!(lowered, tree!("unit_integer_literal"));
    }

    #[test]
    fn test_compound_assignment_with_wrong_arity_is_kept() {
        let lowered = plain(apply("plus_assign".to_string(), vec!["a".into()]));
        assert_eq!(lowered, tree!("plus_assign", "a"));
    }

    #[test]
    fn test_always_loop() {
        let body = tree!("block", tree!("exec", "ls"));
        let lowered = plain(apply("always_loop".to_string(), vec![body.clone().into()]));
        assert_eq!(lowered, tree!("while", true, body));
    }

    #[test]
    fn test_implicit_param_is_poisoned() {
        assert_eq!(
            apply("implicit_lambda_param".to_string(), vec![]),
            Lowered::Poisoned(PoisonedLambda::identity())
        );
    }

    #[test]
    fn test_unknown_tag_is_unchanged() {
        let lowered = plain(apply("frobnicate".to_string(), vec![1_i64.into()]));
        assert_eq!(lowered, tree!("frobnicate", 1_i64));
    }
}

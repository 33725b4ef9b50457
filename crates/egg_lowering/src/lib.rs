#![doc = include_str!("../README.md")]

use crate::poison::{is_poison_boundary, Lowered, PoisonedLambda};
use egg_ast::{Node, Tree};
use tracing::{debug, trace};

mod poison;
mod rules;

/// The parameter name of lambdas created from a bare `_`
pub const IMPLICIT_LAMBDA_PARAM_NAME: &str = "@@implicit_lambda@@";
/// The parameter name of lambdas created from `...field`
pub const SHORTHAND_SELECT_PARAM_NAME: &str = "@@shorthand_select@@";

/// Lowers a raw parse tree into its canonical form.
///
/// Children are lowered before their parent. A tree still waiting on an implicit
/// lambda once the root is reached is closed at the root, so the result never
/// contains any intermediate marker.
pub fn lower(tree: Tree) -> Tree {
    debug!(root = tree.tag(), "lowering");
    lower_tree(tree).finish()
}

fn lower_tree(tree: Tree) -> Lowered {
    let (tag, children) = tree.into_parts();
    let boundary = is_poison_boundary(&tag);
    let mut poisoned = false;
    let children = children
        .into_iter()
        .map(|child| match child {
            Node::Tree(child) => match lower_tree(child) {
                Lowered::Tree(tree) => Node::Tree(tree),
                Lowered::Poisoned(lambda) if boundary => Node::Tree(lambda.into_lambda()),
                Lowered::Poisoned(lambda) => {
                    poisoned = true;
                    Node::Tree(lambda.into_body())
                }
            },
            leaf => leaf,
        })
        .collect();

    match rules::apply(tag, children) {
        Lowered::Tree(tree) if poisoned => {
            trace!(tag = tree.tag(), "implicit lambda absorbed parent");
            Lowered::Poisoned(PoisonedLambda::new(tree))
        }
        lowered => lowered,
    }
}

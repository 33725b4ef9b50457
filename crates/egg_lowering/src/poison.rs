//! Implicit lambdas that haven't found their enclosing expression yet

use crate::IMPLICIT_LAMBDA_PARAM_NAME;
use egg_ast::{tags, tree, Tree};

/// A lambda over the implicit parameter whose body may still grow to cover its parent
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PoisonedLambda {
    param: &'static str,
    body: Tree,
}

impl PoisonedLambda {
    pub fn new(body: Tree) -> Self {
        Self {
            param: IMPLICIT_LAMBDA_PARAM_NAME,
            body,
        }
    }

    /// `identifier(param)`, the lambda a bare `_` starts as
    pub fn identity() -> Self {
        Self::new(tree!(tags::IDENTIFIER, IMPLICIT_LAMBDA_PARAM_NAME))
    }

    /// Takes the body so that it can become part of a larger body
    pub fn into_body(self) -> Tree {
        self.body
    }

    /// Closes this lambda into an ordinary `lambda_func`
    pub fn into_lambda(self) -> Tree {
        tree!(tags::LAMBDA_FUNC, self.param, self.body)
    }
}

/// The result of lowering a tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Lowered {
    Tree(Tree),
    Poisoned(PoisonedLambda),
}

impl Lowered {
    /// Closes any poisoned lambda, giving a plain tree
    pub fn finish(self) -> Tree {
        match self {
            Lowered::Tree(tree) => tree,
            Lowered::Poisoned(lambda) => lambda.into_lambda(),
        }
    }
}

/// Tags that treat a poisoned child as a finished lambda instead of absorbing it.
///
/// Tags generated for inline grammar rules look like `__pipeline_star_0` and are
/// judged by the rule they were generated from.
pub(crate) fn is_poison_boundary(tag: &str) -> bool {
    let rule = match tag.strip_prefix("__") {
        Some(generated) => generated.split('_').next().unwrap_or(generated),
        None => tag,
    };
    matches!(rule, tags::START | tags::PIPELINE | tags::CURRY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_boundaries() {
        assert!(is_poison_boundary("start"));
        assert!(is_poison_boundary("pipeline"));
        assert!(is_poison_boundary("curry"));
        assert!(is_poison_boundary("__pipeline_star_0"));
        assert!(!is_poison_boundary("addition"));
        assert!(!is_poison_boundary("__addition_star_1"));
        assert!(!is_poison_boundary("pipeline_stage"));
    }

    #[test]
    fn test_finish() {
        let lambda = Lowered::Poisoned(PoisonedLambda::identity()).finish();
        assert_eq!(
            lambda,
            tree!(
                "lambda_func",
                "@@implicit_lambda@@",
                tree!("identifier", "@@implicit_lambda@@")
            )
        );
        let plain = tree!("identifier", "a");
        assert_eq!(Lowered::Tree(plain.clone()).finish(), plain);
    }
}

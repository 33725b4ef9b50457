#![doc = include_str!("../README.md")]

pub mod tags;
pub mod tree;

pub use tree::{Leaf, Node, Tree};

/// Builds a [`Tree`] from a tag and any number of children.
///
/// Each child may be anything convertible into a [`Node`]: another tree, a
/// [`Token`](egg_tokens::Token), a string, an `i64`, an `f64` or a `bool`.
#[macro_export]
macro_rules! tree {
    ($tag:expr $(, $child:expr)* $(,)?) => {
        $crate::Tree::new($tag, vec![$($crate::Node::from($child)),*])
    };
}

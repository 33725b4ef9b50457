//! The generic tree and its leaves

use egg_tokens::Token;
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

/// An interior node of a parse tree, identified only by its tag
#[derive(Clone, PartialEq)]
pub struct Tree {
    tag: String,
    children: Vec<Node>,
}

impl Tree {
    /// Creates a new tree
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Gets the child at `index`
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Splits this tree into its tag and children
    pub fn into_parts(self) -> (String, Vec<Node>) {
        (self.tag, self.children)
    }

    fn pretty(&self, level: usize, f: &mut Formatter<'_>) -> std::fmt::Result {
        let indent = "  ".repeat(level);
        write!(f, "{indent}{}", self.tag)?;
        if let [Node::Leaf(leaf)] = self.children.as_slice() {
            return writeln!(f, "\t{leaf}");
        }
        writeln!(f)?;
        for child in &self.children {
            match child {
                Node::Tree(tree) => tree.pretty(level + 1, f)?,
                Node::Leaf(leaf) => writeln!(f, "{indent}  {leaf}")?,
            }
        }
        Ok(())
    }
}

/// Renders the tree indented, one node per line
impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.pretty(0, f)
    }
}

/// Renders the tree on a single line, as `tag(child, child)`
impl Debug for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({})",
            self.tag,
            self.children.iter().map(|c| format!("{c:?}")).join(", ")
        )
    }
}

/// Either a subtree or a leaf
#[derive(Clone, PartialEq)]
pub enum Node {
    Tree(Tree),
    Leaf(Leaf),
}

impl Node {
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Tree(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Tree(_) => None,
        }
    }

    /// The tag of this node, if it is a tree
    pub fn tag(&self) -> Option<&str> {
        self.as_tree().map(Tree::tag)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Tree(tree) => Debug::fmt(tree, f),
            Node::Leaf(leaf) => Debug::fmt(leaf, f),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Tree(tree) => Display::fmt(tree, f),
            Node::Leaf(leaf) => Display::fmt(leaf, f),
        }
    }
}

/// A literal value at the edge of a tree
#[derive(Clone, PartialEq)]
pub enum Leaf {
    /// A token straight from the lexer
    Token(Token),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Leaf {
    /// The text of this leaf if it is a token or a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Leaf::Token(token) => Some(token.text()),
            Leaf::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Leaf::Token(token) => write!(f, "{}", token.text()),
            Leaf::Str(s) => write!(f, "{s}"),
            Leaf::Int(i) => write!(f, "{i}"),
            Leaf::Float(v) => write!(f, "{v}"),
            Leaf::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Debug for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Leaf::Token(token) => write!(f, "{token:?}"),
            Leaf::Str(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

macro_rules! leaf_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
        impl From<$ty> for Leaf {
            fn from(value: $ty) -> Self {
                Leaf::$variant(value.into())
            }
        }

        impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::Leaf(Leaf::from(value))
            }
        }
        )*
    };
}

leaf_from! {
    Token => Token,
    String => Str,
    &str => Str,
    i64 => Int,
    f64 => Float,
    bool => Bool,
}

impl From<Tree> for Node {
    fn from(value: Tree) -> Self {
        Node::Tree(value)
    }
}

impl From<Leaf> for Node {
    fn from(value: Leaf) -> Self {
        Node::Leaf(value)
    }
}

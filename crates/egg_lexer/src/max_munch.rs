//! Longest-prefix matching over a fixed set of patterns

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};

/// The result of a successful [`MaxMunchTrie::largest_prefix`] lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieMatch<T> {
    /// The value associated with the matched pattern
    pub value: T,
    /// The length, in chars, of the matched pattern
    pub len: usize,
}

#[derive(Clone)]
struct TrieNode<T> {
    children: HashMap<char, TrieNode<T>>,
    terminal: Option<TrieMatch<T>>,
}

impl<T: Clone> TrieNode<T> {
    /// Builds the node for all patterns sharing the first `depth` chars.
    fn build(depth: usize, patterns: Vec<(Vec<char>, T)>) -> Self {
        let mut terminal = None;
        let mut by_head: HashMap<char, Vec<(Vec<char>, T)>> = HashMap::new();
        for (pattern, value) in patterns {
            match pattern.get(depth) {
                None => {
                    terminal = Some(TrieMatch {
                        value,
                        len: depth,
                    })
                }
                Some(&head) => by_head.entry(head).or_default().push((pattern, value)),
            }
        }
        let children = by_head
            .into_iter()
            .map(|(head, patterns)| (head, TrieNode::build(depth + 1, patterns)))
            .collect();
        Self { children, terminal }
    }
}

/// A trie over a finite set of patterns, used for finding the longest pattern
/// that is a prefix of some input.
#[derive(Clone)]
pub struct MaxMunchTrie<T> {
    root: TrieNode<T>,
    first_chars: HashSet<char>,
}

impl<T: Clone> MaxMunchTrie<T> {
    /// Creates a new trie from `(pattern, value)` pairs.
    ///
    /// Empty patterns are ignored. If the same pattern appears more than once, the last value wins.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut deduped: HashMap<Vec<char>, T> = HashMap::new();
        for (pattern, value) in patterns {
            let chars: Vec<char> = pattern.as_ref().chars().collect();
            if !chars.is_empty() {
                deduped.insert(chars, value);
            }
        }
        let first_chars = deduped.keys().map(|pattern| pattern[0]).collect();
        let root = TrieNode::build(0, deduped.into_iter().collect());
        Self { root, first_chars }
    }

    /// Finds the longest pattern that matches `data` starting at `offset`.
    ///
    /// The walk follows `data` as far as the trie allows, remembering the deepest
    /// complete pattern it passed through.
    pub fn largest_prefix(&self, data: &[char], offset: usize) -> Option<TrieMatch<T>> {
        let mut node = &self.root;
        let mut best = None;
        for c in data.iter().skip(offset) {
            match node.children.get(c) {
                Some(child) => {
                    node = child;
                    if let Some(terminal) = &node.terminal {
                        best = Some(terminal.clone());
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Whether any pattern in this trie starts with `c`
    pub fn starts_pattern(&self, c: char) -> bool {
        self.first_chars.contains(&c)
    }

    /// The set of chars that begin some pattern
    pub fn first_chars(&self) -> &HashSet<char> {
        &self.first_chars
    }
}

impl<T> Debug for MaxMunchTrie<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxMunchTrie")
            .field("first_chars", &self.first_chars)
            .finish_non_exhaustive()
    }
}

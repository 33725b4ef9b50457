//! Name bindings

use crate::RefId;
use indexmap::IndexMap;

/// One frame of name bindings. Bindings keep the order they were made in.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    names: IndexMap<String, RefId>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any existing binding in this scope
    pub fn store(&mut self, name: impl Into<String>, id: RefId) -> Option<RefId> {
        self.names.insert(name.into(), id)
    }

    pub fn get(&self, name: &str) -> Option<RefId> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Every id bound in this scope
    pub fn ids(&self) -> impl Iterator<Item = RefId> + '_ {
        self.names.values().copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, RefId)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_replaces() {
        let mut scope = Scope::new();
        assert_eq!(scope.store("a", RefId::new(0)), None);
        assert_eq!(scope.store("b", RefId::new(1)), None);
        assert_eq!(scope.store("a", RefId::new(2)), Some(RefId::new(0)));
        assert_eq!(scope.get("a"), Some(RefId::new(2)));
        assert!(scope.contains("b"));
        assert!(!scope.contains("c"));
        assert_eq!(
            scope.bindings().collect::<Vec<_>>(),
            vec![("a", RefId::new(2)), ("b", RefId::new(1))]
        );
    }
}

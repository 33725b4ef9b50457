//! Values stored in memory and the ids that refer to them

use std::collections::BTreeSet;

/// Identifies one allocation. Ids are never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
#[display(fmt = "#{}", _0)]
pub struct RefId(u64);

impl RefId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw index of this id
    pub const fn index(&self) -> u64 {
        self.0
    }
}

/// An allocated value, along with the ids it keeps alive
#[derive(Debug, Clone)]
pub struct Instance<V> {
    value: V,
    deps: BTreeSet<RefId>,
    constant: bool,
}

impl<V> Instance<V> {
    pub(crate) fn new(value: V, deps: BTreeSet<RefId>, constant: bool) -> Self {
        Self {
            value,
            deps,
            constant,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The ids that stay reachable for as long as this instance is
    pub fn deps(&self) -> &BTreeSet<RefId> {
        &self.deps
    }

    /// Whether the name bound to this instance may not be reassigned
    pub fn is_const(&self) -> bool {
        self.constant
    }

    pub(crate) fn add_dep(&mut self, dep: RefId) {
        self.deps.insert(dep);
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_id_display() {
        assert_eq!(RefId::new(12).to_string(), "#12");
        assert_eq!(RefId::new(12).index(), 12);
    }

    #[test]
    fn test_deps_are_a_set() {
        let mut instance = Instance::new((), BTreeSet::new(), false);
        instance.add_dep(RefId::new(1));
        instance.add_dep(RefId::new(1));
        assert_eq!(instance.deps().len(), 1);
        assert!(!instance.is_const());
    }
}

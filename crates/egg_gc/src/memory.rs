//! The memory arena, its scopes, and garbage collection

use crate::instance::{Instance, RefId};
use crate::scope::Scope;
use crate::trace::{references, Trace};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use thiserror::Error;
use tracing::{debug, trace};

/// Owns every live runtime value and the scopes that name them.
///
/// A new memory starts with a single global scope.
#[derive(Debug)]
pub struct Memory<V> {
    instances: BTreeMap<RefId, Instance<V>>,
    scopes: Vec<Scope>,
    next_id: u64,
    config: GcConfig,
    stats: GcStats,
}

impl<V> Default for Memory<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Memory<V> {
    /// Creates a new memory with the default [`GcConfig`]
    #[inline]
    pub fn new() -> Self {
        Self::with_config(GcConfig::default())
    }

    pub fn with_config(config: GcConfig) -> Self {
        Self {
            instances: BTreeMap::new(),
            scopes: vec![Scope::new()],
            next_id: 0,
            config,
            stats: GcStats::default(),
        }
    }

    pub fn config(&self) -> &GcConfig {
        &self.config
    }

    /// Stores a new value, optionally binding it to a name in the innermost scope.
    ///
    /// Fails only if a name is given and no scope is live.
    pub fn allocate(&mut self, value: V, options: Allocation) -> Result<RefId, MemoryError> {
        let Allocation {
            name,
            deps,
            constant,
        } = options;
        if name.is_some() && self.scopes.is_empty() {
            return Err(MemoryError::NoScope);
        }
        let id = self.next_ref_id();
        trace!(%id, ?name, deps = deps.len(), constant, "allocating");
        self.instances.insert(id, Instance::new(value, deps, constant));
        if let Some(name) = name {
            self.current_scope_mut()?.store(name, id);
        }
        Ok(id)
    }

    /// Like [`allocate`](Self::allocate), but the new instance also depends on
    /// every id the value itself references.
    pub fn allocate_traced(&mut self, value: V, options: Allocation) -> Result<RefId, MemoryError>
    where
        V: Trace,
    {
        let captured = references(&value);
        self.allocate(value, options.with_deps(captured))
    }

    /// Binds `name` to an existing instance in the innermost scope
    pub fn bind(&mut self, name: impl Into<String>, id: RefId) -> Result<(), MemoryError> {
        if !self.instances.contains_key(&id) {
            return Err(MemoryError::Freed(id));
        }
        self.current_scope_mut()?.store(name, id);
        Ok(())
    }

    /// Finds the id bound to `name`, searching from the innermost scope outwards
    pub fn resolve(&self, name: &str) -> Result<RefId, MemoryError> {
        self.find(name)
            .map(|(_, id)| id)
            .ok_or_else(|| MemoryError::UnboundName(name.to_string()))
    }

    /// Gives `name` a new value.
    ///
    /// The old instance is left alone, so anything else referring to it is unaffected. A
    /// new instance is allocated and `name` is rebound to it in the scope it was found in.
    pub fn reassign<I>(&mut self, name: &str, value: V, deps: I) -> Result<RefId, MemoryError>
    where
        I: IntoIterator<Item = RefId>,
    {
        let (scope_index, old) = self
            .find(name)
            .ok_or_else(|| MemoryError::UnboundName(name.to_string()))?;
        if self.instances.get(&old).is_some_and(Instance::is_const) {
            return Err(MemoryError::ConstReassignment {
                name: name.to_string(),
                id: old,
            });
        }
        let id = self.next_ref_id();
        trace!(name, %old, new = %id, "reassigning");
        self.instances
            .insert(id, Instance::new(value, deps.into_iter().collect(), false));
        self.scopes[scope_index].store(name, id);
        Ok(id)
    }

    /// Records that `owner` keeps `dep` reachable
    pub fn add_dependency(&mut self, owner: RefId, dep: RefId) -> Result<(), MemoryError> {
        let instance = self
            .instances
            .get_mut(&owner)
            .ok_or(MemoryError::Freed(owner))?;
        instance.add_dep(dep);
        Ok(())
    }

    /// Pushes a new, empty innermost scope
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.scopes.len(), "pushed scope");
    }

    /// Pops the innermost scope, dropping its bindings, then collects garbage if `run_gc` is set.
    ///
    /// Popping the global scope is allowed. Without a scope, nothing is reachable.
    pub fn pop_scope(&mut self, run_gc: bool) -> Result<(), MemoryError> {
        let scope = self.scopes.pop().ok_or(MemoryError::NoScope)?;
        trace!(
            depth = self.scopes.len(),
            bindings = scope.len(),
            "popped scope"
        );
        if run_gc {
            self.collect();
        }
        Ok(())
    }

    /// Pops the innermost scope, collecting garbage if the config says to
    pub fn pop_scope_default(&mut self) -> Result<(), MemoryError> {
        self.pop_scope(self.config.collect_on_pop)
    }

    /// Frees every instance that isn't reachable from a name in a live scope.
    ///
    /// Returns the number of instances freed.
    pub fn collect(&mut self) -> usize {
        let reachable = self.reachable();
        let before = self.instances.len();
        self.instances.retain(|id, _| reachable.contains(id));
        let freed = before - self.instances.len();
        self.stats.collections += 1;
        self.stats.freed += freed;
        debug!(
            reachable = reachable.len(),
            freed,
            live = self.instances.len(),
            "collected garbage"
        );
        freed
    }

    /// Every id reachable from a named binding, following dependencies
    fn reachable(&self) -> BTreeSet<RefId> {
        let mut discovered: BTreeSet<RefId> = self.scopes.iter().flat_map(Scope::ids).collect();
        let mut frontier: VecDeque<RefId> = discovered.iter().copied().collect();
        while let Some(id) = frontier.pop_front() {
            let Some(instance) = self.instances.get(&id) else {
                continue;
            };
            for &dep in instance.deps() {
                if discovered.insert(dep) {
                    frontier.push_back(dep);
                }
            }
        }
        discovered
    }

    /// Gets the value of a live instance
    pub fn get(&self, id: RefId) -> Result<&V, MemoryError> {
        self.instance(id).map(Instance::value)
    }

    pub fn instance(&self, id: RefId) -> Result<&Instance<V>, MemoryError> {
        self.instances.get(&id).ok_or(MemoryError::Freed(id))
    }

    /// Gets the value bound to `name`
    pub fn get_by_name(&self, name: &str) -> Result<&V, MemoryError> {
        self.get(self.resolve(name)?)
    }

    /// Frees an instance immediately, returning its value. The id can never be used again.
    pub fn free(&mut self, id: RefId) -> Result<V, MemoryError> {
        let instance = self.instances.remove(&id).ok_or(MemoryError::Freed(id))?;
        trace!(%id, "freed");
        Ok(instance.into_value())
    }

    pub fn is_live(&self, id: RefId) -> bool {
        self.instances.contains_key(&id)
    }

    /// The number of instances currently stored
    pub fn live_count(&self) -> usize {
        self.instances.len()
    }

    /// The ids of every instance currently stored, in allocation order
    pub fn live_ids(&self) -> impl Iterator<Item = RefId> + '_ {
        self.instances.keys().copied()
    }

    /// The number of live scopes, including the global scope
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn stats(&self) -> &GcStats {
        &self.stats
    }

    fn find(&self, name: &str) -> Option<(usize, RefId)> {
        self.scopes
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, scope)| scope.get(name).map(|id| (index, id)))
    }

    fn current_scope_mut(&mut self) -> Result<&mut Scope, MemoryError> {
        self.scopes.last_mut().ok_or(MemoryError::NoScope)
    }

    fn next_ref_id(&mut self) -> RefId {
        let id = RefId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Options for [`Memory::allocate`]
#[derive(Debug, Default, Clone)]
pub struct Allocation {
    name: Option<String>,
    deps: BTreeSet<RefId>,
    constant: bool,
}

impl Allocation {
    /// An anonymous, mutable allocation with no dependencies
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocation bound to `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds dependencies to the allocation
    pub fn with_deps(mut self, deps: impl IntoIterator<Item = RefId>) -> Self {
        self.deps.extend(deps);
        self
    }

    /// Makes the bound name impossible to reassign
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("{0:?} is not bound in any live scope")]
    UnboundName(String),
    #[error("can not reassign {name:?}, it is bound to the constant {id}")]
    ConstReassignment { name: String, id: RefId },
    #[error("{0} has been freed")]
    Freed(RefId),
    #[error("no scope is live")]
    NoScope,
}

/// Used for configuring memory
#[derive(Debug, Copy, Clone)]
pub struct GcConfig {
    /// Whether [`Memory::pop_scope_default`] collects garbage
    pub collect_on_pop: bool,
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            collect_on_pop: true,
        }
    }
}

/// Running totals of garbage collection work
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GcStats {
    collections: usize,
    freed: usize,
}

impl GcStats {
    /// The number of collection passes run
    pub fn collections(&self) -> usize {
        self.collections
    }

    /// The number of instances freed by collection passes
    pub fn freed(&self) -> usize {
        self.freed
    }
}

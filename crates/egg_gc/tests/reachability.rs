//! Checks collection against an independently computed reachable set on
//! pseudo-random object graphs.

use egg_gc::{Allocation, Memory, RefId};
use std::collections::{BTreeMap, BTreeSet};
use test_log::test;

/// A small xorshift generator so graphs are the same on every run
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Every id reachable from `roots` in `edges`, by depth first search
fn expected_reachable(
    roots: impl IntoIterator<Item = RefId>,
    edges: &BTreeMap<RefId, Vec<RefId>>,
) -> BTreeSet<RefId> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<RefId> = roots.into_iter().collect();
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            stack.extend(edges.get(&id).into_iter().flatten().copied());
        }
    }
    seen
}

fn run(seed: u64) {
    let mut rng = XorShift::new(seed);
    let mut memory = Memory::new();
    let mut edges: BTreeMap<RefId, Vec<RefId>> = BTreeMap::new();
    // mirrors the bindings of each live scope
    let mut scopes: Vec<BTreeMap<String, RefId>> = vec![BTreeMap::new()];

    for depth in 0..5 {
        if depth > 0 {
            memory.push_scope();
            scopes.push(BTreeMap::new());
        }
        for i in 0..12 {
            let allocation = if rng.below(3) == 0 {
                Allocation::named(format!("v{}", rng.below(6)))
            } else {
                Allocation::new()
            };
            let id = memory.allocate(i, allocation).unwrap();
            edges.insert(id, vec![]);
            if let Some(name) = (0..6)
                .map(|n| format!("v{n}"))
                .find(|name| memory.resolve(name) == Ok(id))
            {
                scopes.last_mut().unwrap().insert(name, id);
            }
        }
        let ids: Vec<RefId> = edges.keys().copied().collect();
        for _ in 0..16 {
            let owner = ids[rng.below(ids.len())];
            let dep = ids[rng.below(ids.len())];
            memory.add_dependency(owner, dep).unwrap();
            edges.get_mut(&owner).unwrap().push(dep);
        }
    }

    while memory.scope_depth() > 0 {
        memory.pop_scope(true).unwrap();
        scopes.pop();
        let roots = scopes.iter().flat_map(|scope| scope.values().copied());
        let expected = expected_reachable(roots, &edges);
        let live: BTreeSet<RefId> = memory.live_ids().collect();
        assert_eq!(live, expected, "seed {seed}, depth {}", memory.scope_depth());
        edges.retain(|id, _| live.contains(id));
    }
    assert_eq!(memory.live_count(), 0);
}

#[test]
fn test_collection_frees_exactly_the_unreachable() {
    for seed in 1..=64_u64 {
        run(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    }
}

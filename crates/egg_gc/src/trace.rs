//! Discovering the references a value holds

use crate::RefId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Trait for values that can hold references to other allocations.
///
/// Values allocated with [`Memory::allocate_traced`](crate::Memory::allocate_traced)
/// depend on every id they report here.
pub trait Trace {
    fn trace(&self, tracer: &mut Tracer);
}

/// Collects the ids reported by [`Trace::trace`]
#[derive(Debug, Default)]
pub struct Tracer {
    found: BTreeSet<RefId>,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reference
    pub fn visit(&mut self, id: RefId) {
        self.found.insert(id);
    }

    pub fn into_refs(self) -> BTreeSet<RefId> {
        self.found
    }
}

/// Gets every id referenced by `value`
pub fn references<T: Trace + ?Sized>(value: &T) -> BTreeSet<RefId> {
    let mut tracer = Tracer::new();
    value.trace(&mut tracer);
    tracer.into_refs()
}

impl Trace for RefId {
    fn trace(&self, tracer: &mut Tracer) {
        tracer.visit(*self);
    }
}

/// Implements a trace that reports nothing, for types that can't hold references
macro_rules! impl_empty_trace {
    ($($ty:ty)*) => {
        $(
        impl $crate::Trace for $ty {
            fn trace(&self, _tracer: &mut $crate::Tracer) {}
        }
        )*
    };
}

impl_empty_trace! {
    ()
    u8 u16 u32 u64 usize
    i8 i16 i32 i64 isize
    f32 f64
    char
    bool
    str
    String
}

impl<T: Trace + ?Sized> Trace for &T {
    fn trace(&self, tracer: &mut Tracer) {
        (**self).trace(tracer)
    }
}

impl<T: Trace + ?Sized> Trace for Box<T> {
    fn trace(&self, tracer: &mut Tracer) {
        (**self).trace(tracer)
    }
}

impl<T: Trace> Trace for Option<T> {
    fn trace(&self, tracer: &mut Tracer) {
        if let Some(value) = self {
            value.trace(tracer);
        }
    }
}

impl<T: Trace> Trace for [T] {
    fn trace(&self, tracer: &mut Tracer) {
        self.iter().for_each(|elem| elem.trace(tracer));
    }
}

impl<T: Trace, const N: usize> Trace for [T; N] {
    fn trace(&self, tracer: &mut Tracer) {
        self.as_slice().trace(tracer);
    }
}

macro_rules! impl_collection_trace {
    ($($collection:ident),*) => {
        $(
        impl<T: Trace> Trace for $collection<T> {
            fn trace(&self, tracer: &mut Tracer) {
                self.iter().for_each(|elem| elem.trace(tracer));
            }
        }
        )*
    };
}

impl_collection_trace!(Vec, VecDeque, BTreeSet, HashSet);

impl<K: Trace, V: Trace> Trace for HashMap<K, V> {
    fn trace(&self, tracer: &mut Tracer) {
        self.iter().for_each(|(k, v)| {
            k.trace(tracer);
            v.trace(tracer);
        })
    }
}

impl<K: Trace, V: Trace> Trace for BTreeMap<K, V> {
    fn trace(&self, tracer: &mut Tracer) {
        self.iter().for_each(|(k, v)| {
            k.trace(tracer);
            v.trace(tracer);
        })
    }
}

macro_rules! impl_tuple_trace {
    ($(($($name:ident),+)),*) => {
        $(
        #[allow(non_snake_case)]
        impl<$($name: Trace),+> Trace for ($($name,)+) {
            fn trace(&self, tracer: &mut Tracer) {
                let ($($name,)+) = self;
                $($name.trace(tracer);)+
            }
        }
        )*
    };
}

impl_tuple_trace!((A), (A, B), (A, B, C), (A, B, C, D));

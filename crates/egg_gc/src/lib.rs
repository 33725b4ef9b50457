#![doc = include_str!("../README.md")]

pub mod instance;
pub mod memory;
pub mod scope;
pub mod trace;

pub use instance::{Instance, RefId};
pub use memory::{Allocation, GcConfig, GcStats, Memory, MemoryError};
pub use scope::Scope;
pub use trace::{references, Trace, Tracer};

//! Page cache implementation.

mod memory;

pub use memory::InMemoryCache;

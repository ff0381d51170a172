//! Repository contracts, the search pipeline and in-memory backends.

mod contracts;
mod in_memory;
pub mod pipeline;

pub use contracts::{Repository, SearchableRepository};
pub use in_memory::{InMemoryRepository, InMemorySearchableRepository};
pub use pipeline::{contains_ignore_case, SearchPolicy, SortValue};

//! Domain layer - Core business entities and value objects.
//!
//! Entities validate themselves on every change, repositories persist them
//! behind async contracts, and searchable repositories answer filter, sort
//! and paginate queries. Nothing here knows about transports or hashing.

pub mod constants;
pub mod entity;
pub mod error;
pub mod repository;
pub mod search;
pub mod user;
pub mod validation;

pub use constants::*;
pub use entity::{DomainEntity, Entity};
pub use error::{DomainError, DomainResult};
pub use repository::{
    InMemoryRepository, InMemorySearchableRepository, Repository, SearchPolicy,
    SearchableRepository, SortValue,
};
pub use search::{SearchParams, SearchProps, SearchResult, SortDirection};
pub use user::{UserEntity, UserProps};
pub use validation::{FieldErrors, SchemaValidator, ValidatorFields};

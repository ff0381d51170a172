//! Repository layer for user data access.

mod user_repository;

pub use user_repository::{UserInMemoryRepository, UserRepository, UserSearchPolicy};

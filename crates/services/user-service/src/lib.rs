//! User Service Library
//!
//! User management core: the user repository, the Argon2 hash provider,
//! the seven use cases and a JSON-lines session driver over them.

pub mod config;
pub mod infra;
pub mod repository;
pub mod session;
pub mod usecases;

use std::sync::Arc;

use common::{AppResult, HashingConfig};

use crate::infra::Argon2HashProvider;
use crate::repository::UserInMemoryRepository;
use crate::usecases::UserUseCases;

/// Use cases backed by a fresh in-memory store and an Argon2 hasher.
pub fn in_memory_use_cases(hashing: &HashingConfig) -> AppResult<UserUseCases> {
    let repo = Arc::new(UserInMemoryRepository::default());
    let hasher = Arc::new(Argon2HashProvider::new(hashing)?);
    Ok(UserUseCases::new(repo, hasher))
}

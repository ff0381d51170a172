//! Infrastructure adapters.

mod hash_provider;

pub use hash_provider::Argon2HashProvider;

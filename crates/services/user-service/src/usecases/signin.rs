//! Verify a user's credentials.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use common::{AppError, AppResult, HashProvider};

use super::output::UserOutput;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

pub struct SigninUseCase {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn HashProvider>,
}

impl SigninUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn HashProvider>) -> Self {
        Self { repo, hasher }
    }

    /// Return the user whose stored hash matches `password`.
    ///
    /// An unknown email is `NotFound`; a wrong password is
    /// `InvalidCredentials`.
    pub async fn execute(&self, input: SigninInput) -> AppResult<UserOutput> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AppError::bad_request("Input data not provided"));
        }

        let entity = self.repo.find_by_email(&input.email).await?;

        let matches = self
            .hasher
            .compare_hash(&input.password, entity.password())
            .await?;
        if !matches {
            warn!(user_id = %entity.id(), "Rejected sign-in: password mismatch");
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = %entity.id(), "User signed in");
        Ok(UserOutput::from(entity))
    }
}

//! Change a user's password after checking the current one.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, HashProvider};

use super::output::UserOutput;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePasswordInput {
    pub id: Uuid,
    /// New plain-text password
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "oldPassword")]
    pub old_password: String,
}

pub struct UpdatePasswordUseCase {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn HashProvider>,
}

impl UpdatePasswordUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn HashProvider>) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(&self, input: UpdatePasswordInput) -> AppResult<UserOutput> {
        if input.old_password.is_empty() || input.password.is_empty() {
            return Err(AppError::InvalidPassword(
                "Old password and new password is required".to_string(),
            ));
        }

        let mut entity = self.repo.find_by_id(input.id).await?;

        let matches = self
            .hasher
            .compare_hash(&input.old_password, entity.password())
            .await?;
        if !matches {
            warn!(user_id = %entity.id(), "Rejected password change: old password mismatch");
            return Err(AppError::invalid_password());
        }

        let hash = self.hasher.generate_hash(&input.password).await?;
        entity.update_password(hash)?;
        self.repo.update(entity.clone()).await?;

        info!(user_id = %entity.id(), "User password changed");
        Ok(UserOutput::from(entity))
    }
}

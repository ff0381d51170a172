//! Remove a user.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::AppResult;

use crate::repository::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteUserInput {
    pub id: Uuid,
}

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: DeleteUserInput) -> AppResult<()> {
        self.repo.delete(input.id).await?;
        info!(user_id = %input.id, "User deleted");
        Ok(())
    }
}

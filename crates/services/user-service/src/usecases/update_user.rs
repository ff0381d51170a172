//! Rename a user.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult};

use super::output::UserOutput;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserInput {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> AppResult<UserOutput> {
        if input.name.is_empty() {
            return Err(AppError::bad_request("Name not provided"));
        }

        let mut entity = self.repo.find_by_id(input.id).await?;
        entity.update_name(input.name)?;
        self.repo.update(entity.clone()).await?;

        info!(user_id = %entity.id(), "User renamed");
        Ok(UserOutput::from(entity))
    }
}

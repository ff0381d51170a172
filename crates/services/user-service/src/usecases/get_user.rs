//! Fetch one user by id.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use common::AppResult;

use super::output::UserOutput;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserInput {
    pub id: Uuid,
}

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: GetUserInput) -> AppResult<UserOutput> {
        let entity = self.repo.find_by_id(input.id).await?;
        Ok(UserOutput::from(entity))
    }
}

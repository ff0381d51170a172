//! Plain projections returned by the use cases.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use domain::{SearchResult, UserEntity};

/// User projection. `password` holds the stored hash and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOutput {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserEntity> for UserOutput {
    fn from(entity: &UserEntity) -> Self {
        Self {
            id: entity.id(),
            name: entity.name().to_string(),
            email: entity.email().to_string(),
            password: entity.password().to_string(),
            created_at: entity.created_at(),
        }
    }
}

impl From<UserEntity> for UserOutput {
    fn from(entity: UserEntity) -> Self {
        Self::from(&entity)
    }
}

/// One page of users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListUsersOutput {
    pub items: Vec<UserOutput>,
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
}

impl From<SearchResult<UserEntity>> for ListUsersOutput {
    fn from(result: SearchResult<UserEntity>) -> Self {
        let total = result.total();
        let current_page = result.current_page();
        let last_page = result.last_page();
        let per_page = result.per_page();

        Self {
            items: result.into_items().iter().map(UserOutput::from).collect(),
            total,
            current_page,
            last_page,
            per_page,
        }
    }
}

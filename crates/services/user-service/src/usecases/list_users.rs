//! Paginated, filterable user listing.

use std::sync::Arc;

use common::AppResult;
use domain::{SearchParams, SearchProps};

use super::output::ListUsersOutput;
use crate::repository::UserRepository;

pub type ListUsersInput = SearchProps;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Normalise the query, run the search and project the page.
    pub async fn execute(&self, input: ListUsersInput) -> AppResult<ListUsersOutput> {
        let params = SearchParams::new(input);
        let result = self.repo.search(&params).await?;
        Ok(ListUsersOutput::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::UserInMemoryRepository;
    use chrono::{Duration, Utc};
    use domain::{Repository, UserEntity, UserProps};

    async fn repo_with(count: i64) -> Arc<UserInMemoryRepository> {
        let repo = Arc::new(UserInMemoryRepository::default());
        let start = Utc::now();
        for i in 0..count {
            let props = UserProps {
                created_at: start + Duration::seconds(i),
                ..UserProps::new(format!("user-{i}"), format!("{i}@a.com"), "hash")
            };
            repo.insert(UserEntity::new(props, None).unwrap())
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_empty_store() {
        let sut = ListUsersUseCase::new(Arc::new(UserInMemoryRepository::default()));

        let output = sut.execute(ListUsersInput::default()).await.unwrap();

        assert!(output.items.is_empty());
        assert_eq!(output.total, 0);
        assert_eq!(output.current_page, 1);
        assert_eq!(output.last_page, 0);
        assert_eq!(output.per_page, 15);
    }

    #[tokio::test]
    async fn test_pages_newest_first() {
        let sut = ListUsersUseCase::new(repo_with(3).await);

        let output = sut
            .execute(ListUsersInput {
                page: Some(1),
                per_page: Some(2),
                ..ListUsersInput::default()
            })
            .await
            .unwrap();

        let names: Vec<_> = output.items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["user-2", "user-1"]);
        assert_eq!(output.total, 3);
        assert_eq!(output.last_page, 2);
        assert_eq!(output.per_page, 2);
    }

    #[tokio::test]
    async fn test_filter_and_sort() {
        let sut = ListUsersUseCase::new(repo_with(12).await);

        let output = sut
            .execute(ListUsersInput {
                sort: Some("name".into()),
                sort_dir: Some("asc".into()),
                filter: Some("USER-1".into()),
                ..ListUsersInput::default()
            })
            .await
            .unwrap();

        let names: Vec<_> = output.items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["user-1", "user-10", "user-11"]);
        assert_eq!(output.total, 3);
        assert_eq!(output.last_page, 1);
    }
}

//! User repository contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use domain::repository::{contains_ignore_case, SortValue};
use domain::{
    DomainError, DomainResult, InMemorySearchableRepository, SearchPolicy, SearchableRepository,
    SortDirection, UserEntity,
};

/// User repository trait for dependency injection.
///
/// Adds email lookups on top of the generic searchable contract.
#[async_trait]
pub trait UserRepository: SearchableRepository<UserEntity> {
    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> DomainResult<UserEntity>;

    /// Succeeds when no user holds `email`, otherwise `Conflict`.
    ///
    /// The check is not atomic with a later `insert`: two concurrent
    /// signups for the same email can both pass it.
    async fn email_exists(&self, email: &str) -> DomainResult<()>;
}

/// Search rules for users: filter on name, sort on name or creation time,
/// newest first by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSearchPolicy;

impl SearchPolicy<UserEntity> for UserSearchPolicy {
    fn sortable_fields(&self) -> &[&'static str] {
        &["name", "created_at"]
    }

    fn matches(&self, item: &UserEntity, filter: &str) -> bool {
        contains_ignore_case(item.name(), filter)
    }

    fn sort_value<'a>(&self, item: &'a UserEntity, field: &str) -> Option<SortValue<'a>> {
        match field {
            "name" => Some(SortValue::Text(item.name())),
            "created_at" => Some(SortValue::Time(item.created_at())),
            _ => None,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

/// In-memory user store.
pub type UserInMemoryRepository = InMemorySearchableRepository<UserEntity, UserSearchPolicy>;

#[async_trait]
impl UserRepository for UserInMemoryRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<UserEntity> {
        self.store()
            .find_by(|user| user.email() == email)
            .await
            .ok_or_else(|| {
                DomainError::not_found(format!("Entity not found using email {}", email))
            })
    }

    async fn email_exists(&self, email: &str) -> DomainResult<()> {
        if self.store().find_by(|user| user.email() == email).await.is_some() {
            debug!(email = %email, "Email already registered");
            return Err(DomainError::conflict("Email address already used"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use domain::{Repository, SearchParams, SearchProps, UserProps};
    use tokio_test::{assert_err, assert_ok};

    fn user(name: &str, email: &str) -> UserEntity {
        UserEntity::new(UserProps::new(name, email, "hash"), None).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = UserInMemoryRepository::default();
        let entity = user("Test", "a@a.com");
        repo.insert(entity.clone()).await.unwrap();

        assert_eq!(repo.find_by_email("a@a.com").await.unwrap(), entity);
    }

    #[tokio::test]
    async fn test_find_by_email_miss_names_the_email() {
        let repo = UserInMemoryRepository::default();
        repo.insert(user("Test", "a@a.com")).await.unwrap();

        assert_eq!(
            repo.find_by_email("A@A.COM").await.unwrap_err(),
            DomainError::not_found("Entity not found using email A@A.COM")
        );
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = UserInMemoryRepository::default();

        assert_ok!(repo.email_exists("a@a.com").await);

        repo.insert(user("Test", "a@a.com")).await.unwrap();

        assert_eq!(
            repo.email_exists("a@a.com").await.unwrap_err(),
            DomainError::conflict("Email address already used")
        );
        assert_ok!(repo.email_exists("b@b.com").await);
    }

    #[tokio::test]
    async fn test_search_filters_on_name_only() {
        let repo = UserInMemoryRepository::default();
        repo.insert(user("test", "x@x.com")).await.unwrap();
        repo.insert(user("TEST", "y@y.com")).await.unwrap();
        repo.insert(user("fake", "test@z.com")).await.unwrap();

        let params = SearchParams::new(SearchProps {
            sort: Some("name".into()),
            sort_dir: Some("asc".into()),
            filter: Some("test".into()),
            ..SearchProps::default()
        });
        let result = repo.search(&params).await.unwrap();

        let names: Vec<_> = result.items().iter().map(UserEntity::name).collect();
        assert_eq!(names, vec!["TEST", "test"]);
        assert_eq!(result.total(), 2);
    }

    #[tokio::test]
    async fn test_search_defaults_to_newest_first() {
        let repo = UserInMemoryRepository::default();
        let start = Utc::now();
        for i in 0..3 {
            let props = UserProps {
                created_at: start + Duration::seconds(i),
                ..UserProps::new(format!("user-{i}"), format!("{i}@a.com"), "hash")
            };
            repo.insert(UserEntity::new(props, None).unwrap()).await.unwrap();
        }

        let result = repo.search(&SearchParams::default()).await.unwrap();

        let names: Vec<_> = result.items().iter().map(UserEntity::name).collect();
        assert_eq!(names, vec!["user-2", "user-1", "user-0"]);
    }

    #[tokio::test]
    async fn test_unknown_sort_field_keeps_insertion_order() {
        let repo = UserInMemoryRepository::default();
        let start = Utc::now();
        for (i, name) in ["first", "second", "third"].into_iter().enumerate() {
            let props = UserProps {
                created_at: start + Duration::seconds(i as i64),
                ..UserProps::new(name, format!("{name}@a.com"), "hash")
            };
            repo.insert(UserEntity::new(props, None).unwrap()).await.unwrap();
        }

        let params = SearchParams::new(SearchProps {
            sort: Some("email".into()),
            sort_dir: Some("asc".into()),
            ..SearchProps::default()
        });
        let result = repo.search(&params).await.unwrap();

        let names: Vec<_> = result.items().iter().map(UserEntity::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_err!(repo.find_by_email("fourth@a.com").await);
    }
}

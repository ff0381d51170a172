//! Register a new user.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use common::{AppError, AppResult, HashProvider};
use domain::{UserEntity, UserProps};

use super::output::UserOutput;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct SignupUseCase {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn HashProvider>,
}

impl SignupUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn HashProvider>) -> Self {
        Self { repo, hasher }
    }

    /// Create the user with a hashed password.
    ///
    /// Fails with `BadRequest` on missing input and `Conflict` when the
    /// email is taken.
    pub async fn execute(&self, input: SignupInput) -> AppResult<UserOutput> {
        let SignupInput {
            name,
            email,
            password,
        } = input;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request("Input data not provided"));
        }

        self.repo.email_exists(&email).await?;

        let hash = self.hasher.generate_hash(&password).await?;
        let entity = UserEntity::new(UserProps::new(name, email, hash), None)?;
        self.repo.insert(entity.clone()).await?;

        info!(user_id = %entity.id(), email = %entity.email(), "User signed up");
        Ok(UserOutput::from(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Repository;
    use crate::repository::UserInMemoryRepository;
    use common::MockHashProvider;

    fn hasher() -> MockHashProvider {
        let mut mock = MockHashProvider::new();
        mock.expect_generate_hash()
            .returning(|payload| Ok(format!("hashed:{payload}")));
        mock
    }

    fn input(name: &str, email: &str, password: &str) -> SignupInput {
        SignupInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_creates_user_with_hashed_password() {
        let repo = Arc::new(UserInMemoryRepository::default());
        let sut = SignupUseCase::new(repo.clone(), Arc::new(hasher()));

        let output = sut.execute(input("Test", "a@a.com", "1234")).await.unwrap();

        assert_eq!(output.name, "Test");
        assert_eq!(output.email, "a@a.com");
        assert_eq!(output.password, "hashed:1234");

        let stored = repo.find_by_id(output.id).await.unwrap();
        assert_eq!(UserOutput::from(stored), output);
    }

    #[tokio::test]
    async fn test_rejects_missing_input_before_touching_anything() {
        let repo = Arc::new(UserInMemoryRepository::default());
        let mut hasher = MockHashProvider::new();
        hasher.expect_generate_hash().never();
        let sut = SignupUseCase::new(repo.clone(), Arc::new(hasher));

        for bad in [
            input("", "a@a.com", "1234"),
            input("Test", "", "1234"),
            input("Test", "a@a.com", ""),
        ] {
            assert_eq!(
                sut.execute(bad).await.unwrap_err(),
                AppError::bad_request("Input data not provided")
            );
        }

        assert!(repo.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = Arc::new(UserInMemoryRepository::default());
        let sut = SignupUseCase::new(repo.clone(), Arc::new(hasher()));
        sut.execute(input("Test", "a@a.com", "1234")).await.unwrap();

        let err = sut.execute(input("Other", "a@a.com", "5678")).await.unwrap_err();

        assert_eq!(err, AppError::conflict("Email address already used"));
        assert_eq!(repo.store().len().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_name_is_validation_error() {
        let repo = Arc::new(UserInMemoryRepository::default());
        let sut = SignupUseCase::new(repo.clone(), Arc::new(hasher()));

        let err = sut
            .execute(input(&"n".repeat(256), "a@a.com", "1234"))
            .await
            .unwrap_err();

        assert!(err.fields().is_some_and(|fields| fields.contains("name")));
        assert!(repo.store().is_empty().await);
    }
}

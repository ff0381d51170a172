//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH};
use crate::entity::{DomainEntity, Entity};
use crate::error::{DomainError, DomainResult};
use crate::validation::{SchemaValidator, ValidatorFields};

/// Attribute bag of a user.
///
/// `password` holds whatever the application layer hands over (a hash in
/// practice); the entity never hashes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProps {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = EMAIL_MAX_LENGTH, message = "email must be between 1 and 255 characters"))]
    pub email: String,
    #[validate(length(min = 1, max = PASSWORD_MAX_LENGTH, message = "password must be between 1 and 100 characters"))]
    pub password: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl UserProps {
    /// Props stamped with the current time as `created_at`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}

/// User domain entity.
///
/// Every construction and mutation validates the complete prospective prop
/// set first; a rejected change leaves the entity exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserEntity {
    inner: Entity<UserProps>,
}

impl UserEntity {
    /// Create a user validated by the declarative [`UserProps`] rules.
    pub fn new(props: UserProps, id: Option<Uuid>) -> DomainResult<Self> {
        Self::with_validator(props, id, &SchemaValidator)
    }

    /// Create a user validated by an injected strategy.
    pub fn with_validator(
        props: UserProps,
        id: Option<Uuid>,
        validator: &dyn ValidatorFields<UserProps>,
    ) -> DomainResult<Self> {
        validator.validate(&props).map_err(DomainError::Validation)?;
        Ok(Self {
            inner: Entity::new(props, id),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id()
    }

    pub fn name(&self) -> &str {
        &self.inner.props().name
    }

    pub fn email(&self) -> &str {
        &self.inner.props().email
    }

    pub fn password(&self) -> &str {
        &self.inner.props().password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.props().created_at
    }

    pub fn props(&self) -> &UserProps {
        self.inner.props()
    }

    /// Canonical JSON projection: `{ id, name, email, password, created_at }`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        self.inner.to_json()
    }

    /// Replace the name.
    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.update_name_with(name, &SchemaValidator)
    }

    pub fn update_name_with(
        &mut self,
        name: impl Into<String>,
        validator: &dyn ValidatorFields<UserProps>,
    ) -> DomainResult<()> {
        let candidate = UserProps {
            name: name.into(),
            ..self.props().clone()
        };
        self.commit(candidate, validator)
    }

    /// Replace the stored password (already hashed by the caller).
    pub fn update_password(&mut self, password: impl Into<String>) -> DomainResult<()> {
        self.update_password_with(password, &SchemaValidator)
    }

    pub fn update_password_with(
        &mut self,
        password: impl Into<String>,
        validator: &dyn ValidatorFields<UserProps>,
    ) -> DomainResult<()> {
        let candidate = UserProps {
            password: password.into(),
            ..self.props().clone()
        };
        self.commit(candidate, validator)
    }

    fn commit(
        &mut self,
        candidate: UserProps,
        validator: &dyn ValidatorFields<UserProps>,
    ) -> DomainResult<()> {
        validator
            .validate(&candidate)
            .map_err(DomainError::Validation)?;
        self.inner.replace_props(candidate);
        Ok(())
    }
}

impl DomainEntity for UserEntity {
    fn id(&self) -> Uuid {
        self.inner.id()
    }
}

//! Application use cases for user management.
//!
//! Each use case owns the collaborators it needs and exposes a single
//! `execute`. Input presence checks run before any repository access; errors
//! from the repository and the entity propagate unchanged.

mod delete_user;
mod get_user;
mod list_users;
mod output;
mod signin;
mod signup;
mod update_password;
mod update_user;

use std::sync::Arc;

use common::HashProvider;

use crate::repository::UserRepository;

pub use delete_user::{DeleteUserInput, DeleteUserUseCase};
pub use get_user::{GetUserInput, GetUserUseCase};
pub use list_users::{ListUsersInput, ListUsersUseCase};
pub use output::{ListUsersOutput, UserOutput};
pub use signin::{SigninInput, SigninUseCase};
pub use signup::{SignupInput, SignupUseCase};
pub use update_password::{UpdatePasswordInput, UpdatePasswordUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

/// Every user use case wired to one repository and one hash provider.
pub struct UserUseCases {
    pub signup: SignupUseCase,
    pub signin: SigninUseCase,
    pub get_user: GetUserUseCase,
    pub list_users: ListUsersUseCase,
    pub update_user: UpdateUserUseCase,
    pub update_password: UpdatePasswordUseCase,
    pub delete_user: DeleteUserUseCase,
}

impl UserUseCases {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn HashProvider>) -> Self {
        Self {
            signup: SignupUseCase::new(repo.clone(), hasher.clone()),
            signin: SigninUseCase::new(repo.clone(), hasher.clone()),
            get_user: GetUserUseCase::new(repo.clone()),
            list_users: ListUsersUseCase::new(repo.clone()),
            update_user: UpdateUserUseCase::new(repo.clone()),
            update_password: UpdatePasswordUseCase::new(repo.clone(), hasher),
            delete_user: DeleteUserUseCase::new(repo),
        }
    }
}

//! User management domain: the user entity factory and the narrow capabilities it is
//! composed from.
//!
//! Every collaborator is a trait so each piece can be swapped on its own:
//! - `IdentifierProvider` and `Clock` feed the entity factory
//! - `CreateUserEntity` builds a `User` from a `CreateUserInput`
//! - `PersistUser` and `GetUsersByRole` are the two halves of a `UserRepository`

pub mod entity;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::models::{CreateUserInput, Role, User};
use crate::errors::UserResult;

pub use entity::{SystemClock, UserEntityFactory, UuidV4Provider};

/// Source of fresh user identifiers. Values are expected to be universally unique.
#[cfg_attr(test, mockall::automock)]
pub trait IdentifierProvider: Send + Sync {
    fn next_id(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> IdentifierProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CreateUserEntity: Send + Sync {
    fn create_user_entity(&self, input: CreateUserInput) -> User;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistUser: Send + Sync {
    /// Writes the full entity keyed by `id`. An existing record with the same `id` is replaced.
    async fn persist_user(&self, user: &User) -> UserResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetUsersByRole: Send + Sync {
    /// Returns every user the store reports for `role`, each re-validated. Never `None`;
    /// an empty match is an empty `Vec`.
    async fn get_users_by_role(&self, role: Role) -> UserResult<Vec<User>>;
}

/// A full user store: anything that can both persist and look up users.
pub trait UserRepository: PersistUser + GetUsersByRole {}

impl<T> UserRepository for T where T: PersistUser + GetUsersByRole {}

#[async_trait]
impl<T> PersistUser for Arc<T>
where
    T: PersistUser + ?Sized,
{
    async fn persist_user(&self, user: &User) -> UserResult<()> {
        (**self).persist_user(user).await
    }
}

#[async_trait]
impl<T> GetUsersByRole for Arc<T>
where
    T: GetUsersByRole + ?Sized,
{
    async fn get_users_by_role(&self, role: Role) -> UserResult<Vec<User>> {
        (**self).get_users_by_role(role).await
    }
}

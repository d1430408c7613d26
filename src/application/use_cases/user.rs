use tracing::info;
use validator::Validate;

use crate::core::models::{CreateUserInput, Role, User};
use crate::domains::user_management::{CreateUserEntity, GetUsersByRole, PersistUser};
use crate::errors::UserResult;

/// Validates the input, builds the entity and persists it.
///
/// The entity is only handed back once the write succeeded. A failed write leaves
/// nothing to clean up because the caller never saw the entity.
#[derive(Debug, Clone)]
pub struct CreateUserUseCase<P, E> {
    persist_user: P,
    create_user_entity: E,
}

impl<P, E> CreateUserUseCase<P, E>
where
    P: PersistUser,
    E: CreateUserEntity,
{
    pub fn new(persist_user: P, create_user_entity: E) -> Self {
        Self {
            persist_user,
            create_user_entity,
        }
    }

    /// # Errors
    ///
    /// Returns `UserError::InputValidation` before touching the store if `input` is
    /// invalid, or the store's error unchanged if the write fails.
    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        input.validate()?;

        let user = self.create_user_entity.create_user_entity(input);
        self.persist_user.persist_user(&user).await?;

        info!(user_id = %user.id, role = %user.role, "created user");
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct GetUsersByRoleUseCase<G> {
    get_users_by_role: G,
}

impl<G: GetUsersByRole> GetUsersByRoleUseCase<G> {
    pub fn new(get_users_by_role: G) -> Self {
        Self { get_users_by_role }
    }

    /// # Errors
    ///
    /// Propagates store and record-validation errors unchanged.
    pub async fn execute(&self, role: Role) -> UserResult<Vec<User>> {
        self.get_users_by_role.get_users_by_role(role).await
    }
}

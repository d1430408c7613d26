//! Composition root: wires configuration, the DynamoDB client, the repository and the
//! entity factory into the two user use cases.

use std::sync::Arc;

use crate::adapters::persistence::DynamoDbUserRepository;
use crate::application::use_cases::{CreateUserUseCase, GetUsersByRoleUseCase};
use crate::core::config::AppConfig;
use crate::core::models::{CreateUserInput, Role, User};
use crate::domains::user_management::{
    CreateUserEntity, SystemClock, UserEntityFactory, UserRepository, UuidV4Provider,
};
use crate::errors::UserResult;
use crate::infrastructure::aws::DynamoDbDocumentClient;

/// The platform as deployed: DynamoDB storage, v4 UUIDs and the system clock.
pub type DynamoDbUserPlatform = UserPlatform<
    DynamoDbUserRepository<DynamoDbDocumentClient>,
    UserEntityFactory<UuidV4Provider, SystemClock>,
>;

/// Both user use cases sharing one repository.
#[derive(Debug)]
pub struct UserPlatform<R, E> {
    create_user: CreateUserUseCase<Arc<R>, E>,
    get_users_by_role: GetUsersByRoleUseCase<Arc<R>>,
}

impl<R, E> UserPlatform<R, E>
where
    R: UserRepository,
    E: CreateUserEntity,
{
    pub fn new(repository: R, entity_factory: E) -> Self {
        let repository = Arc::new(repository);
        Self {
            create_user: CreateUserUseCase::new(Arc::clone(&repository), entity_factory),
            get_users_by_role: GetUsersByRoleUseCase::new(repository),
        }
    }

    /// # Errors
    ///
    /// See [`CreateUserUseCase::execute`].
    pub async fn create_user(&self, input: CreateUserInput) -> UserResult<User> {
        self.create_user.execute(input).await
    }

    /// # Errors
    ///
    /// See [`GetUsersByRoleUseCase::execute`].
    pub async fn get_users_by_role(&self, role: Role) -> UserResult<Vec<User>> {
        self.get_users_by_role.execute(role).await
    }
}

impl DynamoDbUserPlatform {
    /// Builds the deployed platform. `config` must already be validated.
    pub async fn from_config(config: &AppConfig) -> Self {
        let client = DynamoDbDocumentClient::from_options(&config.dynamo_db).await;
        let repository = DynamoDbUserRepository::from_config(client, config);

        Self::new(repository, UserEntityFactory::system())
    }
}

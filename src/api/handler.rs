//! API Lambda handler - thin router over the user platform.
//!
//! Payloads name an `action`:
//! - `{"action": "createUser", "email": ..., "role": ...}`
//! - `{"action": "getUsersByRole", "role": ...}`

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{CreateUserInput, GetUsersByRoleInput};
use crate::domains::user_management::{CreateUserEntity, UserRepository};
use crate::errors::UserError;
use crate::platform::{DynamoDbUserPlatform, UserPlatform};

pub use self::function_handler as handler;

static PLATFORM: OnceCell<DynamoDbUserPlatform> = OnceCell::const_new();

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UserRequest {
    CreateUser(CreateUserInput),
    GetUsersByRole { role: String },
}

/// Lambda handler for the API entrypoint.
///
/// Configuration is loaded and the platform built on the first invocation only.
///
/// # Errors
///
/// Returns an error if the configuration is invalid; request failures are reported
/// in the response payload instead.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let platform = PLATFORM
        .get_or_try_init(|| async {
            let config = AppConfig::from_env()?;
            info!(environment = %config.environment, table = %config.user_table_name, "building user platform");
            Ok::<_, UserError>(DynamoDbUserPlatform::from_config(&config).await)
        })
        .await
        .map_err(|e| {
            error!("Config error: {}", e);
            Error::from(e.to_string())
        })?;

    Ok(handle_request(platform, &event.payload).await)
}

/// Routes one request payload to the matching use case and renders the response.
pub async fn handle_request<R, E>(platform: &UserPlatform<R, E>, payload: &Value) -> Value
where
    R: UserRepository,
    E: CreateUserEntity,
{
    let request = match UserRequest::deserialize(payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Request parse error: {}", e);
            return helpers::err_response(400, &format!("Parse Error: {e}"));
        }
    };

    match request {
        UserRequest::CreateUser(input) => match platform.create_user(input).await {
            Ok(user) => helpers::json_response(201, &user),
            Err(e) => error_response(&e),
        },
        UserRequest::GetUsersByRole { role } => {
            let input = match GetUsersByRoleInput::parse(&role) {
                Ok(input) => input,
                Err(e) => return error_response(&e),
            };
            match platform.get_users_by_role(input.role).await {
                Ok(users) => helpers::json_response(200, &users),
                Err(e) => error_response(&e),
            }
        }
    }
}

fn error_response(error: &UserError) -> Value {
    if error.is_validation() {
        return helpers::err_response(400, &error.to_string());
    }
    error!("Request failed: {}", error);
    helpers::err_response(500, &error.to_string())
}

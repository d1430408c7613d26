//! DynamoDB-backed user store.
//!
//! Users live in one table keyed by `id`, with a secondary index keyed by `role`.
//! Every attribute is stored as a string. Records read back are treated as untrusted
//! and re-validated before they reach a caller.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, warn};
use validator::ValidateEmail;

use crate::core::config::AppConfig;
use crate::core::models::{Role, User, format_timestamp, parse_timestamp};
use crate::domains::user_management::{GetUsersByRole, PersistUser};
use crate::errors::{UserError, UserResult};
use crate::infrastructure::aws::{DocumentClient, Item, PutItemRequest, QueryRequest};

const ROLE_NAME_PLACEHOLDER: &str = "#role";
const ROLE_VALUE_PLACEHOLDER: &str = ":role";

#[derive(Debug, Clone)]
pub struct DynamoDbUserRepository<C> {
    client: C,
    user_table_name: String,
    user_table_role_index_name: String,
}

impl<C: DocumentClient> DynamoDbUserRepository<C> {
    pub fn new(
        client: C,
        user_table_name: impl Into<String>,
        user_table_role_index_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            user_table_name: user_table_name.into(),
            user_table_role_index_name: user_table_role_index_name.into(),
        }
    }

    pub fn from_config(client: C, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.user_table_name.clone(),
            config.user_table_role_index_name.clone(),
        )
    }

    fn role_query(&self, role: Role) -> QueryRequest {
        // `role` is a DynamoDB reserved word, so it is always aliased.
        QueryRequest {
            table_name: self.user_table_name.clone(),
            index_name: Some(self.user_table_role_index_name.clone()),
            key_condition_expression: format!("{ROLE_NAME_PLACEHOLDER} = {ROLE_VALUE_PLACEHOLDER}"),
            expression_attribute_names: HashMap::from([(
                ROLE_NAME_PLACEHOLDER.to_string(),
                "role".to_string(),
            )]),
            expression_attribute_values: HashMap::from([(
                ROLE_VALUE_PLACEHOLDER.to_string(),
                AttributeValue::S(role.as_str().to_string()),
            )]),
        }
    }
}

#[async_trait]
impl<C: DocumentClient> PersistUser for DynamoDbUserRepository<C> {
    async fn persist_user(&self, user: &User) -> UserResult<()> {
        debug!(user_id = %user.id, role = %user.role, "persisting user");

        self.client
            .put_item(PutItemRequest {
                table_name: self.user_table_name.clone(),
                item: user_to_item(user),
            })
            .await
    }
}

#[async_trait]
impl<C: DocumentClient> GetUsersByRole for DynamoDbUserRepository<C> {
    async fn get_users_by_role(&self, role: Role) -> UserResult<Vec<User>> {
        let response = self.client.query(self.role_query(role)).await?;

        if response.last_evaluated_key.is_some() {
            warn!(%role, "role query returned a partial page; remaining users were not fetched");
        }

        let Some(items) = response.items else {
            return Ok(Vec::new());
        };

        debug!(%role, count = items.len(), "validating queried users");
        items.iter().map(user_from_item).collect()
    }
}

/// Maps an entity to the item written under the user table.
#[must_use]
pub fn user_to_item(user: &User) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(user.id.clone())),
        ("email".to_string(), AttributeValue::S(user.email.clone())),
        (
            "role".to_string(),
            AttributeValue::S(user.role.as_str().to_string()),
        ),
        (
            "createdAt".to_string(),
            AttributeValue::S(format_timestamp(&user.created_at)),
        ),
        (
            "updatedAt".to_string(),
            AttributeValue::S(format_timestamp(&user.updated_at)),
        ),
    ])
}

/// Validates a raw item against the user schema. Unknown attributes are ignored.
///
/// # Errors
///
/// Returns `UserError::RecordValidation` if any user attribute is missing, is not a
/// string, or holds a value the schema rejects.
pub fn user_from_item(item: &Item) -> UserResult<User> {
    let id = string_attribute(item, "id")?;

    let email = string_attribute(item, "email")?;
    if !email.validate_email() {
        return Err(invalid(&id, "email", "not a valid email address"));
    }

    let role = string_attribute(item, "role")?
        .parse::<Role>()
        .map_err(|_| invalid(&id, "role", "not one of ADMIN, READER, WRITER"))?;

    let created_at = parse_timestamp(&string_attribute(item, "createdAt")?)
        .map_err(|e| invalid(&id, "createdAt", &e))?;
    let updated_at = parse_timestamp(&string_attribute(item, "updatedAt")?)
        .map_err(|e| invalid(&id, "updatedAt", &e))?;

    Ok(User {
        id,
        email,
        role,
        created_at,
        updated_at,
    })
}

fn string_attribute(item: &Item, name: &str) -> UserResult<String> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(UserError::RecordValidation(format!(
            "{name}: expected a string attribute"
        ))),
        None => Err(UserError::RecordValidation(format!("{name}: missing"))),
    }
}

fn invalid(id: &str, field: &str, reason: &str) -> UserError {
    UserError::RecordValidation(format!("user {id}: {field}: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, &str)]) -> Item {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), AttributeValue::S((*v).to_string())))
            .collect()
    }

    #[test]
    fn extra_attributes_are_ignored() {
        let raw = item(&[
            ("id", "TestUserId"),
            ("email", "test@email.com"),
            ("role", "READER"),
            ("createdAt", "2023-09-10T05:58:16.945Z"),
            ("updatedAt", "2023-09-10T05:58:16.945Z"),
            ("legacyFlag", "yes"),
        ]);

        let user = user_from_item(&raw).unwrap();
        assert_eq!(user.role, Role::Reader);
        assert!(!user_to_item(&user).contains_key("legacyFlag"));
    }

    #[test]
    fn non_string_attribute_is_rejected() {
        let mut raw = item(&[
            ("id", "TestUserId"),
            ("email", "test@email.com"),
            ("createdAt", "2023-09-10T05:58:16.945Z"),
            ("updatedAt", "2023-09-10T05:58:16.945Z"),
        ]);
        raw.insert("role".to_string(), AttributeValue::N("1".to_string()));

        let err = user_from_item(&raw).unwrap_err();
        assert!(matches!(err, UserError::RecordValidation(msg) if msg.starts_with("role")));
    }

    #[test]
    fn unknown_role_is_a_record_error() {
        let raw = item(&[
            ("id", "TestUserId"),
            ("email", "test@email.com"),
            ("role", "OWNER"),
            ("createdAt", "2023-09-10T05:58:16.945Z"),
            ("updatedAt", "2023-09-10T05:58:16.945Z"),
        ]);

        assert!(matches!(
            user_from_item(&raw),
            Err(UserError::RecordValidation(_))
        ));
    }

    #[test]
    fn malformed_timestamp_is_a_record_error() {
        let raw = item(&[
            ("id", "TestUserId"),
            ("email", "test@email.com"),
            ("role", "ADMIN"),
            ("createdAt", "10/09/2023"),
            ("updatedAt", "2023-09-10T05:58:16.945Z"),
        ]);

        assert!(matches!(
            user_from_item(&raw),
            Err(UserError::RecordValidation(msg)) if msg.contains("createdAt")
        ));
    }

    #[test]
    fn space_separated_timestamp_is_a_record_error() {
        let raw = item(&[
            ("id", "TestUserId"),
            ("email", "test@email.com"),
            ("role", "ADMIN"),
            ("createdAt", "2023-09-10T05:58:16.945Z"),
            ("updatedAt", "2023-09-10 05:58:16.945Z"),
        ]);

        assert!(matches!(
            user_from_item(&raw),
            Err(UserError::RecordValidation(msg)) if msg.contains("updatedAt")
        ));
    }
}

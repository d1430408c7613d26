use std::env;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::errors::UserError;

pub const DEFAULT_USER_TABLE_NAME: &str = "User";
pub const DEFAULT_USER_TABLE_ROLE_INDEX_NAME: &str = "RoleIndex";
pub const DEFAULT_REGION: &str = "ap-southeast-2";
pub const LOCAL_DYNAMODB_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
    Local,
}

impl Environment {
    /// Environments that talk to a DynamoDB Local instance instead of AWS.
    #[must_use]
    pub fn uses_local_store(self) -> bool {
        matches!(self, Environment::Test | Environment::Local)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Local => "local",
        })
    }
}

impl FromStr for Environment {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            "local" => Ok(Environment::Local),
            other => Err(UserError::Config(format!(
                "ENVIRONMENT: '{other}' is not one of development, production, test, local"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbOptions {
    pub region: String,
    pub endpoint: Option<String>,
}

/// Process-wide settings, validated once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub user_table_name: String,
    pub user_table_role_index_name: String,
    pub dynamo_db: DynamoDbOptions,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `UserError::Config` if `ENVIRONMENT` is missing or any value fails validation.
    pub fn from_env() -> Result<Self, UserError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Config` if `ENVIRONMENT` is missing or any value fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UserError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = lookup("ENVIRONMENT")
            .ok_or_else(|| UserError::Config("ENVIRONMENT: not set".to_string()))?
            .parse()?;

        let endpoint = lookup("DYNAMODB_ENDPOINT").or_else(|| {
            environment
                .uses_local_store()
                .then(|| LOCAL_DYNAMODB_ENDPOINT.to_string())
        });

        let config = Self {
            environment,
            user_table_name: lookup("USER_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_USER_TABLE_NAME.to_string()),
            user_table_role_index_name: lookup("USER_TABLE_ROLE_INDEX_NAME")
                .unwrap_or_else(|| DEFAULT_USER_TABLE_ROLE_INDEX_NAME.to_string()),
            dynamo_db: DynamoDbOptions {
                region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                endpoint,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `UserError::Config` naming the first invalid setting.
    pub fn validate(&self) -> Result<(), UserError> {
        require_non_empty("USER_TABLE_NAME", &self.user_table_name)?;
        require_non_empty("USER_TABLE_ROLE_INDEX_NAME", &self.user_table_role_index_name)?;
        require_non_empty("AWS_REGION", &self.dynamo_db.region)?;

        if let Some(endpoint) = &self.dynamo_db.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| UserError::Config(format!("DYNAMODB_ENDPOINT: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(UserError::Config(format!(
                    "DYNAMODB_ENDPOINT: unsupported scheme '{}'",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}

fn require_non_empty(name: &str, value: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::Config(format!("{name}: must not be empty")));
    }
    Ok(())
}

//! User Platform - create users and look them up by role in DynamoDB.
//!
//! The crate is layered so every collaborator can be replaced on its own:
//! 1. An entity factory that assigns identity and timestamps through injected providers
//! 2. A user repository exposing `persist_user` / `get_users_by_role`, backed by DynamoDB
//! 3. Use cases composing the two, and a platform that wires them from configuration
//!
//! # Architecture
//!
//! The system uses:
//! - DynamoDB for storage, with a secondary index on `role`
//! - aws-sdk-dynamodb behind a narrow `DocumentClient` trait
//! - AWS Lambda (feature `api`) as the outer surface
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use user_platform::core::config::AppConfig;
//! use user_platform::core::models::{CreateUserInput, Role};
//! use user_platform::platform::DynamoDbUserPlatform;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     user_platform::setup_logging();
//!
//!     // Fails fast if ENVIRONMENT is missing or any setting is invalid
//!     let config = AppConfig::from_env()?;
//!     let platform = DynamoDbUserPlatform::from_config(&config).await;
//!
//!     let user = platform
//!         .create_user(CreateUserInput {
//!             email: "test@test.com".to_string(),
//!             role: Role::Admin,
//!         })
//!         .await?;
//!     println!("Created {}", user.id);
//!
//!     let admins = platform.get_users_by_role(Role::Admin).await?;
//!     println!("{} admin(s)", admins.len());
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod adapters;
pub mod api;
pub mod application;
pub mod core;
pub mod domains;
pub mod errors;
pub mod infrastructure;
pub mod platform;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). Calling
/// it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// user_platform::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

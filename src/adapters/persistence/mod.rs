//! Persistence adapters for data access.
//!
//! This module contains:
//! - The DynamoDB user repository
//! - The user item mapper and its read-side validation

pub mod user_repository;

pub use user_repository::{DynamoDbUserRepository, user_from_item, user_to_item};

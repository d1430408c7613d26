//! Domain layer for the user platform.
//!
//! This module contains the core business logic organized by domain:
//! - user_management: User entity construction and the store capabilities

pub mod user_management;

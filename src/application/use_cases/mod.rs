//! Use case implementations for the user platform.
//!
//! This module contains:
//! - Create a user
//! - List users holding a role

pub mod user;

pub use user::{CreateUserUseCase, GetUsersByRoleUseCase};

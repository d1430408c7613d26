//! Infrastructure layer for external integrations and technical concerns.
//!
//! This module contains:
//! - AWS services integration (DynamoDB)

pub mod aws;

//! Adapter layer for interface implementations.
//!
//! This module contains adapters that implement domain interfaces:
//! - Persistence adapters (repositories, data access)

pub mod persistence;

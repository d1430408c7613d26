//! Application layer for use cases.
//!
//! Use cases compose the entity factory with the user store; they hold no state of
//! their own beyond the collaborators they were built with.

pub mod use_cases;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::{Clock, CreateUserEntity, IdentifierProvider};
use crate::core::models::{CreateUserInput, User};

/// Random v4 UUIDs rendered in their hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Provider;

impl IdentifierProvider for UuidV4Provider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Builds `User` entities, owning the identity and timestamp policy.
///
/// The factory performs no validation; callers validate `CreateUserInput` first.
/// Given fixed providers its output is fully deterministic.
#[derive(Debug, Clone)]
pub struct UserEntityFactory<I, C> {
    identifiers: I,
    clock: C,
}

impl<I, C> UserEntityFactory<I, C>
where
    I: IdentifierProvider,
    C: Clock,
{
    pub fn new(identifiers: I, clock: C) -> Self {
        Self { identifiers, clock }
    }
}

impl UserEntityFactory<UuidV4Provider, SystemClock> {
    #[must_use]
    pub fn system() -> Self {
        Self::new(UuidV4Provider, SystemClock)
    }
}

impl<I, C> CreateUserEntity for UserEntityFactory<I, C>
where
    I: IdentifierProvider,
    C: Clock,
{
    fn create_user_entity(&self, input: CreateUserInput) -> User {
        let id = self.identifiers.next_id();
        // Stored timestamps carry millisecond precision.
        let created_at = self.clock.now().trunc_subsecs(3);

        User {
            id,
            email: input.email,
            role: input.role,
            created_at,
            updated_at: created_at,
        }
    }
}

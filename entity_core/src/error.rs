//! Errors raised by strict damage application

use thiserror::Error;

/// Error applying damage under [`DamagePolicy::Strict`](crate::DamagePolicy::Strict)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DamageError {
    #[error("Negative damage {amount} rejected for '{name}'")]
    NegativeDamage { name: String, amount: i64 },
}

//! Combat - Damage application and the fixed-damage attack

mod resolution;
mod result;

pub use result::{AttackOutcome, DamageOutcome};

/// Damage dealt by every attack
pub const ATTACK_DAMAGE: i64 = 1;

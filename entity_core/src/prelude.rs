//! Prelude module for convenient imports
//!
//! ```rust
//! use entity_core::prelude::*;
//! ```

// Core types
pub use crate::entity::{Entity, DEFAULT_HEALTH};

// Combat
pub use crate::combat::{AttackOutcome, DamageOutcome, ATTACK_DAMAGE};
pub use crate::error::DamageError;

// Observers
pub use crate::events::{CombatEvent, CombatObserver, MessageLog, TracingObserver};

// Config
pub use crate::config::{CombatRules, DamagePolicy};

//! entity_core - Named combatants for a turn-based combat toy
//!
//! This library provides:
//! - Entity: A named combatant with a health pool and alive/dead status
//! - Damage resolution: `take_damage` / `apply_damage` with status evaluation
//! - Attack: A fixed 1-point hit, guarded on both parties being alive
//! - CombatObserver: Status messages produced after state transitions
//! - CombatRules: TOML-configurable default health and damage policy
//!
//! # Quick Start
//!
//! ```rust
//! use entity_core::prelude::*;
//!
//! let knight = Entity::new("Knight");
//! let mut dragon = Entity::with_health("Dragon", 10);
//!
//! let outcome = knight.attack(&mut dragon);
//! assert!(outcome.landed());
//! assert_eq!(dragon.health(), 9);
//! assert_eq!(knight.health(), 10);
//!
//! let mut log = MessageLog::new();
//! dragon.take_damage_observed(20, &mut log);
//! assert!(!dragon.is_alive());
//! println!("{}", dragon);
//! ```

pub mod combat;
pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod prelude;

#[cfg(test)]
mod test_log;

// Core API - what most users need
pub use combat::{AttackOutcome, DamageOutcome, ATTACK_DAMAGE};
pub use entity::{Entity, DEFAULT_HEALTH};

// Status messages
pub use events::{CombatEvent, CombatObserver, MessageLog, TracingObserver};

// Configuration
pub use config::{CombatRules, ConfigError, DamagePolicy};
pub use error::DamageError;

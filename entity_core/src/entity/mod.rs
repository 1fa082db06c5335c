//! Entity - A named combatant with health and alive/dead status

use crate::config::CombatRules;
use std::fmt;
use tracing::info;

/// Starting health when none is supplied
pub const DEFAULT_HEALTH: i64 = 10;

/// A single combat participant
///
/// Health never drops below zero. Once an entity dies its health is pinned
/// at zero and it ignores all further damage; there is no revival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    pub(crate) health: i64,
    pub(crate) is_alive: bool,
}

impl Entity {
    /// Create an entity with [`DEFAULT_HEALTH`]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_health(name, DEFAULT_HEALTH)
    }

    /// Create an entity with an explicit starting health
    ///
    /// A starting health of zero or less yields an already-dead entity
    /// with health clamped to zero.
    pub fn with_health(name: impl Into<String>, starting_health: i64) -> Self {
        let mut entity = Entity {
            name: name.into(),
            health: starting_health,
            is_alive: true,
        };
        entity.evaluate_status();
        entity
    }

    /// Create an entity using the starting health from a rule set
    pub fn from_rules(name: impl Into<String>, rules: &CombatRules) -> Self {
        Self::with_health(name, rules.default_health)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Clamp health and flip to dead once it is non-positive
    ///
    /// Returns true only on the call that performs the death transition.
    pub(crate) fn evaluate_status(&mut self) -> bool {
        if self.health > 0 {
            return false;
        }
        self.health = 0;
        if !self.is_alive {
            return false;
        }
        self.is_alive = false;
        info!(target: "entity_core::combat", name = %self.name, "entity died");
        true
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HP: {}, Alive: {})", self.name, self.health, self.is_alive)
    }
}

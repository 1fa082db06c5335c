//! Status messages - Events emitted after combat state transitions

use crate::combat::{AttackOutcome, DamageOutcome};
use crate::entity::Entity;
use std::fmt;
use tracing::info;

/// A human-readable combat event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Damaged {
        name: String,
        amount: i64,
        remaining: i64,
    },
    Died {
        name: String,
    },
    DamageIgnored {
        name: String,
        amount: i64,
    },
    Attacked {
        attacker: String,
        target: String,
    },
    AttackerDead {
        attacker: String,
    },
    TargetDead {
        attacker: String,
        target: String,
    },
}

impl CombatEvent {
    /// Expand a damage outcome into the events it produced, in order
    ///
    /// `entity` is the damaged entity after the outcome was applied.
    pub fn from_damage(entity: &Entity, outcome: &DamageOutcome) -> Vec<CombatEvent> {
        let name = entity.name().to_string();
        match *outcome {
            DamageOutcome::Applied { amount, remaining } => vec![CombatEvent::Damaged {
                name,
                amount,
                remaining,
            }],
            DamageOutcome::Killed { amount, overkill } => vec![
                CombatEvent::Damaged {
                    name: name.clone(),
                    amount,
                    remaining: -overkill,
                },
                CombatEvent::Died { name },
            ],
            DamageOutcome::Ignored { amount } => vec![CombatEvent::DamageIgnored { name, amount }],
        }
    }

    /// Expand an attack outcome into the events it produced, in order
    pub fn from_attack(
        attacker: &Entity,
        target: &Entity,
        outcome: &AttackOutcome,
    ) -> Vec<CombatEvent> {
        let attacker_name = attacker.name().to_string();
        match outcome {
            AttackOutcome::AttackerDead => vec![CombatEvent::AttackerDead {
                attacker: attacker_name,
            }],
            AttackOutcome::TargetDead => vec![CombatEvent::TargetDead {
                attacker: attacker_name,
                target: target.name().to_string(),
            }],
            AttackOutcome::Hit(damage) => {
                let mut events = vec![CombatEvent::Attacked {
                    attacker: attacker_name,
                    target: target.name().to_string(),
                }];
                events.extend(Self::from_damage(target, damage));
                events
            }
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Damaged {
                name,
                amount,
                remaining,
            } => write!(f, "{name} takes {amount} damage. HP remaining: {remaining}"),
            CombatEvent::Died { name } => write!(f, "{name} fell to 0 HP and died."),
            CombatEvent::DamageIgnored { name, .. } => {
                write!(f, "{name} is already dead and cannot take more damage.")
            }
            CombatEvent::Attacked { attacker, target } => write!(f, "{attacker} attacks {target}!"),
            CombatEvent::AttackerDead { attacker } => {
                write!(f, "{attacker} is dead and cannot attack.")
            }
            CombatEvent::TargetDead { attacker, target } => {
                write!(f, "{target} is already dead. {attacker} cannot attack a corpse.")
            }
        }
    }
}

/// Receives combat events after each state transition
pub trait CombatObserver {
    fn on_event(&mut self, event: &CombatEvent);
}

/// Logs every event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CombatObserver for TracingObserver {
    fn on_event(&mut self, event: &CombatEvent) {
        info!(target: "entity_core::events", "{event}");
    }
}

/// Collects rendered messages in the order they were emitted
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl CombatObserver for MessageLog {
    fn on_event(&mut self, event: &CombatEvent) {
        self.messages.push(event.to_string());
    }
}

impl Entity {
    /// [`Entity::with_health`], reporting a death at construction
    pub fn with_health_observed(
        name: impl Into<String>,
        starting_health: i64,
        observer: &mut dyn CombatObserver,
    ) -> Self {
        let entity = Self::with_health(name, starting_health);
        if !entity.is_alive() {
            observer.on_event(&CombatEvent::Died {
                name: entity.name().to_string(),
            });
        }
        entity
    }

    /// [`Entity::take_damage`], then report the resulting events
    pub fn take_damage_observed(
        &mut self,
        amount: i64,
        observer: &mut dyn CombatObserver,
    ) -> DamageOutcome {
        let outcome = self.take_damage(amount);
        for event in CombatEvent::from_damage(self, &outcome) {
            observer.on_event(&event);
        }
        outcome
    }

    /// [`Entity::attack`], then report the resulting events
    pub fn attack_observed(
        &self,
        target: &mut Entity,
        observer: &mut dyn CombatObserver,
    ) -> AttackOutcome {
        let outcome = self.attack(target);
        for event in CombatEvent::from_attack(self, target, &outcome) {
            observer.on_event(&event);
        }
        outcome
    }
}

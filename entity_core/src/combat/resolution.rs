//! Damage resolution - Apply damage and attacks to entities

use super::result::{AttackOutcome, DamageOutcome};
use super::ATTACK_DAMAGE;
use crate::config::{CombatRules, DamagePolicy};
use crate::entity::Entity;
use crate::error::DamageError;
use tracing::{debug, trace};

impl Entity {
    /// Apply damage without validating the amount
    ///
    /// Dead entities ignore damage. A negative amount raises health on a
    /// living entity; use [`Entity::apply_damage`] with strict rules to
    /// reject it instead.
    pub fn take_damage(&mut self, amount: i64) -> DamageOutcome {
        if !self.is_alive {
            trace!(
                target: "entity_core::combat",
                name = %self.name(),
                amount,
                "damage ignored, already dead"
            );
            return DamageOutcome::Ignored { amount };
        }

        let previous = self.health;
        self.health = previous.saturating_sub(amount);
        debug!(
            target: "entity_core::combat",
            name = %self.name(),
            amount,
            remaining = self.health,
            "damage taken"
        );

        if self.evaluate_status() {
            DamageOutcome::Killed {
                amount,
                overkill: amount.saturating_sub(previous),
            }
        } else {
            DamageOutcome::Applied {
                amount,
                remaining: self.health,
            }
        }
    }

    /// Apply damage according to a rule set's damage policy
    ///
    /// Under [`DamagePolicy::Strict`] negative damage is rejected before any
    /// state is touched, whether or not the entity is alive.
    pub fn apply_damage(
        &mut self,
        amount: i64,
        rules: &CombatRules,
    ) -> Result<DamageOutcome, DamageError> {
        if rules.damage_policy == DamagePolicy::Strict && amount < 0 {
            return Err(DamageError::NegativeDamage {
                name: self.name().to_string(),
                amount,
            });
        }
        Ok(self.take_damage(amount))
    }

    /// Attack another entity for [`ATTACK_DAMAGE`]
    ///
    /// Guards: a dead attacker cannot act, and a dead target cannot be
    /// attacked. The attacker's own state is never modified.
    pub fn attack(&self, target: &mut Entity) -> AttackOutcome {
        if !self.is_alive {
            trace!(target: "entity_core::combat", attacker = %self.name(), "attacker is dead");
            return AttackOutcome::AttackerDead;
        }
        if !target.is_alive {
            trace!(
                target: "entity_core::combat",
                attacker = %self.name(),
                defender = %target.name(),
                "target is already dead"
            );
            return AttackOutcome::TargetDead;
        }

        debug!(
            target: "entity_core::combat",
            attacker = %self.name(),
            defender = %target.name(),
            "attack"
        );
        AttackOutcome::Hit(target.take_damage(ATTACK_DAMAGE))
    }
}

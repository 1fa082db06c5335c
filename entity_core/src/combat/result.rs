//! Outcome types returned by damage and attack resolution

/// What a single damage application did to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Damage landed and the target survived
    Applied {
        amount: i64,
        /// Health left after the hit
        remaining: i64,
    },
    /// Damage landed and brought the target to zero
    Killed {
        amount: i64,
        /// How far below zero the hit would have taken health
        overkill: i64,
    },
    /// Target was already dead; nothing changed
    Ignored { amount: i64 },
}

impl DamageOutcome {
    /// Health left on the target afterwards (0 unless it survived)
    pub fn remaining(&self) -> i64 {
        match self {
            DamageOutcome::Applied { remaining, .. } => *remaining,
            DamageOutcome::Killed { .. } | DamageOutcome::Ignored { .. } => 0,
        }
    }

    pub fn is_lethal(&self) -> bool {
        matches!(self, DamageOutcome::Killed { .. })
    }

    /// Whether the target's state was touched at all
    pub fn was_applied(&self) -> bool {
        !matches!(self, DamageOutcome::Ignored { .. })
    }
}

/// Result of one entity attacking another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attack landed with the given damage result
    Hit(DamageOutcome),
    /// Attacker is dead and cannot act
    AttackerDead,
    /// Target is already dead
    TargetDead,
}

impl AttackOutcome {
    pub fn landed(&self) -> bool {
        matches!(self, AttackOutcome::Hit(_))
    }

    /// Whether the attack killed the target
    pub fn is_killing_blow(&self) -> bool {
        self.damage().is_some_and(DamageOutcome::is_lethal)
    }

    pub fn damage(&self) -> Option<&DamageOutcome> {
        match self {
            AttackOutcome::Hit(damage) => Some(damage),
            _ => None,
        }
    }
}

//! Authored move data and the per-battle runtime copy

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::pokemon_type::Type;
use super::stats::StatModifier;
use super::status::Status;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Who a move's effects land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    #[serde(rename = "Self")]
    User,
    Foe,
}

/// Immutable move data, authored once and loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub number: u16,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub power: u16,
    /// Maximum uses
    pub pp: u8,
    /// Hit chance in percent
    pub accuracy: u8,
    pub category: MoveCategory,
    pub target: MoveTarget,
    /// Chance in percent that the secondary effects trigger
    #[serde(default)]
    pub effect_chance: u8,
    #[serde(default)]
    pub status_effects: Vec<Status>,
    #[serde(default)]
    pub stat_modifiers: Vec<StatModifier>,
}

impl MoveDefinition {
    /// Check the authored ranges
    pub fn validate(&self) -> Result<(), MoveError> {
        let invalid = |reason: String| MoveError::Invalid {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("empty name".into()));
        }
        if self.pp == 0 {
            return Err(invalid("pp must be at least 1".into()));
        }
        if self.accuracy > 100 {
            return Err(invalid(format!("accuracy {} exceeds 100", self.accuracy)));
        }
        if self.effect_chance > 100 {
            return Err(invalid(format!(
                "effect chance {} exceeds 100",
                self.effect_chance
            )));
        }
        if let Some(m) = self.stat_modifiers.iter().find(|m| !m.is_valid()) {
            return Err(invalid(format!("{} stages out of range: {}", m.stat, m.stages)));
        }
        Ok(())
    }

    /// Whether the move carries any secondary effect
    pub fn has_secondary_effects(&self) -> bool {
        !self.status_effects.is_empty() || !self.stat_modifiers.is_empty()
    }
}

/// Runtime copy of a move owned by one battler
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    base: Arc<MoveDefinition>,
    pp: u8,
}

impl Move {
    /// Create a runtime move with full PP
    pub fn new(base: Arc<MoveDefinition>) -> Self {
        let pp = base.pp;
        Self { base, pp }
    }

    pub fn base(&self) -> &MoveDefinition {
        &self.base
    }

    /// Remaining PP
    pub fn pp(&self) -> u8 {
        self.pp
    }

    pub fn max_pp(&self) -> u8 {
        self.base.pp
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn move_type(&self) -> Type {
        self.base.move_type
    }

    pub fn is_usable(&self) -> bool {
        self.pp > 0
    }

    /// Spend one PP
    pub fn use_pp(&mut self) -> Result<u8, MoveError> {
        if self.pp == 0 {
            return Err(MoveError::OutOfPp(self.base.name.clone()));
        }
        self.pp -= 1;
        Ok(self.pp)
    }

    /// Restore up to `amount` PP, returns the amount actually restored
    pub fn restore_pp(&mut self, amount: u8) -> u8 {
        let restored = amount.min(self.max_pp() - self.pp);
        self.pp += restored;
        restored
    }

    pub fn restore_all(&mut self) {
        self.pp = self.max_pp();
    }
}

//! Stats and stage modifiers carried by move effects

use serde::{Deserialize, Serialize};

/// Lowest and highest stage a stat can sit at
pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Stats a move effect can raise or lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAttack => "Sp. Atk",
            Stat::SpDefense => "Sp. Def",
            Stat::Speed => "Speed",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasiveness",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage change applied to one stat, e.g. Growl is `Attack -1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: Stat,
    pub stages: i8,
}

impl StatModifier {
    pub fn new(stat: Stat, stages: i8) -> Self {
        Self { stat, stages }
    }

    /// Whether the change is a legal stage delta (non-zero, within -6..=6)
    pub fn is_valid(&self) -> bool {
        self.stages != 0 && (MIN_STAGE..=MAX_STAGE).contains(&self.stages)
    }

    /// Battle text describing the change
    pub fn describe(&self, target: &str) -> String {
        let how = match self.stages {
            i8::MIN..=-3 => "severely fell",
            -2 => "harshly fell",
            -1 => "fell",
            0 => "didn't change",
            1 => "rose",
            2 => "rose sharply",
            _ => "rose drastically",
        };
        format!("{target}'s {} {how}!", self.stat)
    }
}

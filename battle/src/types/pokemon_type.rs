//! Elemental types assigned to moves and creatures

use serde::{Deserialize, Serialize};

/// Elemental types (18 as of Gen 6+)
///
/// Discriminants follow the row order of [`TYPE_CHART`](super::TYPE_CHART).
/// A creature without a secondary type is modelled as `Option<Type>::None`
/// on the defending side rather than as an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

impl Type {
    /// Number of elemental types
    pub const COUNT: usize = 18;

    /// All types in chart order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Multiplier of this type attacking a single defending type
    pub fn effectiveness(self, defender: Type) -> f32 {
        super::multiplier_for(self, Some(defender))
    }

    /// Multiplier of this type attacking a creature with an optional second type.
    ///
    /// The result is the product of both single lookups, so it always lies in
    /// {0, 0.25, 0.5, 1, 2, 4}.
    pub fn effectiveness_dual(self, primary: Type, secondary: Option<Type>) -> f32 {
        super::multiplier_for(self, Some(primary)) * super::multiplier_for(self, secondary)
    }

    /// Parse a type name, ignoring case
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Canonical display name
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_match_chart_order() {
        for (i, t) in Type::all().iter().enumerate() {
            assert_eq!(*t as usize, i, "{t} is out of order");
        }
    }

    #[test]
    fn test_dual_type_products() {
        // Fire vs Grass/Steel = 4x
        assert_eq!(Type::Fire.effectiveness_dual(Type::Grass, Some(Type::Steel)), 4.0);
        // Fire vs Water/Rock = 0.25x
        assert_eq!(Type::Fire.effectiveness_dual(Type::Water, Some(Type::Rock)), 0.25);
        // Ground vs Flying/Steel = immune
        assert_eq!(Type::Ground.effectiveness_dual(Type::Steel, Some(Type::Flying)), 0.0);
    }

    #[test]
    fn test_missing_secondary_type_is_neutral() {
        for attacker in Type::all() {
            for defender in Type::all() {
                assert_eq!(
                    attacker.effectiveness_dual(*defender, None),
                    attacker.effectiveness(*defender)
                );
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Type::from_name("Electric"), Some(Type::Electric));
        assert_eq!(Type::from_name("electric"), Some(Type::Electric));
        assert_eq!(Type::from_name(" FAIRY "), Some(Type::Fairy));
        assert_eq!(Type::from_name("None"), None);
        assert_eq!(Type::from_name("sound"), None);
    }

    #[test]
    fn test_display_round_trips_through_from_name() {
        for t in Type::all() {
            assert_eq!(Type::from_name(&t.to_string()), Some(*t));
        }
    }
}

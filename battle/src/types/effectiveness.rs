//! Type effectiveness chart and multiplier classification

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pokemon_type::Type;

/// Every multiplier the chart (or a dual-type product of it) can produce
pub const MULTIPLIERS: [f32; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

/// Column of the "no type" defender in [`TYPE_CHART`]
const NO_TYPE: usize = 0;

/// 18x19 type effectiveness chart
///
/// Row = attacking type, column = defending type. Column 0 is a defender with
/// no type (the empty secondary slot); the remaining columns follow [`Type`]
/// discriminant order shifted by one.
///
/// Order: None, Normal, Fighting, Flying, Poison, Ground, Rock, Bug, Ghost,
///        Steel, Fire, Water, Grass, Electric, Psychic, Ice, Dragon, Dark, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; Type::COUNT + 1]; Type::COUNT] = [
    // Normal
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Fighting
    [1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 0.5],
    // Flying
    [1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Poison
    [1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 0.5, 0.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0],
    // Ground
    [1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 2.0, 0.5, 1.0, 2.0, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Rock
    [1.0, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0],
    // Bug
    [1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 2.0, 0.5],
    // Ghost
    [1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 1.0],
    // Steel
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0, 1.0, 2.0],
    // Fire
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 0.5, 0.5, 2.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0],
    // Water
    [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0],
    // Grass
    [1.0, 1.0, 1.0, 0.5, 0.5, 2.0, 2.0, 0.5, 1.0, 0.5, 0.5, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0],
    // Electric
    [1.0, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 0.5, 1.0, 1.0],
    // Psychic
    [1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 0.0, 1.0],
    // Ice
    [1.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 2.0, 1.0, 1.0, 0.5, 2.0, 1.0, 1.0],
    // Dragon
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0],
    // Dark
    [1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5],
    // Fairy
    [1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0],
];

/// Damage multiplier of `attacker` against `defender`.
///
/// `None` stands for a defender with no type in that slot.
pub fn multiplier_for(attacker: Type, defender: Option<Type>) -> f32 {
    let column = defender.map_or(NO_TYPE, |t| t as usize + 1);
    TYPE_CHART[attacker as usize][column]
}

/// Coarse effectiveness category of a multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effectiveness {
    NoEffect = 0,
    NotVeryEffective = 1,
    NormallyEffective = 2,
    SuperEffective = 3,
}

impl Effectiveness {
    /// Battle text shown after a hit, if the category has any
    pub fn message(self) -> Option<&'static str> {
        match self {
            Effectiveness::NoEffect => Some("It had no effect!"),
            Effectiveness::NotVeryEffective => Some("It's not very effective..."),
            Effectiveness::NormallyEffective => None,
            Effectiveness::SuperEffective => Some("It's super effective!"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EffectivenessError {
    #[error("Unclassified effectiveness multiplier: {0}")]
    Unclassified(f32),
}

const CATEGORIES: [(f32, Effectiveness); 6] = [
    (0.0, Effectiveness::NoEffect),
    (0.25, Effectiveness::NotVeryEffective),
    (0.5, Effectiveness::NotVeryEffective),
    (1.0, Effectiveness::NormallyEffective),
    (2.0, Effectiveness::SuperEffective),
    (4.0, Effectiveness::SuperEffective),
];

/// Classify a multiplier.
///
/// Only exact members of [`MULTIPLIERS`] are accepted; anything else is an
/// authoring error and is reported instead of rounded.
pub fn category_for(multiplier: f32) -> Result<Effectiveness, EffectivenessError> {
    CATEGORIES
        .iter()
        .find(|(value, _)| *value == multiplier)
        .map(|(_, category)| *category)
        .ok_or(EffectivenessError::Unclassified(multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_covers_every_pair() {
        let defenders = std::iter::once(None).chain(Type::all().iter().copied().map(Some));
        let defenders: Vec<_> = defenders.collect();
        assert_eq!(defenders.len(), 19);

        let mut cells = 0;
        for attacker in Type::all() {
            for defender in &defenders {
                let value = multiplier_for(*attacker, *defender);
                assert!(
                    MULTIPLIERS.contains(&value),
                    "{attacker} vs {defender:?} = {value}"
                );
                cells += 1;
            }
        }
        assert_eq!(cells, 18 * 19);
    }

    #[test]
    fn test_single_type_values_stay_in_base_set() {
        for row in TYPE_CHART.iter() {
            for value in row {
                assert!([0.0, 0.5, 1.0, 2.0].contains(value));
            }
        }
    }

    #[test]
    fn test_no_type_column_is_neutral() {
        for attacker in Type::all() {
            assert_eq!(multiplier_for(*attacker, None), 1.0);
        }
    }

    #[test]
    fn test_chart_is_asymmetric() {
        assert_eq!(multiplier_for(Type::Water, Some(Type::Fire)), 2.0);
        assert_eq!(multiplier_for(Type::Fire, Some(Type::Water)), 0.5);
        assert_eq!(multiplier_for(Type::Ghost, Some(Type::Dark)), 0.5);
        assert_eq!(multiplier_for(Type::Dark, Some(Type::Ghost)), 2.0);
    }

    #[test]
    fn test_immunities() {
        assert_eq!(multiplier_for(Type::Normal, Some(Type::Ghost)), 0.0);
        assert_eq!(multiplier_for(Type::Ghost, Some(Type::Normal)), 0.0);
        assert_eq!(multiplier_for(Type::Ground, Some(Type::Flying)), 0.0);
        assert_eq!(multiplier_for(Type::Psychic, Some(Type::Dark)), 0.0);
        assert_eq!(multiplier_for(Type::Dragon, Some(Type::Fairy)), 0.0);
        assert_eq!(multiplier_for(Type::Poison, Some(Type::Steel)), 0.0);
    }

    #[test]
    fn test_electric_into_ground_has_no_effect() {
        let value = multiplier_for(Type::Electric, Some(Type::Ground));
        assert_eq!(value, 0.0);
        assert_eq!(category_for(value), Ok(Effectiveness::NoEffect));
    }

    #[test]
    fn test_fighting_into_normal_is_super_effective() {
        let value = multiplier_for(Type::Fighting, Some(Type::Normal));
        assert_eq!(value, 2.0);
        assert_eq!(category_for(value), Ok(Effectiveness::SuperEffective));
    }

    #[test]
    fn test_category_for_every_multiplier() {
        assert_eq!(category_for(0.0), Ok(Effectiveness::NoEffect));
        assert_eq!(category_for(0.25), Ok(Effectiveness::NotVeryEffective));
        assert_eq!(category_for(0.5), Ok(Effectiveness::NotVeryEffective));
        assert_eq!(category_for(1.0), Ok(Effectiveness::NormallyEffective));
        assert_eq!(category_for(2.0), Ok(Effectiveness::SuperEffective));
        assert_eq!(category_for(4.0), Ok(Effectiveness::SuperEffective));
    }

    #[test]
    fn test_category_for_rejects_unknown_values() {
        for value in [0.75, 1.5, 3.0, 8.0, -1.0] {
            assert_eq!(
                category_for(value),
                Err(EffectivenessError::Unclassified(value))
            );
        }
        assert!(category_for(f32::NAN).is_err());
    }

    #[test]
    fn test_categories_are_ordered_by_strength() {
        assert!(Effectiveness::NoEffect < Effectiveness::NotVeryEffective);
        assert!(Effectiveness::NotVeryEffective < Effectiveness::NormallyEffective);
        assert!(Effectiveness::NormallyEffective < Effectiveness::SuperEffective);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Effectiveness::SuperEffective.message(),
            Some("It's super effective!")
        );
        assert_eq!(Effectiveness::NormallyEffective.message(), None);
    }
}

//! Domain types shared by the battle engine and the dialog layer

mod effectiveness;
mod moves;
mod pokemon_type;
mod stats;
mod status;

pub use effectiveness::{
    category_for, multiplier_for, Effectiveness, EffectivenessError, MULTIPLIERS, TYPE_CHART,
};
pub use moves::{Move, MoveCategory, MoveDefinition, MoveTarget};
pub use pokemon_type::Type;
pub use stats::{Stat, StatModifier, MAX_STAGE, MIN_STAGE};
pub use status::Status;

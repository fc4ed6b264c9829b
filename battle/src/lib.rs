//! Element types, type effectiveness and move data for a monster-battling client.
//!
//! This crate holds the static battle data consulted by the battle engine and
//! the dialog layer. It has no engine dependencies: everything here is plain
//! data plus pure lookups.
//!
//! # Overview
//!
//! ```text
//! encounter-battle (types, chart, moves) ← THIS CRATE
//!        │
//!        ├─> battle engine (damage formula, turn resolution)
//!        └─> encounter-dialog (battle text, move details panel)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Elemental types with effectiveness lookups
//! - [`TYPE_CHART`] - Authored attacker × defender multiplier table
//! - [`Effectiveness`] - Coarse category of a multiplier, via [`category_for`]
//! - [`MoveDefinition`] - Immutable authored move data
//! - [`Move`] - Per-battle runtime copy owning remaining PP
//! - [`MoveDex`] - Catalogue of definitions loaded from JSON
//!
//! # Example Usage
//!
//! ```
//! use encounter_battle::{category_for, multiplier_for, Effectiveness, Type};
//!
//! let multiplier = multiplier_for(Type::Water, Some(Type::Fire));
//! assert_eq!(multiplier, 2.0);
//! assert_eq!(category_for(multiplier), Ok(Effectiveness::SuperEffective));
//!
//! // A creature without a secondary type
//! assert_eq!(Type::Grass.effectiveness_dual(Type::Water, None), 2.0);
//! ```

mod error;
pub mod movedex;
pub mod types;

pub use error::MoveError;
pub use movedex::MoveDex;
pub use types::{
    category_for, multiplier_for, Effectiveness, EffectivenessError, Move, MoveCategory,
    MoveDefinition, MoveTarget, Stat, StatModifier, Status, Type, MULTIPLIERS, TYPE_CHART,
};

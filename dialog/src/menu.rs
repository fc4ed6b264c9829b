//! Action and move selection for the battle menus

use serde::{Deserialize, Serialize};

use encounter_battle::Move;

/// Label shown in a move slot with no move
pub const EMPTY_SLOT: &str = "-";

/// Number of move slots in the move selector
pub const MOVE_SLOTS: usize = 4;

/// Top-level battle actions, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fight,
    Run,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Fight, Action::Run];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Fight => "Fight",
            Action::Run => "Run",
        }
    }

    /// Next action down the menu, wrapping
    pub fn next(self) -> Self {
        match self {
            Action::Fight => Action::Run,
            Action::Run => Action::Fight,
        }
    }

    pub fn previous(self) -> Self {
        // Two entries, so stepping back is the same as stepping forward
        self.next()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move slot selected in the move selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveChoice {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
}

impl MoveChoice {
    pub const ALL: [MoveChoice; MOVE_SLOTS] = [
        MoveChoice::First,
        MoveChoice::Second,
        MoveChoice::Third,
        MoveChoice::Fourth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next slot among the first `available` slots, wrapping
    pub fn next_within(self, available: usize) -> Self {
        let available = available.clamp(1, MOVE_SLOTS);
        Self::ALL[(self.index() + 1) % available]
    }

    /// Previous slot among the first `available` slots, wrapping
    pub fn previous_within(self, available: usize) -> Self {
        let available = available.clamp(1, MOVE_SLOTS);
        Self::ALL[(self.index() + available - 1) % available]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Selected,
    Normal,
}

/// Highlight for each option, in order
pub fn highlights<T: PartialEq>(options: &[T], selected: &T) -> Vec<Highlight> {
    options
        .iter()
        .map(|option| {
            if option == selected {
                Highlight::Selected
            } else {
                Highlight::Normal
            }
        })
        .collect()
}

/// Labels of the move details panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDetails {
    pub pp: String,
    pub max_pp: String,
    pub type_label: String,
}

impl From<&Move> for MoveDetails {
    fn from(m: &Move) -> Self {
        Self {
            pp: m.pp().to_string(),
            max_pp: m.max_pp().to_string(),
            type_label: m.move_type().to_string(),
        }
    }
}

/// Names for every move slot, padding unused slots with [`EMPTY_SLOT`]
pub fn move_slot_labels(moves: &[Move]) -> [String; MOVE_SLOTS] {
    std::array::from_fn(|i| {
        moves
            .get(i)
            .map_or_else(|| EMPTY_SLOT.to_string(), |m| m.name().to_string())
    })
}

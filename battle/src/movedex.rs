//! Move catalogue loaded from authored JSON at startup

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::MoveError;
use crate::types::{Move, MoveDefinition};

/// Read-only catalogue of every authored move
#[derive(Debug, Clone, Default)]
pub struct MoveDex {
    by_number: BTreeMap<u16, Arc<MoveDefinition>>,
    by_name: HashMap<String, u16>,
}

impl MoveDex {
    /// Parse a JSON array of move definitions
    pub fn from_json(json: &str) -> Result<Self, MoveError> {
        let definitions: Vec<MoveDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Build a catalogue, validating every definition
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = MoveDefinition>,
    ) -> Result<Self, MoveError> {
        let mut dex = Self::default();

        for definition in definitions {
            definition.validate()?;

            let number = definition.number;
            if dex.by_number.contains_key(&number) {
                return Err(MoveError::DuplicateNumber(number));
            }

            let name = normalize(&definition.name);
            if dex.by_name.contains_key(&name) {
                return Err(MoveError::DuplicateName(definition.name));
            }

            dex.by_name.insert(name, number);
            dex.by_number.insert(number, Arc::new(definition));
        }

        tracing::debug!(moves = dex.len(), "Loaded move catalogue");
        Ok(dex)
    }

    pub fn get(&self, number: u16) -> Option<&MoveDefinition> {
        self.by_number.get(&number).map(Arc::as_ref)
    }

    /// Look up a move by name, ignoring case and surrounding whitespace
    pub fn by_name(&self, name: &str) -> Option<&MoveDefinition> {
        let number = self.by_name.get(&normalize(name))?;
        self.get(*number)
    }

    /// Create a fresh runtime copy (full PP) of a catalogued move
    pub fn instantiate(&self, number: u16) -> Option<Move> {
        self.by_number.get(&number).cloned().map(Move::new)
    }

    /// Definitions in move-number order
    pub fn iter(&self) -> impl Iterator<Item = &MoveDefinition> {
        self.by_number.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

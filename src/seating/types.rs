use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

use crate::model::Guest;

/// Result of one planner run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub tables: BTreeMap<usize, Vec<Guest>>, // 0-based table index -> guests, occupied tables only
    pub unseated: Vec<Guest>, // guests that did not fit, in the order they were skipped
}

impl SeatingPlan {
    pub fn seated_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn unseated_count(&self) -> usize {
        self.unseated.len()
    }

    pub fn tables_used(&self) -> usize {
        self.tables.len()
    }

    /// Guests at a table, empty when nobody sits there
    pub fn table(&self, index: usize) -> &[Guest] {
        self.tables.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lowest table index holding a guest with this name
    pub fn table_of(&self, name: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|(_, guests)| guests.iter().any(|g| g.name() == name))
            .map(|(index, _)| *index)
    }

    /// True when every guest got a seat
    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }
}

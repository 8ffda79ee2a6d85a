//! Move list rows for the history panel.

use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Flips the ordering.
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this row jumps to.
    pub step: usize,
    /// Human-readable label.
    pub description: String,
    /// Whether the cursor is at this step.
    pub is_current: bool,
}

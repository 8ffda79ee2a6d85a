//! Error types for history navigation.

use derive_more::{Display, Error};

/// A step index outside the recorded history.
///
/// Collaborators are expected to offer only recorded steps, so this signals
/// a caller bug rather than a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range for a history of {} entries", step, len)]
pub struct InvalidStep {
    /// The requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

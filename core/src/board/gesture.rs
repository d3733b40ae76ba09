//! Gesture descriptors
//!
//! The in-process event surface: the payloads the presentation layer hands
//! to [`Board::apply`](super::Board::apply). Column ids travel as raw
//! strings and are parsed at dispatch time, so a malformed descriptor
//! surfaces as `InvalidColumn` instead of corrupting board state.

use serde::{Deserialize, Serialize};

/// One end of a drag: a column and a position within it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    /// Create a new drag location
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// A finished drag gesture
///
/// `destination` is absent when the drag was cancelled or dropped outside
/// any valid target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub source: DragLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<DragLocation>,
}

/// A user gesture that may transition the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// A drag finished or was cancelled
    DragEnd(DragEnd),
    /// The input bar was submitted
    Submit { text: String },
    /// A card's delete control was activated
    Delete { column_id: String, card_id: String },
}

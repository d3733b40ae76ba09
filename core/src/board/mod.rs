//! Kanban board state and transitions
//!
//! This module provides the three-column board model (To Do, In Progress,
//! Done) and the pure transition functions that compute the next board
//! state from each user gesture.

mod gesture;
mod model;
mod transition;

pub use gesture::*;
pub use model::*;
pub use transition::*;

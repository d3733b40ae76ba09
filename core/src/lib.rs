//! Core library for Taskboard
//!
//! This crate contains the board state model and the pure transition logic:
//! - Reorder and cross-column movement of cards
//! - Card creation and deletion
//! - Gesture dispatch

pub mod board;
pub mod error;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

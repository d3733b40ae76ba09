//! Board model definitions
//!
//! A card is a piece of text with a board-unique id. Each of the three
//! fixed columns holds an ordered stack of cards; the order is the visual
//! stacking order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The three fixed workflow columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// All columns in display order
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Human-readable column title
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Stable identifier used in gesture payloads
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Position in display order
    pub fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Column at the given display position
    pub fn from_index(index: usize) -> Option<ColumnId> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for ColumnId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidColumn(other.to_string())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub content: String,
}

impl Card {
    /// Create a new card
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// The complete board state
///
/// Owns one ordered card list per column plus the monotonic counter used to
/// mint new card ids. Transitions never mutate a board in place; they
/// return a fresh value the caller installs in a single assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    todo: Vec<Card>,
    in_progress: Vec<Card>,
    done: Vec<Card>,
    next_card_number: u64,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board seeded with `n` demo cards in the first column
    ///
    /// Seeded ids are `id-0 .. id-{n-1}`, and the id counter starts past
    /// them so generated ids never collide.
    pub fn sample(n: u64) -> Self {
        let todo = (0..n)
            .map(|k| Card::new(format!("id-{}", k), format!("Quote {}", k)))
            .collect();
        Self {
            todo,
            in_progress: Vec::new(),
            done: Vec::new(),
            next_card_number: n,
        }
    }

    /// Cards in the given column, in stacking order
    pub fn column(&self, id: ColumnId) -> &[Card] {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    pub(crate) fn set_column(&mut self, id: ColumnId, cards: Vec<Card>) {
        match id {
            ColumnId::Todo => self.todo = cards,
            ColumnId::InProgress => self.in_progress = cards,
            ColumnId::Done => self.done = cards,
        }
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        ColumnId::ALL.iter().map(|&c| self.column(c).len()).sum()
    }

    /// Mint the next card id and advance the counter
    pub(crate) fn next_card_id(&mut self) -> String {
        let id = format!("id-{}", self.next_card_number);
        self.next_card_number += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.card_count(), 0);
        for column in ColumnId::ALL {
            assert!(board.column(column).is_empty());
        }
    }

    #[test]
    fn test_sample_board_seeds_first_column() {
        let board = Board::sample(3);
        assert_eq!(board.column(ColumnId::Todo).len(), 3);
        assert!(board.column(ColumnId::InProgress).is_empty());
        assert!(board.column(ColumnId::Done).is_empty());

        assert_eq!(board.column(ColumnId::Todo)[0].id, "id-0");
        assert_eq!(board.column(ColumnId::Todo)[2].content, "Quote 2");
    }

    #[test]
    fn test_sample_board_counter_starts_past_seeds() {
        let mut board = Board::sample(2);
        assert_eq!(board.next_card_id(), "id-2");
        assert_eq!(board.next_card_id(), "id-3");
    }

    #[test]
    fn test_column_id_parse() {
        assert_eq!("todo".parse::<ColumnId>().unwrap(), ColumnId::Todo);
        assert_eq!(
            "in_progress".parse::<ColumnId>().unwrap(),
            ColumnId::InProgress
        );
        assert_eq!("done".parse::<ColumnId>().unwrap(), ColumnId::Done);
    }

    #[test]
    fn test_column_id_parse_rejects_unknown() {
        let err = "backlog".parse::<ColumnId>().unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(ref id) if id == "backlog"));
    }

    #[test]
    fn test_column_id_round_trips_through_index() {
        for column in ColumnId::ALL {
            assert_eq!(ColumnId::from_index(column.index()), Some(column));
        }
        assert_eq!(ColumnId::from_index(3), None);
    }

    #[test]
    fn test_column_titles() {
        assert_eq!(ColumnId::Todo.title(), "To Do");
        assert_eq!(ColumnId::InProgress.title(), "In Progress");
        assert_eq!(ColumnId::Done.title(), "Done");
    }
}

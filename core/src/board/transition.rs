//! Board transition functions
//!
//! Pure functions over card sequences plus the gesture dispatcher. Every
//! operation returns a new value; callers install the next board in a
//! single assignment, so a partially applied move is never observable.

use std::str::FromStr;

use super::gesture::{DragEnd, Gesture};
use super::model::{Board, Card, ColumnId};
use crate::Result;

/// Reorder a single column
///
/// Removes the card at `from` and reinserts it at `to`, shifting the cards
/// in between. `from == to` is the identity. Both indices must be within
/// the sequence.
pub fn reorder(cards: &[Card], from: usize, to: usize) -> Vec<Card> {
    let mut result = cards.to_vec();
    let removed = result.remove(from);
    result.insert(to, removed);
    result
}

/// Move a card between two columns
///
/// Returns the new source and destination sequences as one pair. `from`
/// must be within the source; `to` is clamped to the destination length,
/// so the card can be appended.
pub fn move_between(
    src: &[Card],
    dst: &[Card],
    from: usize,
    to: usize,
) -> (Vec<Card>, Vec<Card>) {
    let mut src_cards = src.to_vec();
    let mut dst_cards = dst.to_vec();

    let moved = src_cards.remove(from);
    let to = to.min(dst_cards.len());
    dst_cards.insert(to, moved);

    (src_cards, dst_cards)
}

impl Board {
    /// Apply a finished drag gesture
    ///
    /// A drag without a destination was cancelled and leaves the board
    /// unchanged. Same-column drags reorder; cross-column drags move.
    pub fn apply_drag(&self, drag: &DragEnd) -> Result<Board> {
        let Some(destination) = &drag.destination else {
            return Ok(self.clone());
        };

        let source_column = ColumnId::from_str(&drag.source.column_id)?;
        let dest_column = ColumnId::from_str(&destination.column_id)?;

        let mut next = self.clone();
        if source_column == dest_column {
            let cards = reorder(self.column(source_column), drag.source.index, destination.index);
            next.set_column(source_column, cards);
        } else {
            let (src_cards, dst_cards) = move_between(
                self.column(source_column),
                self.column(dest_column),
                drag.source.index,
                destination.index,
            );
            next.set_column(source_column, src_cards);
            next.set_column(dest_column, dst_cards);
        }

        Ok(next)
    }

    /// Append a new card built from the input text
    ///
    /// The text is trimmed; blank input adds nothing. Returns the next
    /// board and the id of the added card, if any. Callers clear their
    /// input buffer only on `Some`.
    pub fn add_card(&self, column: ColumnId, text: &str) -> (Board, Option<String>) {
        let content = text.trim();
        if content.is_empty() {
            return (self.clone(), None);
        }

        let mut next = self.clone();
        let id = next.next_card_id();
        let mut cards = self.column(column).to_vec();
        cards.push(Card::new(id.clone(), content));
        next.set_column(column, cards);

        (next, Some(id))
    }

    /// Remove the card with `card_id` from `column`
    ///
    /// Unknown ids are a no-op; other columns are never touched.
    pub fn delete_card(&self, column: ColumnId, card_id: &str) -> Board {
        let mut next = self.clone();
        let cards = self
            .column(column)
            .iter()
            .filter(|card| card.id != card_id)
            .cloned()
            .collect();
        next.set_column(column, cards);
        next
    }

    /// Apply any gesture, producing the next board state
    ///
    /// The only error is `InvalidColumn`; every expected edge case (blank
    /// input, unknown card id, cancelled drag) is a silent no-op.
    pub fn apply(&self, gesture: &Gesture) -> Result<Board> {
        match gesture {
            Gesture::DragEnd(drag) => self.apply_drag(drag),
            Gesture::Submit { text } => Ok(self.add_card(ColumnId::Todo, text).0),
            Gesture::Delete { column_id, card_id } => {
                let column = ColumnId::from_str(column_id)?;
                Ok(self.delete_card(column, card_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use super::super::gesture::DragLocation;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::new(*id, format!("Task {}", id))).collect()
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|card| card.id.as_str()).collect()
    }

    fn drag(source: (&str, usize), destination: Option<(&str, usize)>) -> DragEnd {
        DragEnd {
            source: DragLocation::new(source.0, source.1),
            destination: destination.map(|(column, index)| DragLocation::new(column, index)),
        }
    }

    /// Board invariant: every card id lives in exactly one column.
    fn assert_no_duplicate_ids(board: &Board) {
        let mut seen = std::collections::HashSet::new();
        for column in ColumnId::ALL {
            for card in board.column(column) {
                assert!(seen.insert(card.id.clone()), "duplicate id {}", card.id);
            }
        }
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let list = cards(&["a", "b", "c"]);
        for i in 0..list.len() {
            assert_eq!(reorder(&list, i, i), list);
        }
    }

    #[test]
    fn test_reorder_moves_forward_and_back() {
        let list = cards(&["a", "b", "c", "d"]);
        assert_eq!(ids(&reorder(&list, 0, 2)), vec!["b", "c", "a", "d"]);
        assert_eq!(ids(&reorder(&list, 3, 0)), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_reorder_inverse_restores_original() {
        let list = cards(&["a", "b", "c", "d"]);
        for from in 0..list.len() {
            for to in 0..list.len() {
                let once = reorder(&list, from, to);
                assert_eq!(reorder(&once, to, from), list);
            }
        }
    }

    #[test]
    fn test_move_between_preserves_card() {
        let src = cards(&["a", "b"]);
        let dst = cards(&["c"]);

        let (new_src, new_dst) = move_between(&src, &dst, 0, 1);
        assert_eq!(ids(&new_src), vec!["b"]);
        assert_eq!(ids(&new_dst), vec!["c", "a"]);
        assert_eq!(new_dst[1].content, "Task a");
    }

    #[test]
    fn test_move_between_appends_at_end() {
        let src = cards(&["a"]);
        let dst = cards(&["b", "c"]);

        let (new_src, new_dst) = move_between(&src, &dst, 0, 2);
        assert!(new_src.is_empty());
        assert_eq!(ids(&new_dst), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_between_into_empty_column() {
        let src = cards(&["a"]);
        let (new_src, new_dst) = move_between(&src, &[], 0, 0);
        assert!(new_src.is_empty());
        assert_eq!(ids(&new_dst), vec!["a"]);
    }

    #[test]
    fn test_drag_within_column_reorders() {
        let mut board = Board::new();
        for content in ["one", "two", "three"] {
            board = board.add_card(ColumnId::Todo, content).0;
        }

        let next = board.apply_drag(&drag(("todo", 0), Some(("todo", 2)))).unwrap();
        assert_eq!(ids(next.column(ColumnId::Todo)), vec!["id-1", "id-2", "id-0"]);
        assert_eq!(next.card_count(), board.card_count());
    }

    #[test]
    fn test_drag_across_columns_moves_card() {
        let board = Board::sample(1);

        let next = board.apply_drag(&drag(("todo", 0), Some(("done", 0)))).unwrap();
        assert!(next.column(ColumnId::Todo).is_empty());
        assert!(next.column(ColumnId::InProgress).is_empty());
        assert_eq!(ids(next.column(ColumnId::Done)), vec!["id-0"]);
        assert_eq!(next.column(ColumnId::Done)[0].content, "Quote 0");
        assert_eq!(next.card_count(), 1);
        assert_no_duplicate_ids(&next);
    }

    #[test]
    fn test_drag_without_destination_is_noop() {
        let board = Board::sample(2);
        let next = board.apply_drag(&drag(("todo", 0), None)).unwrap();
        assert_eq!(ids(next.column(ColumnId::Todo)), ids(board.column(ColumnId::Todo)));
    }

    #[test]
    fn test_drag_with_unknown_column_fails() {
        let board = Board::sample(1);

        let err = board
            .apply_drag(&drag(("todo", 0), Some(("archive", 0))))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(ref id) if id == "archive"));
    }

    #[test]
    fn test_cancelled_drag_short_circuits_before_column_parse() {
        let board = Board::sample(1);
        let next = board.apply_drag(&drag(("limbo", 0), None)).unwrap();
        assert_eq!(next.card_count(), 1);
    }

    #[test]
    fn test_add_card_generates_next_id() {
        let board = Board::sample(1);

        let (next, added) = board.add_card(ColumnId::Todo, "Buy milk");
        assert_eq!(added.as_deref(), Some("id-1"));
        assert_eq!(ids(next.column(ColumnId::Todo)), vec!["id-0", "id-1"]);
        assert_eq!(next.column(ColumnId::Todo)[1].content, "Buy milk");
    }

    #[test]
    fn test_add_card_trims_content() {
        let (next, added) = Board::new().add_card(ColumnId::InProgress, "  Buy milk \n");
        assert!(added.is_some());
        assert_eq!(next.column(ColumnId::InProgress)[0].content, "Buy milk");
    }

    #[test]
    fn test_add_card_ignores_blank_input() {
        let board = Board::sample(1);
        for text in ["", "   ", "\t\n"] {
            let (next, added) = board.add_card(ColumnId::Todo, text);
            assert!(added.is_none());
            assert_eq!(next.card_count(), 1);
        }
    }

    #[test]
    fn test_add_card_ids_unique_across_columns() {
        let mut board = Board::new();
        for column in ColumnId::ALL {
            board = board.add_card(column, "task").0;
        }

        assert_eq!(board.card_count(), 3);
        assert_no_duplicate_ids(&board);
    }

    #[test]
    fn test_delete_card_removes_from_named_column_only() {
        let mut board = Board::new();
        board = board.add_card(ColumnId::Todo, "keep").0;
        board = board.add_card(ColumnId::Done, "drop").0;

        let next = board.delete_card(ColumnId::Done, "id-1");
        assert_eq!(ids(next.column(ColumnId::Todo)), vec!["id-0"]);
        assert!(next.column(ColumnId::Done).is_empty());
        assert_eq!(next.card_count(), board.card_count() - 1);
    }

    #[test]
    fn test_delete_unknown_card_is_noop() {
        let board = Board::sample(2);
        let next = board.delete_card(ColumnId::Todo, "id-99");
        assert_eq!(ids(next.column(ColumnId::Todo)), ids(board.column(ColumnId::Todo)));
    }

    #[test]
    fn test_delete_ignores_card_living_in_other_column() {
        let board = Board::sample(1);
        let next = board.delete_card(ColumnId::Done, "id-0");
        assert_eq!(next.card_count(), 1);
    }

    #[test]
    fn test_apply_submit_appends_to_todo() {
        let board = Board::new();
        let next = board
            .apply(&Gesture::Submit { text: "Buy milk".to_string() })
            .unwrap();
        assert_eq!(ids(next.column(ColumnId::Todo)), vec!["id-0"]);
    }

    #[test]
    fn test_apply_delete_with_unknown_column_fails() {
        let board = Board::sample(1);
        let err = board
            .apply(&Gesture::Delete {
                column_id: "trash".to_string(),
                card_id: "id-0".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(_)));
    }

    #[test]
    fn test_total_count_invariant_over_gesture_sequence() {
        let mut board = Board::sample(2);
        assert_eq!(board.card_count(), 2);

        board = board.apply(&Gesture::Submit { text: "three".to_string() }).unwrap();
        assert_eq!(board.card_count(), 3);

        board = board
            .apply(&Gesture::DragEnd(drag(("todo", 1), Some(("in_progress", 0)))))
            .unwrap();
        assert_eq!(board.card_count(), 3);

        board = board
            .apply(&Gesture::DragEnd(drag(("in_progress", 0), Some(("in_progress", 0)))))
            .unwrap();
        assert_eq!(board.card_count(), 3);
        assert_no_duplicate_ids(&board);

        board = board
            .apply(&Gesture::Delete {
                column_id: "in_progress".to_string(),
                card_id: "id-1".to_string(),
            })
            .unwrap();
        assert_eq!(board.card_count(), 2);
    }
}

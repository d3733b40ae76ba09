//! Application state and event handling
//!
//! Owns the single board value and translates key events into core
//! gestures. Every applied gesture replaces the board wholesale; rendering
//! reads the current value each frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use taskboard_core::board::{Board, ColumnId, DragEnd, DragLocation, Gesture};

use crate::ui;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Single-line text editing buffer.
///
/// `cursor` is a char index, always in `0..=char_count`.
#[derive(Debug, Default)]
pub struct TextBuffer {
    input: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Convert a char index to a byte index
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.input.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

/// A drag in progress: the grabbed card and the current drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grab {
    pub source_column: ColumnId,
    pub source_index: usize,
    pub target_column: ColumnId,
    pub target_index: usize,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Grab(Grab),
}

/// Top-level application state
pub struct App {
    pub board: Board,
    pub mode: Mode,
    pub input: TextBuffer,
    pub selected_column: ColumnId,
    pub selected_card: usize,
    pub should_quit: bool,
    status: Option<(String, Instant)>,
}

impl App {
    /// Create an app over an empty board
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: Mode::Normal,
            input: TextBuffer::default(),
            selected_column: ColumnId::Todo,
            selected_card: 0,
            should_quit: false,
            status: None,
        }
    }

    /// Main event loop
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.tick_status();
            terminal.draw(|frame| ui::render(frame, &self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key.code),
            Mode::Insert => self.handle_insert_key(key.code),
            Mode::Grab(grab) => self.handle_grab_key(key.code, grab),
        }
    }

    // ============ Normal mode ============

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') | KeyCode::Char('i') => self.mode = Mode::Insert,
            KeyCode::Left | KeyCode::Char('h') => self.focus_column(-1),
            KeyCode::Right | KeyCode::Char('l') => self.focus_column(1),
            KeyCode::Up | KeyCode::Char('k') => self.focus_card(-1),
            KeyCode::Down | KeyCode::Char('j') => self.focus_card(1),
            KeyCode::Char('d') | KeyCode::Char('x') => self.delete_selected(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => self.grab_selected(),
            _ => {}
        }
    }

    fn focus_column(&mut self, delta: isize) {
        let index = self.selected_column.index() as isize + delta;
        if let Some(column) = usize::try_from(index).ok().and_then(ColumnId::from_index) {
            self.selected_column = column;
            self.clamp_selection();
        }
    }

    fn focus_card(&mut self, delta: isize) {
        let len = self.board.column(self.selected_column).len();
        if len == 0 {
            return;
        }
        let index = (self.selected_card as isize + delta).clamp(0, len as isize - 1);
        self.selected_card = index as usize;
    }

    fn delete_selected(&mut self) {
        let Some(card) = self.board.column(self.selected_column).get(self.selected_card) else {
            return;
        };

        let gesture = Gesture::Delete {
            column_id: self.selected_column.as_str().to_string(),
            card_id: card.id.clone(),
        };
        if self.apply_gesture(gesture) {
            self.notify("Card deleted");
        }
    }

    fn grab_selected(&mut self) {
        if self.board.column(self.selected_column).get(self.selected_card).is_none() {
            return;
        }
        self.mode = Mode::Grab(Grab {
            source_column: self.selected_column,
            source_index: self.selected_card,
            target_column: self.selected_column,
            target_index: self.selected_card,
        });
    }

    // ============ Insert mode ============

    fn handle_insert_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let had_content = !self.input.is_blank();
        let gesture = Gesture::Submit {
            text: self.input.as_str().to_string(),
        };

        // The input buffer is only cleared when a card was actually added.
        if self.apply_gesture(gesture) && had_content {
            self.input.clear();
            self.notify("Card added");
        }
    }

    // ============ Grab mode ============

    fn handle_grab_key(&mut self, code: KeyCode, grab: Grab) {
        match code {
            KeyCode::Esc => self.cancel_grab(grab),
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_grab(grab),
            KeyCode::Left | KeyCode::Char('h') => self.retarget(grab, -1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.retarget(grab, 1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.retarget(grab, 0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.retarget(grab, 0, 1),
            _ => {}
        }
    }

    /// Move the drop target by one column or one slot
    fn retarget(&mut self, grab: Grab, dx: isize, dy: isize) {
        let mut next = grab;

        if dx != 0 {
            let index = grab.target_column.index() as isize + dx;
            if let Some(column) = usize::try_from(index).ok().and_then(ColumnId::from_index) {
                next.target_column = column;
            }
        }

        let max = self.max_target_index(next.target_column, grab);
        next.target_index = match dy {
            d if d < 0 => next.target_index.saturating_sub(1),
            d if d > 0 => (next.target_index + 1).min(max),
            _ => next.target_index.min(max),
        };

        self.mode = Mode::Grab(next);
    }

    /// Largest valid drop index in `target_column`
    ///
    /// Within the source column the card is reinserted after removal, so
    /// the last slot is `len - 1`; in any other column it can also be
    /// appended at `len`.
    fn max_target_index(&self, target_column: ColumnId, grab: Grab) -> usize {
        let len = self.board.column(target_column).len();
        if target_column == grab.source_column {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    fn drop_grab(&mut self, grab: Grab) {
        let gesture = Gesture::DragEnd(DragEnd {
            source: DragLocation::new(grab.source_column.as_str(), grab.source_index),
            destination: Some(DragLocation::new(
                grab.target_column.as_str(),
                grab.target_index,
            )),
        });

        if self.apply_gesture(gesture) {
            // Keep the moved card selected at its new position.
            self.selected_column = grab.target_column;
            self.selected_card = grab.target_index;
            self.clamp_selection();
            self.notify("Card moved");
        }
        self.mode = Mode::Normal;
    }

    fn cancel_grab(&mut self, grab: Grab) {
        let gesture = Gesture::DragEnd(DragEnd {
            source: DragLocation::new(grab.source_column.as_str(), grab.source_index),
            destination: None,
        });

        self.apply_gesture(gesture);
        self.selected_column = grab.source_column;
        self.selected_card = grab.source_index;
        self.mode = Mode::Normal;
        self.notify("Move cancelled");
    }

    // ============ Shared ============

    /// Run a gesture through the core and install the next board
    fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        match self.board.apply(&gesture) {
            Ok(next) => {
                self.board = next;
                self.clamp_selection();
                true
            }
            Err(err) => {
                tracing::warn!("Gesture rejected: {}", err);
                self.notify(format!("Gesture rejected: {}", err));
                false
            }
        }
    }

    /// Board as it would look if the grabbed card were dropped now
    ///
    /// Returns the preview together with the drop position so the renderer
    /// can highlight the card there.
    pub fn drop_preview(&self) -> Option<(Board, ColumnId, usize)> {
        let Mode::Grab(grab) = self.mode else {
            return None;
        };

        let drag = DragEnd {
            source: DragLocation::new(grab.source_column.as_str(), grab.source_index),
            destination: Some(DragLocation::new(
                grab.target_column.as_str(),
                grab.target_index,
            )),
        };
        self.board
            .apply_drag(&drag)
            .ok()
            .map(|board| (board, grab.target_column, grab.target_index))
    }

    /// Keep the selection inside the selected column
    fn clamp_selection(&mut self) {
        let len = self.board.column(self.selected_column).len();
        self.selected_card = self.selected_card.min(len.saturating_sub(1));
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    fn tick_status(&mut self) {
        if let Some((_, since)) = &self.status {
            if since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }
}

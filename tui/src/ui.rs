//! Board rendering
//!
//! Pure function of the application state, redrawn every frame. In grab
//! mode the columns show the drop preview computed by the core transition,
//! with the grabbed card highlighted at its target slot.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use taskboard_core::board::{Board, ColumnId};

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // input bar
            Constraint::Min(5),    // columns
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_columns(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        " Taskboard",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Insert;

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Add a task ");

    let text = if app.input.as_str().is_empty() && !editing {
        Line::from(Span::styled(
            "Today...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input.as_str())
    };

    frame.render_widget(Paragraph::new(text).block(block), area);

    if editing {
        // Borders take one cell on each side.
        let x = area.x + 1 + app.input.cursor() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_columns(frame: &mut Frame, app: &App, area: Rect) {
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let preview = app.drop_preview();
    let (board, ghost) = match &preview {
        Some((board, column, index)) => (board, Some((*column, *index))),
        None => (&app.board, None),
    };

    for (column, column_area) in ColumnId::ALL.into_iter().zip(areas.iter()) {
        render_column(frame, app, board, ghost, column, *column_area);
    }
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    board: &Board,
    ghost: Option<(ColumnId, usize)>,
    column: ColumnId,
    area: Rect,
) {
    let cards = board.column(column);
    let focused = match app.mode {
        Mode::Grab(grab) => grab.target_column == column,
        _ => app.selected_column == column,
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ({}) ", column.title(), cards.len()));

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let style = item_style(app, ghost, column, index);
            ListItem::new(Line::from(Span::styled(card.content.clone(), style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn item_style(app: &App, ghost: Option<(ColumnId, usize)>, column: ColumnId, index: usize) -> Style {
    if let Some((ghost_column, ghost_index)) = ghost {
        if column == ghost_column && index == ghost_index {
            return Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        return Style::default();
    }

    if app.selected_column == column && app.selected_card == index {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(status) = app.status_message() {
        Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(Color::Green),
        ))
    } else {
        let hints = match app.mode {
            Mode::Normal => " ←↓↑→ navigate | enter grab | a add | d delete | q quit",
            Mode::Insert => " enter add card | esc back",
            Mode::Grab(_) => " ←↓↑→ choose slot | enter drop | esc cancel",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(text), area);
}

//! Terminal UI for Taskboard
//!
//! This is the presentation layer: it renders the three-column board and
//! translates key presses into core gestures.

mod app;
mod ui;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

fn main() -> Result<()> {
    init_tracing()?;

    let mut terminal = ratatui::init();
    let result = App::new().run(&mut terminal);
    ratatui::restore();
    result
}

/// Route logs to a file when `TASKBOARD_LOG` is set
///
/// The terminal itself belongs to the board, so nothing may write to
/// stdout while the UI is up.
fn init_tracing() -> Result<()> {
    let Ok(filter) = std::env::var("TASKBOARD_LOG") else {
        return Ok(());
    };

    let log_file = std::fs::File::options()
        .create(true)
        .append(true)
        .open("taskboard.log")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

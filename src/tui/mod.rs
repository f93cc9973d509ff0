//! Terminal user interface
//!
//! Layout: header, the assessment form (or the results panel), a one-line
//! flash bar, and a key-hint status bar, all inside a rounded frame.

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub mod app;
mod controller;
mod events;
mod renderer;
pub mod theme;
pub mod widgets;

pub use app::{AppState, Assessment, Flash, FlashKind, FormRow, Phase};
pub use controller::{spawn_predict, Controller};
pub use events::{Event, EventHandler};
pub use renderer::Renderer;
pub use theme::{Theme, ThemePreset};

use crate::predict::HttpPredictClient;

/// Run the full-screen assessment session until the user quits
pub async fn run(theme: Theme, endpoint: String) -> Result<()> {
    let terminal = setup_terminal()?;
    let state = AppState::new(theme, endpoint.clone());
    let renderer = Renderer::new(terminal);
    let client = Arc::new(HttpPredictClient::new(endpoint));

    let mut controller = Controller::new(state, renderer, client);
    let result = controller.run().await;

    restore_terminal(controller.renderer_mut().terminal_mut())?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

//! TUI Widgets - Reusable UI components

mod flash_bar;
mod form_view;
mod header;
mod results_panel;
mod status_bar;
mod terminal_frame;

pub use flash_bar::{FlashBar, FlashBarState};
pub use form_view::FormView;
pub use header::Header;
pub use results_panel::ResultsPanel;
pub use status_bar::StatusBar;
pub use terminal_frame::TerminalFrame;

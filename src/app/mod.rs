//! Application state and event handling

pub mod controller;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::config::snapshot::FileSnapshotStore;
use crate::deck::{Deck, DeckLoadError};
use crate::theme::Theme;
use crate::ui;
use controller::Controller;

/// The main application
pub struct App {
    /// Active colors
    theme: Theme,

    /// State owner and action dispatcher
    controller: Controller<FileSnapshotStore, StdRng>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        config: &Config,
        deck: Result<Deck, DeckLoadError>,
        store: FileSnapshotStore,
    ) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let controller = Controller::new(deck, config, store, rng);
        let terminal = Self::setup_terminal()?;

        let theme = config.active_theme();
        tracing::debug!(theme = %theme.name, "Using theme");

        Ok(Self { theme, controller, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI
            let state = self.controller.state();
            let theme = &self.theme;
            self.terminal.draw(|frame| {
                ui::draw(frame, state, theme);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let screen = &self.controller.state().screen;
                    if let Some(action) = input::key_to_action(screen, key.code, key.modifiers) {
                        if self.controller.dispatch(action) {
                            break;
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

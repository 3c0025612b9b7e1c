//! Application state definitions

use std::collections::BTreeSet;

use crate::config::snapshot::Snapshot;
use crate::session::{SessionConfig, SessionMode, SessionState, Summary};

/// Which screen is currently displayed, with the data it owns
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    /// Section and size selection
    #[default]
    Home,
    /// Reviewing cards
    Study(ActiveSession),
    /// Completion report
    Completed(Summary),
}

/// A section checkbox on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionToggle {
    pub name: String,
    pub selected: bool,
}

/// A session size choice on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChoice {
    Preset(usize),
    Unlimited,
}

impl SizeChoice {
    /// Display label
    pub fn label(&self) -> String {
        match self {
            SizeChoice::Preset(n) => n.to_string(),
            SizeChoice::Unlimited => "Unlimited".to_string(),
        }
    }
}

/// State for the home (selection) screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    /// Sections offered for selection, all selected by default
    pub sections: Vec<SectionToggle>,
    /// Highlighted section index
    pub cursor: usize,
    /// Size choices: each preset, then Unlimited
    pub size_options: Vec<SizeChoice>,
    /// Selected size choice index
    pub size_index: usize,
    /// Stored session that can be resumed
    pub resumable: Option<Snapshot>,
}

impl HomeState {
    /// Create the home state for a deck's sections
    pub fn new(sections: Vec<String>, presets: &[usize], default_size: usize) -> Self {
        let mut size_options: Vec<SizeChoice> =
            presets.iter().copied().map(SizeChoice::Preset).collect();
        size_options.push(SizeChoice::Unlimited);

        let size_index = presets.iter().position(|&p| p == default_size).unwrap_or(0);

        Self {
            sections: sections
                .into_iter()
                .map(|name| SectionToggle { name, selected: true })
                .collect(),
            cursor: 0,
            size_options,
            size_index,
            resumable: None,
        }
    }

    /// Names of the checked sections
    pub fn selected_tags(&self) -> BTreeSet<String> {
        self.sections.iter().filter(|s| s.selected).map(|s| s.name.clone()).collect()
    }

    /// Currently selected size choice
    pub fn size_choice(&self) -> SizeChoice {
        self.size_options.get(self.size_index).copied().unwrap_or(SizeChoice::Unlimited)
    }

    /// Session configuration for the current selection
    pub fn session_config(&self) -> SessionConfig {
        let mode = match self.size_choice() {
            SizeChoice::Preset(size) => SessionMode::Fixed { size },
            SizeChoice::Unlimited => SessionMode::Unlimited,
        };
        SessionConfig { selected_tags: self.selected_tags(), mode }
    }

    /// Move the section cursor up
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the section cursor down
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.sections.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the highlighted section
    pub fn toggle_current(&mut self) {
        if let Some(section) = self.sections.get_mut(self.cursor) {
            section.selected = !section.selected;
        }
    }

    /// Select every section, or clear them all when every one is selected
    pub fn toggle_all(&mut self) {
        let select = !self.sections.iter().all(|s| s.selected);
        for section in &mut self.sections {
            section.selected = select;
        }
    }

    /// Select the next size choice, wrapping around
    pub fn next_size(&mut self) {
        if !self.size_options.is_empty() {
            self.size_index = (self.size_index + 1) % self.size_options.len();
        }
    }

    /// Select the previous size choice, wrapping around
    pub fn prev_size(&mut self) {
        if !self.size_options.is_empty() {
            self.size_index =
                (self.size_index + self.size_options.len() - 1) % self.size_options.len();
        }
    }
}

/// A running session as shown on the study screen
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub config: SessionConfig,
    pub state: SessionState,
    /// Whether the answer side is showing
    pub flipped: bool,
}

impl ActiveSession {
    /// Create a session view with the question side up
    pub fn new(config: SessionConfig, state: SessionState) -> Self {
        Self { config, state, flipped: false }
    }

    /// Snapshot for persistence
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { config: self.config.clone(), state: self.state.clone() }
    }

    /// Progress percentage for the gauge
    pub fn progress(&self) -> f64 {
        self.state.progress(&self.config)
    }
}

impl From<Snapshot> for ActiveSession {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot.config, snapshot.state)
    }
}

/// Status message shown at the bottom of the screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Message to display
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
}

impl StatusLine {
    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// Full application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Home screen selection, kept across sessions
    pub home: HomeState,

    /// Status line
    pub status: StatusLine,
}

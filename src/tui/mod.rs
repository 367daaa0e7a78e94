//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod category_view;
pub mod component;
pub mod home;
pub mod item_card;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::catalog::fetch::FetchState;
use crate::catalog::{CatalogDb, ItemSource};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::display_title;

// Re-export TUI components
pub use category_view::CategoryScreen;
pub use component::{Component, ComponentEvent, ContextualComponent};
pub use home::HomeScreen;
pub use item_card::ItemCardState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// The active screen.
///
/// Mirrors the two navigation surfaces: the root path listing categories
/// and the parameterized category path showing the filtered grid.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Home screen with the category list
    Home(HomeScreen),
    /// Category screen with the filtered item grid
    Category(CategoryScreen),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// The item catalog
    pub catalog: CatalogDb,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently active screen
    pub screen: Screen,
    /// In-flight category fetch (at most one)
    pub fetch: FetchState,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` showing the home screen.
    #[must_use]
    pub fn new(catalog: CatalogDb, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            catalog,
            config,
            theme,
            screen: Screen::Home(HomeScreen::new()),
            fetch: FetchState::new(),
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Opens the category screen for `category_id` and starts the fetch.
    ///
    /// The identifier is taken verbatim; matching is case-insensitive at
    /// filter time. Any fetch still in flight for a previous category is
    /// superseded here by the new one.
    pub fn open_category(&mut self, category_id: &str) {
        let items = self
            .catalog
            .items_for_category(category_id)
            .into_iter()
            .cloned()
            .collect();

        self.screen = Screen::Category(CategoryScreen::new(category_id));
        self.fetch.start(items);
        self.set_status(format!("Loading {}...", display_title(category_id)));
    }

    /// Returns to the home screen, abandoning any in-flight fetch.
    pub fn go_home(&mut self) {
        self.fetch.abandon();
        self.screen = Screen::Home(HomeScreen::new());
        self.set_status("");
    }

    /// Opens an external link in the system browser.
    pub fn open_link(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => self.set_status(format!("Opened {url}")),
            Err(e) => self.set_error(format!("Failed to open {url}: {e}")),
        }
    }

    /// Polls the in-flight fetch and installs a delivered result set.
    ///
    /// A result only ever lands in the category screen it was started for;
    /// navigation away abandons the request before the screen changes.
    pub fn poll_fetch(&mut self) {
        if let Some(items) = self.fetch.poll() {
            if let Screen::Category(view) = &mut self.screen {
                let count = items.len();
                view.set_items(items);
                if count == 0 {
                    self.set_status("");
                } else if count == 1 {
                    self.set_status("1 item");
                } else {
                    self.set_status(format!("{count} items"));
                }
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Handles a key event. Returns true when the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // An error overlay consumes the next key press
        if self.error_message.is_some() {
            self.clear_error();
            return false;
        }

        // Global bindings
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            _ => {}
        }

        // Screen-specific input
        let event = match &mut self.screen {
            Screen::Home(screen) => screen.handle_input(key, &self.catalog),
            Screen::Category(screen) => screen.handle_input(key),
        };

        if let Some(event) = event {
            match event {
                ComponentEvent::CategoryChosen(category_id) => self.open_category(&category_id),
                ComponentEvent::LinkActivated(url) => self.open_link(&url),
                ComponentEvent::Back => self.go_home(),
            }
        }

        false
    }
}

/// Set up terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Poll the simulated fetch for a delivered result set
        state.poll_fetch();

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match &state.screen {
        Screen::Home(screen) => screen.render(f, chunks[1], &state.theme, &state.catalog),
        Screen::Category(screen) => screen.render(f, chunks[1], &state.theme),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Render title bar with the app name and current location
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let location = match &state.screen {
        Screen::Home(_) => "Home",
        Screen::Category(screen) => screen.title(),
    };
    let title = format!(" {APP_NAME} - {location}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

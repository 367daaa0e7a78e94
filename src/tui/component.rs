//! Component trait pattern for TUI screens.
//!
//! This module defines the traits and events used to implement
//! self-contained, testable TUI screens that handle their own input and
//! rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally without
    /// needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Extended trait for components that need shared context.
///
/// Some components need read access to shared application data (like the
/// catalog). This trait allows components to receive that context.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events emitted by screens and processed by the parent `AppState`.
///
/// Link activation and card toggling are deliberately separate events with
/// separate input bindings: activating an item's link never reaches the
/// toggle path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User chose a category on the home screen
    CategoryChosen(String),

    /// User activated the selected item's external link
    LinkActivated(String),

    /// User asked to leave the current screen and return home
    Back,
}

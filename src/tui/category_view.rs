//! Category screen: the filtered item grid for one category identifier.
//!
//! Shows a loading line while the simulated fetch is in flight, then either
//! the item cards or an explicit empty state with a path back home.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{display_title, Item};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::item_card::{self, ItemCardState};
use crate::tui::Theme;

/// State for the category screen.
#[derive(Debug, Clone)]
pub struct CategoryScreen {
    /// The category identifier, verbatim from the route that opened it
    category_id: String,
    /// Display title: the identifier with its first character upper-cased
    title: String,
    /// Items delivered for this category, in source order
    items: Vec<Item>,
    /// Per-item card state, parallel to `items`
    cards: Vec<ItemCardState>,
    /// Index of the selected card
    selected: usize,
    /// Whether the fetch for this category is still in flight
    loading: bool,
}

impl CategoryScreen {
    /// Creates a new category screen in the loading state.
    #[must_use]
    pub fn new(category_id: impl Into<String>) -> Self {
        let category_id = category_id.into();
        let title = display_title(&category_id);

        Self {
            category_id,
            title,
            items: Vec::new(),
            cards: Vec::new(),
            selected: 0,
            loading: true,
        }
    }

    /// The category identifier this screen was opened with.
    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The items currently shown.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Installs the delivered item set and resets all card state.
    ///
    /// Every card starts collapsed; expansion state from a previous item
    /// set is intentionally discarded.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.cards = vec![ItemCardState::new(); items.len()];
        self.items = items;
        self.selected = 0;
        self.loading = false;
    }

    /// Card state for the item at `index`, if any.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<ItemCardState> {
        self.cards.get(index).copied()
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// The selected item's external link, if it has one.
    #[must_use]
    pub fn selected_link(&self) -> Option<String> {
        self.selected_item().and_then(|item| item.link.clone())
    }

    /// Flips the selected card between collapsed and expanded.
    pub fn toggle_selected(&mut self) {
        if let Some(card) = self.cards.get_mut(self.selected) {
            card.toggle();
        }
    }

    /// Moves selection up.
    pub const fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Moves selection down.
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }
}

impl Component for CategoryScreen {
    type Event = ComponentEvent;

    /// Routes a key press.
    ///
    /// Toggling and link activation are separate arms on separate keys:
    /// activating the link emits [`ComponentEvent::LinkActivated`] and never
    /// touches the card's expand/collapse state.
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
                None
            }
            KeyCode::Char('o') => self.selected_link().map(ComponentEvent::LinkActivated),
            KeyCode::Esc | KeyCode::Backspace => Some(ComponentEvent::Back),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Category header
                Constraint::Min(5),    // Item grid
            ])
            .split(area);

        self.render_header(f, chunks[0], theme);

        if self.loading {
            self.render_loading(f, chunks[1], theme);
        } else if self.items.is_empty() {
            self.render_empty_state(f, chunks[1], theme);
        } else {
            self.render_cards(f, chunks[1], theme);
        }
    }
}

impl CategoryScreen {
    /// Render the category header with title and back hint.
    fn render_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("← Esc ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    self.title.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("Browse all items in the {} category", self.title),
                Style::default().fg(theme.text_secondary),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );

        f.render_widget(header, area);
    }

    /// Render the loading line shown while the fetch is in flight.
    fn render_loading(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let loading = Paragraph::new(Line::from(Span::styled(
            format!("Loading {}...", self.title),
            Style::default().fg(theme.text_muted),
        )));
        f.render_widget(loading, centered_line(area));
    }

    /// Render the empty state for a category with no items.
    fn render_empty_state(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No items found in this category.",
                Style::default().fg(theme.text),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" Return to Home", Style::default().fg(theme.text_muted)),
            ]),
        ])
        .centered();

        f.render_widget(empty, centered_block(area));
    }

    /// Render the item cards, keeping the selected card visible.
    fn render_cards(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let heights: Vec<u16> = self
            .items
            .iter()
            .zip(&self.cards)
            .map(|(item, card)| item_card::card_height(item, *card, area.width))
            .collect();

        let start = first_visible(&heights, self.selected, area.height);

        let mut y = area.y;
        for index in start..self.items.len() {
            let height = heights[index].min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }

            let card_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };

            item_card::render_card(
                f,
                card_area,
                &self.items[index],
                self.cards[index],
                index == self.selected,
                theme,
            );

            y += height;
            if y >= area.bottom() {
                break;
            }
        }
    }
}

/// First card index to render so that the selected card fits in the
/// viewport.
///
/// Walks upward from the selection, accumulating card heights while they
/// fit. The selection is bottom-anchored when the list has scrolled and
/// top-anchored otherwise.
fn first_visible(heights: &[u16], selected: usize, viewport: u16) -> usize {
    let mut start = selected;
    let mut used = u32::from(*heights.get(selected).unwrap_or(&0));

    while start > 0 {
        let above = u32::from(heights[start - 1]);
        if used + above > u32::from(viewport) {
            break;
        }
        used += above;
        start -= 1;
    }

    start
}

/// A one-line area in the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + area.height / 3,
        width: area.width.saturating_sub(4),
        height: 1,
    }
}

/// A small centered area for the empty state.
fn centered_block(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 3,
        width: area.width,
        height: 3.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn linked_item(id: u64) -> Item {
        Item::new(id, format!("Item {id}"), "tools")
            .with_description("body")
            .with_score(80)
            .with_link(format!("https://example.com/{id}"))
    }

    fn loaded_screen() -> CategoryScreen {
        let mut screen = CategoryScreen::new("tools");
        screen.set_items(vec![linked_item(1), linked_item(2)]);
        screen
    }

    #[test]
    fn test_title_from_identifier() {
        let screen = CategoryScreen::new("electronics");
        assert_eq!(screen.title(), "Electronics");
        assert_eq!(screen.category_id(), "electronics");
    }

    #[test]
    fn test_starts_loading() {
        let screen = CategoryScreen::new("tools");
        assert!(screen.is_loading());
    }

    #[test]
    fn test_set_items_resets_cards_collapsed() {
        let mut screen = loaded_screen();
        screen.toggle_selected();
        assert!(screen.card(0).unwrap().is_expanded());

        // A new item set discards all previous card state
        screen.set_items(vec![linked_item(3)]);
        assert!(!screen.is_loading());
        assert!(!screen.card(0).unwrap().is_expanded());
    }

    #[test]
    fn test_toggle_via_enter() {
        let mut screen = loaded_screen();
        assert!(screen.handle_input(key(KeyCode::Enter)).is_none());
        assert!(screen.card(0).unwrap().is_expanded());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut screen = loaded_screen();
        screen.handle_input(key(KeyCode::Enter));
        screen.handle_input(key(KeyCode::Enter));
        assert!(!screen.card(0).unwrap().is_expanded());
    }

    #[test]
    fn test_link_activation_does_not_toggle() {
        let mut screen = loaded_screen();

        let event = screen.handle_input(key(KeyCode::Char('o')));
        assert_eq!(
            event,
            Some(ComponentEvent::LinkActivated(
                "https://example.com/1".to_string()
            ))
        );
        // The card's expand state is untouched by link activation
        assert!(!screen.card(0).unwrap().is_expanded());

        // And the same holds for an already-expanded card
        screen.handle_input(key(KeyCode::Enter));
        screen.handle_input(key(KeyCode::Char('o')));
        assert!(screen.card(0).unwrap().is_expanded());
    }

    #[test]
    fn test_link_activation_without_link_is_noop() {
        let mut screen = CategoryScreen::new("tools");
        screen.set_items(vec![Item::new(1, "No Link", "tools")]);

        assert!(screen.handle_input(key(KeyCode::Char('o'))).is_none());
    }

    #[test]
    fn test_escape_emits_back() {
        let mut screen = loaded_screen();
        assert_eq!(
            screen.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Back)
        );
    }

    #[test]
    fn test_selection_moves_between_cards() {
        let mut screen = loaded_screen();
        screen.handle_input(key(KeyCode::Down));
        assert_eq!(screen.selected_item().unwrap().id, 2);

        // Toggling now targets the second card only
        screen.handle_input(key(KeyCode::Enter));
        assert!(!screen.card(0).unwrap().is_expanded());
        assert!(screen.card(1).unwrap().is_expanded());
    }

    #[test]
    fn test_selection_does_not_run_past_ends() {
        let mut screen = loaded_screen();
        screen.handle_input(key(KeyCode::Up));
        assert_eq!(screen.selected_item().unwrap().id, 1);

        screen.handle_input(key(KeyCode::Down));
        screen.handle_input(key(KeyCode::Down));
        assert_eq!(screen.selected_item().unwrap().id, 2);
    }

    #[test]
    fn test_first_visible_top_anchored() {
        let heights = [5, 5, 5];
        assert_eq!(first_visible(&heights, 0, 20), 0);
        assert_eq!(first_visible(&heights, 2, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_selection() {
        let heights = [5, 5, 5, 5];
        // Viewport fits two cards; selecting the last starts at index 2
        assert_eq!(first_visible(&heights, 3, 10), 2);
    }

    #[test]
    fn test_first_visible_oversized_card() {
        let heights = [5, 30, 5];
        // The selected card alone exceeds the viewport; it still starts there
        assert_eq!(first_visible(&heights, 1, 10), 1);
    }
}

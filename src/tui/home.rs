//! Home screen listing the catalog's categories.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{CatalogDb, ItemSource};
use crate::tui::component::{ComponentEvent, ContextualComponent};
use crate::tui::Theme;

/// State for the home screen: a selectable list of categories.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    /// Index of the selected category
    selected: usize,
    /// List state for the Ratatui list widget
    list_state: ListState,
}

impl HomeScreen {
    /// Creates a new home screen starting at the first category.
    #[must_use]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected: 0,
            list_state,
        }
    }

    /// Index of the currently selected category.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Move selection up, wrapping to the last category.
    pub fn previous(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = category_count - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down, wrapping to the first category.
    pub fn next(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        if self.selected < category_count - 1 {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualComponent for HomeScreen {
    type Context = CatalogDb;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, catalog: &CatalogDb) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous(catalog.category_count());
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next(catalog.category_count());
                None
            }
            KeyCode::Enter => catalog
                .categories()
                .get(self.selected)
                .map(|category| ComponentEvent::CategoryChosen(category.id.clone())),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, catalog: &CatalogDb) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Welcome text
                Constraint::Min(5),    // Category list
            ])
            .split(area);

        render_welcome(f, chunks[0], theme);
        self.render_category_list(f, chunks[1], theme, catalog);
    }
}

impl HomeScreen {
    /// Render the category list with icons and item counts.
    fn render_category_list(&self, f: &mut Frame, area: Rect, theme: &Theme, catalog: &CatalogDb) {
        let items: Vec<ListItem> = catalog
            .categories()
            .iter()
            .map(|category| {
                let count = catalog.items_for_category(&category.id).len();
                let count_label = if count == 1 {
                    "1 item".to_string()
                } else {
                    format!("{count} items")
                };

                let line = Line::from(vec![
                    Span::raw("  "),
                    Span::raw(category.icon.clone()),
                    Span::raw("  "),
                    Span::styled(category.name.clone(), Style::default().fg(theme.text)),
                    Span::raw("  "),
                    Span::styled(
                        format!("({count_label})"),
                        Style::default().fg(theme.text_muted),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Explore Categories ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        // Clone the list state for rendering
        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Render the welcome block above the category list.
fn render_welcome(f: &mut Frame, area: Rect, theme: &Theme) {
    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to the Item Gallery",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick a category to browse its items.",
            Style::default().fg(theme.text_secondary),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted)),
    );

    f.render_widget(welcome, area);
}

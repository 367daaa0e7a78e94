//! Item card: per-item presentation state and rendering.
//!
//! Each item in a category view is shown as a card that can be expanded to
//! reveal its body text and external link. Card state is transient: it is
//! rebuilt whenever a new item set is shown, so expansion never survives a
//! category change.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Item;
use crate::tui::Theme;

/// Body text shown when an item has neither a description nor a summary.
pub const FALLBACK_BODY: &str = "No description available.";

/// Transient expand/collapse state for one rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemCardState {
    expanded: bool,
}

impl ItemCardState {
    /// Creates a new collapsed card.
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: false }
    }

    /// Flips between collapsed and expanded.
    pub const fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the card is currently expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Returns the score to display, defaulting to 0 when absent.
///
/// Out-of-range values are passed through unchanged; only the painted bar
/// is capped to the card's width.
#[must_use]
pub const fn display_score(item: &Item) -> i64 {
    match item.score {
        Some(score) => score,
        None => 0,
    }
}

/// Returns the body text for an item.
///
/// Priority: `description`, then `summary`, then [`FALLBACK_BODY`].
#[must_use]
pub fn display_body(item: &Item) -> &str {
    item.description
        .as_deref()
        .or(item.summary.as_deref())
        .unwrap_or(FALLBACK_BODY)
}

/// Number of filled cells for the score bar at the given bar width.
///
/// The fill is proportional to the score out of 100 and geometrically
/// capped to the bar: scores above 100 fill the whole bar, scores below 0
/// fill nothing.
#[must_use]
pub fn fill_width(item: &Item, width: u16) -> u16 {
    let cells = i64::from(width) * display_score(item) / 100;
    cells.clamp(0, i64::from(width)) as u16
}

/// Greedy word-wraps `text` to lines of at most `width` characters.
///
/// Used both for measuring card height and for rendering, so the two always
/// agree. Words longer than the width get a line of their own and are
/// truncated by the terminal.
#[must_use]
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let width = width as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Total height in terminal rows of a card at the given outer width.
#[must_use]
pub fn card_height(item: &Item, state: ItemCardState, width: u16) -> u16 {
    // Borders plus header, score label, and score bar
    let collapsed = 5;
    if !state.is_expanded() {
        return collapsed;
    }

    let inner = width.saturating_sub(2);
    let body_lines = wrap_text(display_body(item), inner).len() as u16;
    let link_line = u16::from(item.link.is_some());

    // Blank separator before the body
    collapsed + 1 + body_lines + link_line
}

/// Renders one item card into `area`.
pub fn render_card(
    f: &mut Frame,
    area: Rect,
    item: &Item,
    state: ItemCardState,
    selected: bool,
    theme: &Theme,
) {
    let border_style = if selected {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    // Header: name on the left, toggle icon on the right
    let toggle_icon = if state.is_expanded() { "−" } else { "+" };
    lines.push(padded_row(
        Span::styled(
            item.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(toggle_icon.to_string(), Style::default().fg(theme.accent)),
        inner.width,
    ));

    // Score label row
    let score_text = format!("{}/100", display_score(item));
    lines.push(padded_row(
        Span::styled("Score", Style::default().fg(theme.text_secondary)),
        Span::styled(score_text, Style::default().fg(theme.text)),
        inner.width,
    ));

    // Score bar
    let filled = fill_width(item, inner.width) as usize;
    let track = inner.width as usize - filled;
    lines.push(Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.accent)),
        Span::styled("░".repeat(track), Style::default().fg(theme.text_muted)),
    ]));

    if state.is_expanded() {
        lines.push(Line::raw(""));

        for body_line in wrap_text(display_body(item), inner.width) {
            lines.push(Line::from(Span::styled(
                body_line,
                Style::default().fg(theme.text),
            )));
        }

        if let Some(link) = &item.link {
            lines.push(Line::from(vec![
                Span::styled(
                    "o ",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "View Details → ",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(link.clone(), Style::default().fg(theme.text_muted)),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Builds a row with `left` and `right` separated by padding to `width`.
fn padded_row<'a>(left: Span<'a>, right: Span<'a>, width: u16) -> Line<'a> {
    let used = left.content.chars().count() + right.content.chars().count();
    let padding = (width as usize).saturating_sub(used);
    Line::from(vec![left, Span::raw(" ".repeat(padding)), right])
}

//! Status bar widget for displaying status messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Screen, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the current message and contextual hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error or status message
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text_secondary),
            )));
        } else {
            content_lines.push(Line::raw(""));
        }

        // Second line: contextual key hints
        content_lines.push(Self::hints_line(state, theme));

        let status = Paragraph::new(content_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Key hints for the active screen.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match &state.screen {
            Screen::Home(_) => &[
                ("↑↓", "Navigate"),
                ("Enter", "Open Category"),
                ("q", "Quit"),
            ],
            Screen::Category(_) => &[
                ("↑↓", "Select"),
                ("Enter", "Expand"),
                ("o", "Open Link"),
                ("Esc", "Back"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, k/j", "Move selection"),
            ("Home, g", "Jump to top"),
            ("End, G", "Jump to bottom"),
            ("PageUp/PageDown", "Scroll 10 items"),
        ],
    ),
    (
        "BOOKMARKS",
        &[
            ("a", "Add a bookmark"),
            ("e", "Edit title, URL and note"),
            ("Tab", "Focus details; j/k pick a field, e edits it"),
            ("m", "Move to another folder"),
            ("d", "Delete selected bookmark"),
            ("o", "Open URL in the browser"),
        ],
    ),
    (
        "VIEW",
        &[
            ("f", "Filter by folder"),
            ("/", "Search title, URL, note and folder"),
            ("Esc", "Clear filter and search"),
        ],
    ),
    (
        "INPUT",
        &[
            ("Enter", "Confirm field"),
            ("Tab", "Complete folder name"),
            ("Ctrl-U", "Clear field"),
            ("Esc, Ctrl-C", "Cancel"),
        ],
    ),
    (
        "OTHER",
        &[
            ("s", "Settings (c: accent colour)"),
            ("?", "Toggle this help"),
            ("q", "Save and quit"),
        ],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (heading, entries) in SECTIONS {
        lines.push(Line::from(vec![Span::styled(
            *heading,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )]));
        for (key, description) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(colors::PRIMARY)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(colors::MUTED),
    )]));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let paragraph = Paragraph::new(help_lines()).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}

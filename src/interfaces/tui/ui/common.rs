use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Truncate to `max` characters, appending "..." when shortened
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let kept: String = value.chars().take(max).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}

/// Draw title bar with version and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "marks",
            Style::default()
                .fg(app.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Total: {} ", app.store.len()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if let Some(folder) = &app.view.folder_filter {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Folder: {} ", folder),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(query) = &app.view.search_query {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Search: \"{}\" ", query),
            Style::default().fg(Color::Magenta),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.accent)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(app.accent))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(screen: CurrentScreen, focus: Focus) -> Vec<(&'static str, &'static str, Color)> {
    match screen {
        CurrentScreen::Browse if focus == Focus::Detail => vec![
            ("j/k", "Field", Color::Cyan),
            ("e", "Edit field", Color::Yellow),
            ("Tab/Esc", "List", Color::Cyan),
            ("o", "Open", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Browse => vec![
            ("j/k", "Navigate", Color::Cyan),
            ("o", "Open", Color::Cyan),
            ("a", "Add", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("m", "Move", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("f", "Folder", Color::Magenta),
            ("/", "Search", Color::Magenta),
            ("Tab", "Details", Color::Cyan),
            ("s", "Settings", Color::Blue),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::AddFolder | CurrentScreen::MoveFolder | CurrentScreen::FilterEntry => vec![
            ("Enter", "Confirm", Color::Green),
            ("Tab", "Complete", Color::Cyan),
            ("Ctrl-U", "Clear", Color::Yellow),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::AddTitle
        | CurrentScreen::AddUrl
        | CurrentScreen::AddNote
        | CurrentScreen::EditTitle
        | CurrentScreen::EditUrl
        | CurrentScreen::EditNote
        | CurrentScreen::SearchEntry => vec![
            ("Enter", "Confirm", Color::Green),
            ("Ctrl-U", "Clear", Color::Yellow),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
        CurrentScreen::Help => vec![("any key", "Close", Color::Red)],
        CurrentScreen::Settings => vec![("c", "Color", Color::Cyan), ("q", "Back", Color::Red)],
        CurrentScreen::AccentPicker => vec![
            ("j/k", "Move", Color::Cyan),
            ("Enter/Space", "Select", Color::Green),
            ("Esc", "Back", Color::Yellow),
            ("q", "Close", Color::Red),
        ],
        CurrentScreen::Quit => Vec::new(),
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app.current_screen, app.focus).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("日本語のタイトル", 3), "日本語...");
    }

    #[test]
    fn test_every_live_screen_has_shortcuts() {
        assert!(!shortcuts(CurrentScreen::Browse, Focus::List).is_empty());
        assert!(!shortcuts(CurrentScreen::Settings, Focus::List).is_empty());
        assert!(!shortcuts(CurrentScreen::AccentPicker, Focus::List).is_empty());
        assert!(
            shortcuts(CurrentScreen::Browse, Focus::Detail)
                .iter()
                .any(|(_, desc, _)| *desc == "Edit field")
        );
        assert!(
            shortcuts(CurrentScreen::MoveFolder, Focus::List)
                .iter()
                .any(|(key, _, _)| *key == "Tab")
        );
        assert!(
            !shortcuts(CurrentScreen::EditUrl, Focus::List)
                .iter()
                .any(|(key, _, _)| *key == "Tab")
        );
    }
}

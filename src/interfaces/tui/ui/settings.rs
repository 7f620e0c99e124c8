//! 设置菜单与强调色选择弹窗

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{ACCENT_CHOICES, colors, popup};

pub fn draw_settings_screen(frame: &mut Frame, app: &App, area: Rect) {
    let (title, lines) = match app.current_screen {
        CurrentScreen::AccentPicker => ("Accent Color", accent_lines(app)),
        _ => ("Settings", menu_lines(app)),
    };

    let inner_area = Popup::new(title, popup::SETTINGS)
        .theme_color(app.accent)
        .render(frame, area);
    frame.render_widget(Paragraph::new(lines), inner_area);
}

fn menu_lines(app: &App) -> Vec<Line<'static>> {
    let current = ACCENT_CHOICES
        .iter()
        .find(|(_, color)| *color == app.accent)
        .map(|(name, _)| *name)
        .unwrap_or("custom");
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  c  ",
                Style::default().fg(app.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Accent colour "),
            Span::styled(format!("({})", current), Style::default().fg(colors::MUTED)),
        ]),
    ]
}

fn accent_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (i, (name, color)) in ACCENT_CHOICES.iter().enumerate() {
        let marker = if *color == app.accent { "[X] " } else { "[ ] " };
        let label_style = if i == app.accent_selected {
            Style::default()
                .fg(Color::Black)
                .bg(app.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled("      ", Style::default().bg(*color)),
            Span::raw(" "),
            Span::styled(*name, label_style),
        ]));
    }
    lines
}

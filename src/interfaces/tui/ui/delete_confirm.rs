use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(target) = app.form.target.as_ref() else {
        return;
    };
    let bookmark = &target.snapshot;

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(colors::ERROR)
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Delete this bookmark?",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Folder: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                bookmark.folder.as_str(),
                Style::default().fg(colors::SUCCESS),
            ),
        ]),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                bookmark.title.as_str(),
                Style::default()
                    .fg(app.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(colors::MUTED)),
            Span::raw(bookmark.url.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y]",
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Delete   "),
            Span::styled(
                "[n/Esc]",
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}

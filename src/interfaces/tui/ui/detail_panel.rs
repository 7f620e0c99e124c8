//! Detail panel component for displaying the selected bookmark

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::{App, EditingField, Focus};

/// Draw the detail panel showing the selected row of the displayed list
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Detail;
    let border = if focused { app.accent } else { Color::DarkGray };
    let block = Block::default()
        .title(if focused { "Details [e: edit field]" } else { "Details" })
        .title_style(
            Style::default()
                .fg(app.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let rows = app.display_rows();
    let selected = app
        .display_selection(rows.len())
        .and_then(|i| rows.get(i));

    let Some(row) = selected else {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No bookmark selected",
                Style::default().fg(Color::DarkGray),
            )]),
        ];
        let paragraph = Paragraph::new(empty_text)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let bookmark = row.bookmark;
    let label = |text: &'static str, field: EditingField| {
        if focused && app.detail_field() == field {
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(app.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::DarkGray))
        }
    };
    let note = if bookmark.note.is_empty() {
        Span::styled("(none)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(bookmark.note.as_str(), Style::default().fg(Color::White))
    };

    let details = vec![
        Line::from(""),
        Line::from(vec![
            label("Folder:  ", EditingField::Folder),
            Span::styled(
                bookmark.folder.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Title:   ", EditingField::Title),
            Span::styled(
                bookmark.title.as_str(),
                Style::default()
                    .fg(app.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![label("URL:", EditingField::Url)]),
        Line::from(vec![Span::styled(
            bookmark.url.as_str(),
            Style::default().fg(Color::Blue),
        )]),
        Line::from(""),
        Line::from(vec![label("Note:", EditingField::Note)]),
        Line::from(vec![note]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Index:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} of {}", row.index + 1, app.store.len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(details)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

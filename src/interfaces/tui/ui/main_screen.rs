use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use super::common::truncate;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    // 计算可见窗口（border 2行 + header 1行 + header margin 1行 = 4行开销）
    let visible_height = (area.height as usize).saturating_sub(4).max(1);
    app.last_visible_height = visible_height;

    let filtered = app.display_view().is_filtered();
    let (rows, total, selected) = {
        let display = app.display_rows();
        let total = display.len();
        let selected = app.display_selection(total);

        // 确保 scroll_offset 合法，并让选中行落在窗口内
        let mut offset = app.scroll_offset.min(total.saturating_sub(1));
        if let Some(sel) = selected {
            if sel < offset {
                offset = sel;
            }
            if sel >= offset + visible_height {
                offset = sel + 1 - visible_height;
            }
        }
        let end = (offset + visible_height).min(total);

        // 虚拟渲染：只构建可见行的 Row
        let rows: Vec<Row<'static>> = display[offset..end]
            .iter()
            .map(|row| {
                Row::new(vec![
                    Span::styled(
                        format!("{}", row.index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        truncate(&row.bookmark.folder, 18),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        truncate(&row.bookmark.title, URL_TRUNCATE_LENGTH),
                        Style::default()
                            .fg(app.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        (rows, total, selected.map(|sel| (sel, offset)))
    };

    if let Some((_, offset)) = selected {
        app.scroll_offset = offset;
    } else {
        app.scroll_offset = 0;
    }

    if total == 0 {
        draw_empty_state(frame, app, area, filtered);
        return;
    }

    let title = if filtered {
        format!("Bookmarks ({} of {})", total, app.store.len())
    } else {
        format!("Bookmarks ({})", total)
    };

    let header = Row::new(vec![
        Span::styled("#", header_style()),
        Span::styled("Folder", header_style()),
        Span::styled("Title", header_style()),
    ])
    .bottom_margin(1);

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),  // Index
            Constraint::Length(20), // Folder
            Constraint::Min(20),    // Title
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(app.accent)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if let Some((sel, offset)) = selected {
        virtual_state.select(Some(sel - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect, filtered: bool) {
    let (headline, key, hint) = if app.current_screen == CurrentScreen::SearchEntry {
        ("No bookmarks match", "[Esc]", " to cancel the search")
    } else if filtered {
        ("No bookmarks match", "[Esc]", " to clear folder filter and search")
    } else {
        ("No bookmarks yet", "[a]", " to add your first bookmark")
    };

    let empty_text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            headline,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let empty = Paragraph::new(empty_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Bookmarks")
                .title_style(Style::default().fg(app.accent)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(empty, area);
}

//! 通用输入框组件
//!
//! 用于模态输入行，支持激活状态高亮、占位符、字符计数和补全提示

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Add · Folder", &app.form.folder)
///     .active(true)
///     .placeholder("Enter = General")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 占位符文本
    placeholder: Option<&'a str>,
    /// 额外提示（显示在标题末尾）
    hint: Option<&'a str>,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            hint: None,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// 获取显示标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if !self.value.is_empty() {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        if let Some(hint) = self.hint {
            title = format!("{} [{}]", title, hint);
        }

        title
    }

    /// 获取边框样式
    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn content(&self) -> Line<'a> {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => Line::from(Span::styled(
                placeholder,
                Style::default().fg(colors::MUTED),
            )),
            _ => Line::from(vec![
                Span::raw(self.value),
                Span::styled(
                    if self.is_active { "█" } else { "" },
                    Style::default().fg(colors::MUTED),
                ),
            ]),
        }
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.content()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}

//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(60, 35);
    /// 设置菜单与强调色选择
    pub const SETTINGS: PopupSize = PopupSize::new(50, 60);
}

/// Accent colours offered by the settings screen, as `(config name, colour)`.
pub const ACCENT_CHOICES: [(&str, ratatui::style::Color); 7] = {
    use ratatui::style::Color;
    [
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("white", Color::White),
    ]
};

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调（未配置 ui.accent_color 时使用）
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
}

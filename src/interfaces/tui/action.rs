//! Action 系统
//!
//! 按键分发的结果。状态迁移在分发器内部完成，Action 只描述需要运行时执行的副作用。

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// 打开 URL（由运行时调用 UrlOpener）
    OpenUrl(String),
    /// 持久化强调色（配置中的颜色名）
    SaveAccent(String),
    /// 退出程序，运行时负责保存
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否应该导致程序退出
    pub fn should_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}

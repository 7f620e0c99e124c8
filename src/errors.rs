use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarksError {
    Validation(String),
    IndexOutOfRange(String),
    Load(String),
    Save(String),
    FileOperation(String),
    Serialization(String),
    OpenUrl(String),
    Import(String),
    Config(String),
    Terminal(String),
}

impl MarksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MarksError::Validation(_) => "E001",
            MarksError::IndexOutOfRange(_) => "E002",
            MarksError::Load(_) => "E003",
            MarksError::Save(_) => "E004",
            MarksError::FileOperation(_) => "E005",
            MarksError::Serialization(_) => "E006",
            MarksError::OpenUrl(_) => "E007",
            MarksError::Import(_) => "E008",
            MarksError::Config(_) => "E009",
            MarksError::Terminal(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MarksError::Validation(_) => "Validation Error",
            MarksError::IndexOutOfRange(_) => "Index Out Of Range",
            MarksError::Load(_) => "Load Error",
            MarksError::Save(_) => "Save Error",
            MarksError::FileOperation(_) => "File Operation Error",
            MarksError::Serialization(_) => "Serialization Error",
            MarksError::OpenUrl(_) => "Open URL Error",
            MarksError::Import(_) => "Import Error",
            MarksError::Config(_) => "Configuration Error",
            MarksError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            MarksError::Validation(msg)
            | MarksError::IndexOutOfRange(msg)
            | MarksError::Load(msg)
            | MarksError::Save(msg)
            | MarksError::FileOperation(msg)
            | MarksError::Serialization(msg)
            | MarksError::OpenUrl(msg)
            | MarksError::Import(msg)
            | MarksError::Config(msg)
            | MarksError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Recoverable errors never end an interactive session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MarksError::Validation(_) | MarksError::IndexOutOfRange(_) | MarksError::OpenUrl(_)
        )
    }
}

impl fmt::Display for MarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MarksError {}

// 便捷的构造函数
impl MarksError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        MarksError::Validation(msg.into())
    }

    pub fn index_out_of_range<T: Into<String>>(msg: T) -> Self {
        MarksError::IndexOutOfRange(msg.into())
    }

    pub fn load<T: Into<String>>(msg: T) -> Self {
        MarksError::Load(msg.into())
    }

    pub fn save<T: Into<String>>(msg: T) -> Self {
        MarksError::Save(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MarksError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        MarksError::Serialization(msg.into())
    }

    pub fn open_url<T: Into<String>>(msg: T) -> Self {
        MarksError::OpenUrl(msg.into())
    }

    pub fn import<T: Into<String>>(msg: T) -> Self {
        MarksError::Import(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        MarksError::Config(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        MarksError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for MarksError {
    fn from(err: std::io::Error) -> Self {
        MarksError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MarksError {
    fn from(err: serde_json::Error) -> Self {
        MarksError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for MarksError {
    fn from(err: config::ConfigError) -> Self {
        MarksError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for MarksError {
    fn from(err: toml::de::Error) -> Self {
        MarksError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MarksError {
    fn from(err: toml::ser::Error) -> Self {
        MarksError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarksError>;

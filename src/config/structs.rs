use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{MarksError, Result};
use crate::storage::DEFAULT_FOLDER;

/// 覆盖数据文件路径的环境变量
pub const DATA_FILE_ENV: &str = "MARKS_DATA_FILE";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - storage: 数据文件路径、默认文件夹
/// - logging: 日志配置
/// - ui: 终端界面参数
/// - launcher: 外部启动器（rofi 等）
/// - opener: 打开 URL 的命令
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub opener: OpenerConfig,
    /// File this configuration was read from, or would have been
    #[serde(skip)]
    pub source: PathBuf,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：MARKS，分隔符：__
    /// 示例：MARKS__UI__TICK_RATE_MS=100
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };

        let settings = Config::builder()
            .add_source(File::from(path.as_path()).required(required))
            .add_source(
                Environment::with_prefix("MARKS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let mut config: StaticConfig = settings.try_deserialize()?;
        config.source = path;

        if let Ok(data_file) = std::env::var(DATA_FILE_ENV)
            && !data_file.trim().is_empty()
        {
            config.storage.data_file = PathBuf::from(data_file.trim());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.default_folder.trim().is_empty() {
            return Err(MarksError::config("storage.default_folder must not be empty"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(MarksError::config("ui.tick_rate_ms must be greater than 0"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(MarksError::config(format!(
                "Invalid logging.format '{}'. Valid: text, json",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Settings changed from inside the TUI
pub trait PreferenceStore {
    fn save_accent_color(&self, name: &str) -> Result<()>;
}

/// 写回配置文件，只修改对应的键，文件中的其他设置保持不变
pub struct ConfigFilePreferences {
    path: PathBuf,
}

impl ConfigFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Preferences stored in the file `config` was loaded from.
    pub fn for_config(config: &StaticConfig) -> Self {
        if config.source.as_os_str().is_empty() {
            Self::new(default_config_path())
        } else {
            Self::new(config.source.clone())
        }
    }

    fn read_stored(&self) -> Result<StaticConfig> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StaticConfig::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for ConfigFilePreferences {
    fn save_accent_color(&self, name: &str) -> Result<()> {
        let mut stored = self.read_stored()?;
        stored.ui.accent_color = name.to_string();
        stored.save_to_file(&self.path)?;
        tracing::info!("Saved ui.accent_color = {} to {}", name, self.path.display());
        Ok(())
    }
}

/// `<config_dir>/marks/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marks")
        .join("config.toml")
}

/// `<data_dir>/marks`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marks")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_folder: default_folder(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            status_timeout_secs: default_status_timeout_secs(),
            accent_color: default_accent_color(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default = "default_launcher_command")]
    pub command: String,
    #[serde(default = "default_launcher_args")]
    pub args: Vec<String>,
    #[serde(default = "default_true")]
    pub notify: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            command: default_launcher_command(),
            args: default_launcher_args(),
            notify: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenerConfig {
    /// 为空时使用系统默认浏览器
    #[serde(default)]
    pub command: Option<String>,
}

fn default_data_file() -> PathBuf {
    default_data_dir().join("bookmarks.json")
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_status_timeout_secs() -> u64 {
    4
}

fn default_accent_color() -> String {
    "cyan".to_string()
}

fn default_launcher_command() -> String {
    "rofi".to_string()
}

fn default_launcher_args() -> Vec<String> {
    ["-dmenu", "-p", "", "-i"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

//! JSON file persistence
//!
//! 书签以 JSON 数组保存于单个文件中。写入时先写同目录下的临时文件，
//! 然后原子替换目标文件。

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

use super::models::{Bookmark, DEFAULT_FOLDER};
use crate::errors::{MarksError, Result};

#[derive(Debug, Clone)]
pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// 读取全部书签。文件不存在时返回空集合。
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Bookmark file {} does not exist, starting empty",
                    self.file_path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("Failed to read {}: {}", self.file_path.display(), e);
                return Err(MarksError::load(format!(
                    "Failed to read {}: {}",
                    self.file_path.display(),
                    e
                )));
            }
        };

        let bookmarks = parse_bookmarks(&content).map_err(|msg| {
            error!("Failed to parse {}: {}", self.file_path.display(), msg);
            MarksError::load(format!("Failed to parse {}: {}", self.file_path.display(), msg))
        })?;
        info!(
            "Loaded {} bookmarks from {}",
            bookmarks.len(),
            self.file_path.display()
        );
        Ok(bookmarks)
    }

    /// 原子保存：失败时原文件保持不变
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        write_atomically(&self.file_path, bookmarks).map_err(|e| {
            error!("Failed to save {}: {}", self.file_path.display(), e);
            MarksError::save(format!(
                "Failed to save {}: {}",
                self.file_path.display(),
                e
            ))
        })?;
        info!(
            "Saved {} bookmarks to {}",
            bookmarks.len(),
            self.file_path.display()
        );
        Ok(())
    }

    /// Dumps the collection next to the data file when a regular save failed.
    pub fn save_recovery(&self, bookmarks: &[Bookmark]) -> Result<PathBuf> {
        let path = self.recovery_path();
        let json = serde_json::to_string_pretty(bookmarks)?;
        fs::write(&path, json).map_err(|e| {
            MarksError::save(format!(
                "Failed to write recovery file {}: {}",
                path.display(),
                e
            ))
        })?;
        warn!("Wrote recovery file {}", path.display());
        Ok(path)
    }

    fn recovery_path(&self) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "bookmarks.json".into());
        name.push(format!(".recovery-{}.json", timestamp));
        self.file_path.with_file_name(name)
    }
}

fn write_atomically(path: &Path, bookmarks: &[Bookmark]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let json = serde_json::to_string_pretty(bookmarks).map_err(io::Error::other)?;
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Normalises a loosely-typed document: non-objects are skipped, values are
/// trimmed, a blank folder becomes the default one and entries with neither
/// title nor url are dropped.
fn parse_bookmarks(content: &str) -> std::result::Result<Vec<Bookmark>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Array(items) = value else {
        return Err("expected a JSON array of bookmarks".to_string());
    };

    let mut bookmarks = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(map) = item else {
            continue;
        };
        let field = |key: &str| map.get(key).map(value_to_text).unwrap_or_default();

        let title = field("title");
        let url = field("url");
        if title.is_empty() && url.is_empty() {
            continue;
        }
        let mut folder = field("folder");
        if folder.is_empty() {
            folder = DEFAULT_FOLDER.to_string();
        }
        bookmarks.push(Bookmark {
            title,
            url,
            folder,
            note: field("note"),
        });
    }
    Ok(bookmarks)
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

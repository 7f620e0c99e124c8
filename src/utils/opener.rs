//! Open-URL capability
//!
//! 界面层只依赖 `UrlOpener` trait，测试中可替换为记录调用的实现。

use std::process::{Command, Stdio};

use tracing::{debug, error};

use crate::errors::{MarksError, Result};

pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with a configured command, or the platform default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    command: Option<String>,
}

impl SystemOpener {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(MarksError::open_url("Bookmark has no URL"));
        }

        let result = match &self.command {
            Some(command) => {
                debug!("Opening {} with '{}'", url, command);
                Command::new(command)
                    .arg(url)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map(|_| ())
            }
            None => {
                debug!("Opening {} with the system handler", url);
                open::that_detached(url)
            }
        };

        result.map_err(|e| {
            error!("Failed to open {}: {}", url, e);
            MarksError::open_url(format!("Failed to open {}: {}", url, e))
        })
    }
}

//! macOS notifications via terminal-notifier

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::app::Config;

/// How the notification icon is passed to terminal-notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Image file shown inside the notification
    ContentImage(PathBuf),
    /// App bundle ID whose icon is shown
    Sender(String),
}

impl IconSource {
    /// An identifier naming an existing path is an image, anything else a bundle ID
    pub fn detect(icon: &str) -> Self {
        let path = Path::new(icon);
        if !icon.is_empty() && path.exists() {
            IconSource::ContentImage(path.to_path_buf())
        } else {
            IconSource::Sender(icon.to_string())
        }
    }
}

/// Wrapper around the terminal-notifier command
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    command: String,
    sound: String,
    /// Sender used alongside a content image so the notification still appears
    sender: String,
}

impl TerminalNotifier {
    #[cfg(test)]
    fn new(command: impl Into<String>) -> Self {
        let defaults = Config::default();
        Self {
            command: command.into(),
            sound: defaults.sound,
            sender: defaults.sender,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            command: config.notifier_command.clone(),
            sound: config.sound.clone(),
            sender: config.sender.clone(),
        }
    }

    /// Build the argument list for one notification
    pub fn args(&self, title: &str, message: &str, icon: &IconSource) -> Vec<String> {
        let mut args = vec![
            "-title".to_string(),
            title.to_string(),
            "-message".to_string(),
            message.to_string(),
            "-sound".to_string(),
            self.sound.clone(),
        ];

        match icon {
            IconSource::ContentImage(path) => {
                args.push("-contentImage".to_string());
                args.push(path.to_string_lossy().to_string());
                args.push("-sender".to_string());
                args.push(self.sender.clone());
            }
            IconSource::Sender(bundle_id) => {
                args.push("-sender".to_string());
                args.push(bundle_id.clone());
            }
        }

        args
    }

    /// Show a notification, blocking until the command exits
    pub fn send(&self, title: &str, message: &str, icon: &IconSource) -> Result<()> {
        let args = self.args(title, message, icon);
        debug!(command = %self.command, ?args, "Sending notification");

        let output = Command::new(&self.command)
            .args(&args)
            .output()
            .with_context(|| format!("Failed to spawn {}", self.command))?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            anyhow::bail!(
                "{} failed: {}, output: {}",
                self.command,
                output.status,
                combined.trim()
            );
        }

        Ok(())
    }
}

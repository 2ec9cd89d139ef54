use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 通知タイトル
pub const DEFAULT_TITLE: &str = "Claude Code";
/// アイコン未指定時に使うアプリのバンドルID
pub const DEFAULT_APP_ICON: &str = "com.apple.Terminal";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// 通知タイトル
    #[serde(default = "default_title")]
    pub title: String,
    /// 通知音（terminal-notifier の -sound）
    #[serde(default = "default_sound")]
    pub sound: String,
    /// 画像アイコン使用時の送信元バンドルID
    #[serde(default = "default_sender")]
    pub sender: String,
    /// アイコン（バンドルIDまたは画像ファイルパス）
    /// CLAUDE_NOTIFICATION_ICON が設定されていればそちらを優先
    #[serde(default)]
    pub icon: Option<String>,
    /// 通知コマンド
    #[serde(default = "default_notifier_command")]
    pub notifier_command: String,
    /// イベントログファイル
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// ログレベル
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_sound() -> String {
    "default".to_string()
}

fn default_sender() -> String {
    DEFAULT_APP_ICON.to_string()
}

fn default_notifier_command() -> String {
    "terminal-notifier".to_string()
}

fn default_log_file() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".claude/hook-notifications.log")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            sound: default_sound(),
            sender: default_sender(),
            icon: None,
            notifier_command: default_notifier_command(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// 既定の設定ファイルから読み込み（存在しない場合はデフォルト）
    ///
    /// フックは短命なプロセスなので、初回起動時にファイルを作成しない。
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// 指定パスの設定ファイルを読み込み
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// 設定ファイルパスを取得
    pub fn config_path() -> Result<PathBuf> {
        // ~/.config/hook-notify/config.toml を使用
        let base_dirs = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))?;
        Ok(base_dirs.home_dir().join(".config/hook-notify/config.toml"))
    }

    /// アイコン識別子を決定（環境変数 > 設定ファイル > デフォルト）
    pub fn resolve_icon(&self, env_icon: Option<&str>) -> String {
        env_icon
            .filter(|s| !s.is_empty())
            .or(self.icon.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_APP_ICON)
            .to_string()
    }
}

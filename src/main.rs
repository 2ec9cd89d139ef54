use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hook_notify::app::{self, Config};
use hook_notify::hook::{self, HookType};

/// Hook Notify - desktop notifications for Claude Code hooks
#[derive(Parser, Debug)]
#[command(name = "hook-notify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hook type that triggered this run
    #[arg(value_enum)]
    hook_type: HookType,

    /// Notification icon: app bundle ID or path to an image file
    #[arg(long, env = "CLAUDE_NOTIFICATION_ICON")]
    icon: Option<String>,

    /// Config file (defaults to ~/.config/hook-notify/config.toml)
    #[arg(long, env = "HOOK_NOTIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<ExitCode> {
    // 引数エラーは clap が即座に終了させる（副作用なし）
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // ログ初期化
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let context = hook::read_context();

    match app::run(cli.hook_type, &context, &config, cli.icon.as_deref()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            // ログフィルタに関係なく必ず stderr に出す
            app::report_failure(&e, std::io::stderr());
            debug!(error = ?e, "Hook failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(level: &str) {
    // hook の stderr は Claude Code 側に表示されるので stderr に出力
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}

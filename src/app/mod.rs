pub mod config;

pub use config::{Config, DEFAULT_APP_ICON, DEFAULT_TITLE};

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::event_log;
use crate::hook::{project_name, HookContext, HookType};
use crate::notify::{IconSource, TerminalNotifier};

/// Run one hook invocation: notify, then log
///
/// Returns the event message on success. A notification failure stops before
/// the log write; a log failure is reported after the notification was shown.
pub fn run(
    hook_type: HookType,
    context: &HookContext,
    config: &Config,
    env_icon: Option<&str>,
) -> Result<String> {
    debug!(
        session_id = %context.session_id,
        hook_event_name = %context.hook_event_name,
        permission_mode = %context.permission_mode,
        tool_name = context.tool_name.as_deref().unwrap_or(""),
        "Hook context"
    );

    let project = project_name(&context.cwd);
    let message = hook_type.event_message(&project);

    let icon = IconSource::detect(&config.resolve_icon(env_icon));
    TerminalNotifier::from_config(config)
        .send(&config.title, &message, &icon)
        .context("Error sending notification")?;

    event_log::append_event(&config.log_file, hook_type, &message)
        .context("Error logging event")?;

    info!(hook = %hook_type, "{}", message);
    Ok(message)
}

/// Write the failed stage and its cause to `out`
///
/// Written directly rather than through tracing so a log filter cannot hide it.
pub fn report_failure(err: &anyhow::Error, mut out: impl Write) {
    let _ = writeln!(out, "{:#}", err);
}

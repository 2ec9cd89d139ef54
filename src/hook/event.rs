//! Hook types and the event messages derived from them

use clap::ValueEnum;
use std::fmt;

/// Project label used when the hook context carries no cwd
pub const UNKNOWN_PROJECT: &str = "unknown";

/// Hook type passed as the first CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookType {
    /// Claude Code finished responding
    Stop,
    /// Claude Code is waiting for a permission decision
    PermissionRequest,
}

impl HookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::Stop => "stop",
            HookType::PermissionRequest => "permission-request",
        }
    }

    /// Human-readable notification body for this hook
    pub fn event_message(&self, project: &str) -> String {
        match self {
            HookType::Stop => format!("Completion received - {}", project),
            HookType::PermissionRequest => format!("Permission requested - {}", project),
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project label: last path component of `cwd`
///
/// Trailing separators are ignored and `.`/`..` are kept as written.
pub fn project_name(cwd: &str) -> String {
    if cwd.is_empty() {
        return UNKNOWN_PROJECT.to_string();
    }

    let trimmed = cwd.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "/".to_string(),
    }
}

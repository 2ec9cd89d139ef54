//! Hook context passed on stdin by Claude Code

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::io::{IsTerminal, Read, Write};
use tracing::debug;

/// JSON context passed to hooks via stdin
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookContext {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_id: String,
    /// Working directory of the Claude Code session
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cwd: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub permission_mode: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hook_event_name: String,
    /// Only present for tool-related events
    #[serde(default)]
    pub tool_name: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl HookContext {
    /// Parse the raw hook input. Blank input is an empty context.
    pub fn parse(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(data).context("Failed to parse JSON")
    }
}

/// Read the hook context from stdin
///
/// Never fails: unreadable or malformed input is reported on stderr and an
/// empty context is returned so the hook still fires.
pub fn read_context() -> HookContext {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("stdin is a terminal, skipping hook context");
        return HookContext::default();
    }

    load_context(stdin.lock(), std::io::stderr())
}

/// Decode a hook context from `reader`, writing a warning to `report` on failure
///
/// The warning bypasses tracing so a log filter cannot hide it.
pub fn load_context(reader: impl Read, mut report: impl Write) -> HookContext {
    match read_from(reader) {
        Ok(context) => context,
        Err(e) => {
            let _ = writeln!(report, "Warning: failed to read hook context: {:#}", e);
            debug!(error = %e, "Falling back to empty hook context");
            HookContext::default()
        }
    }
}

fn read_from(mut reader: impl Read) -> Result<HookContext> {
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .context("Failed to read stdin")?;
    HookContext::parse(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::project_name;

    #[test]
    fn test_parse_full_context() {
        let json = r#"{
            "session_id": "abc123",
            "cwd": "/Users/me/proj",
            "permission_mode": "default",
            "hook_event_name": "Stop",
            "tool_name": "Bash"
        }"#;
        let ctx = HookContext::parse(json).unwrap();
        assert_eq!(ctx.session_id, "abc123");
        assert_eq!(ctx.cwd, "/Users/me/proj");
        assert_eq!(ctx.permission_mode, "default");
        assert_eq!(ctx.hook_event_name, "Stop");
        assert_eq!(ctx.tool_name.as_deref(), Some("Bash"));
    }

    #[test]
    fn test_parse_missing_fields_default_to_empty() {
        let ctx = HookContext::parse(r#"{"cwd":"/tmp/x"}"#).unwrap();
        assert_eq!(ctx.cwd, "/tmp/x");
        assert_eq!(ctx.session_id, "");
        assert!(ctx.tool_name.is_none());
    }

    #[test]
    fn test_parse_null_fields() {
        let ctx = HookContext::parse(r#"{"session_id":null,"cwd":null}"#).unwrap();
        assert_eq!(ctx, HookContext::default());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let ctx = HookContext::parse(r#"{"cwd":"/a","transcript_path":"/t.jsonl"}"#).unwrap();
        assert_eq!(ctx.cwd, "/a");
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert_eq!(HookContext::parse("").unwrap(), HookContext::default());
        assert_eq!(HookContext::parse("  \n\t").unwrap(), HookContext::default());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(HookContext::parse("{not json").is_err());
        assert!(HookContext::parse("[1, 2]").is_err());
    }

    #[test]
    fn test_read_from_reader() {
        let input = br#"{"cwd":"/home/me/work"}"#;
        let ctx = read_from(&input[..]).unwrap();
        assert_eq!(ctx.cwd, "/home/me/work");
    }

    #[test]
    fn test_load_context_malformed_reports_warning() {
        let mut report = Vec::new();
        let ctx = load_context(&b"{not json"[..], &mut report);

        assert_eq!(ctx, HookContext::default());
        assert_eq!(project_name(&ctx.cwd), "unknown");
        let report = String::from_utf8(report).unwrap();
        assert!(report.starts_with("Warning: failed to read hook context: Failed to parse JSON"));
    }

    #[test]
    fn test_load_context_empty_is_silent() {
        let mut report = Vec::new();
        let ctx = load_context(&b""[..], &mut report);

        assert_eq!(project_name(&ctx.cwd), "unknown");
        assert!(report.is_empty());
    }

    #[test]
    fn test_load_context_valid() {
        let mut report = Vec::new();
        let ctx = load_context(&br#"{"cwd":"/Users/me/proj"}"#[..], &mut report);

        assert_eq!(project_name(&ctx.cwd), "proj");
        assert!(report.is_empty());
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let input: &[u8] = &[0xff, 0xfe, 0x00];
        assert!(read_from(input).is_err());
    }
}

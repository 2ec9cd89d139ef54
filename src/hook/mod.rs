//! Claude Code hook input
//!
//! A hook invocation carries the hook type as a CLI argument and a JSON
//! context on stdin.

pub mod context;
pub mod event;

pub use context::{load_context, read_context, HookContext};
pub use event::{project_name, HookType, UNKNOWN_PROJECT};

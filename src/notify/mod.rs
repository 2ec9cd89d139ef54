//! Desktop notification delivery
//!
//! Notifications are shown by shelling out to `terminal-notifier`, which
//! must be on PATH (or configured via `notifier_command`).

pub mod terminal_notifier;

pub use terminal_notifier::{IconSource, TerminalNotifier};

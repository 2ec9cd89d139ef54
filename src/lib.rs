pub mod app;
pub mod event_log;
pub mod hook;
pub mod notify;

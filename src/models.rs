//! Frontend Models
//!
//! UI-only data structures. Row data lives in `ledger_core`.

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Warning => "notice notice-warning",
        }
    }
}

/// A transient notification shown in the notice stack
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

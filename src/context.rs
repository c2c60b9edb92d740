//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Notice, NoticeKind};

/// Notification stack provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    /// Visible notices, oldest first
    pub notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
    /// Auto-dismiss delay, 0 keeps notices until clicked
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        let (notices, set_notices) = signal(Vec::<Notice>::new());
        Self {
            notices,
            set_notices,
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    /// Show a confirmation
    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Info, title.into(), description.into());
    }

    /// Show a warning
    pub fn warning(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Warning, title.into(), description.into());
    }

    /// Remove a notice
    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, description: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();

        self.set_notices.update(|notices| {
            notices.push(Notice { id, kind, title, description });
        });

        if self.timeout_ms > 0 {
            let notifier = *self;
            let delay = self.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                notifier.dismiss(id);
            });
        }
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

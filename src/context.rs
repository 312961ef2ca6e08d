//! Application Context
//!
//! The store handle and app-wide notices, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use curio_core::store::ItemStore;

/// Kind of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast-style notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub detail: String,
}

/// App-wide dependencies shared via context
///
/// The store client is constructed once at startup and injected here;
/// pages pull it out to build their view-models.
#[derive(Clone)]
pub struct AppContext {
    store: Rc<dyn ItemStore>,
    /// Currently shown notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Currently shown notice - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        store: Rc<dyn ItemStore>,
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            store,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Store handle for constructing view-models
    pub fn store(&self) -> Rc<dyn ItemStore> {
        Rc::clone(&self.store)
    }

    /// Show a success notice
    pub fn notify_success(&self, title: &str, detail: &str) {
        self.set_notice.set(Some(Notice {
            kind: NoticeKind::Success,
            title: title.to_string(),
            detail: detail.to_string(),
        }));
    }

    /// Show an error notice
    pub fn notify_error(&self, title: &str, detail: &str) {
        self.set_notice.set(Some(Notice {
            kind: NoticeKind::Error,
            title: title.to_string(),
            detail: detail.to_string(),
        }));
    }

    /// Clear the current notice
    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

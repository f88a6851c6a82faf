//! User-visible transient notifications ("toasts").

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

pub const ADDED_TO_CART: &str = "Added to cart";
pub const FETCH_FAILED: &str = "Error fetching products";

/// How long a success toast stays on screen.
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_millis(2000);
/// How long an error toast stays on screen.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_millis(4000);
/// Toasts visible at once; the oldest is dropped past this.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// A fire-and-forget message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn added_to_cart() -> Self {
        Self::Success(ADDED_TO_CART.to_string())
    }

    pub fn fetch_failed() -> Self {
        Self::Error(FETCH_FAILED.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Success(m) | Notification::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }

    /// Time on screen before the toast dismisses itself.
    pub fn display_duration(&self) -> Duration {
        match self {
            Notification::Success(_) => SUCCESS_TOAST_DURATION,
            Notification::Error(_) => ERROR_TOAST_DURATION,
        }
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// The visible toasts, oldest first.
///
/// Each pushed toast gets a fresh id that its dismissal timer refers to, so a
/// late timer never removes a newer toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, returning the id to dismiss it with.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Notification surface. Nothing is returned to the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::Success(message) => tracing::info!(%message, "notification"),
            Notification::Error(message) => tracing::error!(%message, "notification"),
        }
    }
}

/// Keeps every notification for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen().clone()
    }

    pub fn error_count(&self) -> usize {
        self.seen().iter().filter(|n| n.is_error()).count()
    }

    fn seen(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.seen.lock().unwrap_or_else(|poisoned| {
            tracing::error!("notification log lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen().push(notification);
    }
}

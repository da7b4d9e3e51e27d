//! Transient toast notifications rendered in the HUD.
//!
//! The terminal counterpart of popup toasts: short titled messages with a
//! time-to-live, ticked by the event loop and drawn by the game view.

use crate::types::TOAST_TTL_MS;

/// Severity, used only for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub text: String,
    pub remaining_ms: u32,
}

/// A small queue of live toasts, newest last.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

/// At most this many toasts are kept; older ones are dropped first.
const MAX_TOASTS: usize = 3;

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, title: &str, text: impl Into<String>) {
        self.push(ToastKind::Info, title, text.into());
    }

    pub fn success(&mut self, title: &str, text: impl Into<String>) {
        self.push(ToastKind::Success, title, text.into());
    }

    pub fn error(&mut self, title: &str, text: impl Into<String>) {
        self.push(ToastKind::Error, title, text.into());
    }

    fn push(&mut self, kind: ToastKind, title: &str, text: String) {
        if self.entries.len() == MAX_TOASTS {
            self.entries.remove(0);
        }
        self.entries.push(Toast {
            kind,
            title: title.to_string(),
            text,
            remaining_ms: TOAST_TTL_MS,
        });
    }

    /// Age out expired toasts.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for toast in &mut self.entries {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.entries.retain(|t| t.remaining_ms > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut toasts = Toasts::new();
        assert!(toasts.is_empty());

        toasts.info("Shuffle", "Puzzle shuffled");
        assert_eq!(toasts.iter().count(), 1);

        // Not yet expired.
        toasts.tick(TOAST_TTL_MS - 1);
        assert_eq!(toasts.iter().count(), 1);

        toasts.tick(1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_oldest_dropped_at_capacity() {
        let mut toasts = Toasts::new();
        toasts.info("1", "a");
        toasts.info("2", "b");
        toasts.info("3", "c");
        toasts.success("4", "d");

        let titles: Vec<&str> = toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_kinds_preserved() {
        let mut toasts = Toasts::new();
        toasts.error("Oops", "shuffle failed");
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Error);
    }
}

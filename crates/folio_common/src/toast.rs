//! Transient notification store.
//!
//! One store instance is created by the composition root and handed to
//! whoever needs to raise a notice. It is deliberately not a global:
//! the lifecycle (create at startup, reset through its own API) is
//! owned by the caller, and expiry runs off the same explicit clock as
//! every other timer in the app.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl ToastStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|t| now < t.expires_at);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn reset(&mut self) {
        self.toasts.clear();
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(2500);

    #[test]
    fn toasts_expire_after_ttl() {
        let t0 = Instant::now();
        let mut store = ToastStore::new(TTL);
        store.push("BOOT COMPLETE", t0);

        store.tick(t0 + TTL - Duration::from_millis(1));
        assert_eq!(store.active().len(), 1);

        store.tick(t0 + TTL);
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_unique_and_dismiss_targets_one_toast() {
        let t0 = Instant::now();
        let mut store = ToastStore::new(TTL);
        let a = store.push("first", t0);
        let b = store.push("second", t0);
        assert_ne!(a, b);

        store.dismiss(a);
        assert_eq!(store.active().len(), 1);
        assert_eq!(store.active()[0].message, "second");
    }

    #[test]
    fn reset_clears_everything() {
        let t0 = Instant::now();
        let mut store = ToastStore::new(TTL);
        store.push("one", t0);
        store.push("two", t0);
        store.reset();
        assert!(store.is_empty());
    }
}

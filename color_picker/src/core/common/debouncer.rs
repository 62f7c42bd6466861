// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Trailing edge debounce for the "do X after Y ms of no activity" pattern.

use std::time::{Duration, Instant};

/// The status of a [`Debouncer`] at a given point in time:
/// - [`DebounceStatus::Idle`]: Nothing has been submitted since the last delivery.
/// - [`DebounceStatus::Waiting`]: A value is pending and the window has not elapsed.
/// - [`DebounceStatus::Settled`]: A value is pending and the window has elapsed with no
///   further calls, it is ready to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceStatus {
    Idle,
    Waiting,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Coalesces calls within a trailing window, and delivers only the last value once the
/// window elapses with no further calls. Follow these steps to use it:
///
/// 1. Create a [`Self::new`] instance with the desired window.
/// 2. Every time something changes, call [`Self::call`] with the new value and the
///    current time. This (re)starts the window.
/// 3. Periodically, or when [`Self::deadline`] is reached, call [`Self::poll`] with the
///    current time. It returns the value exactly once, when it has settled.
///
/// Time is always passed in, so this struct does not depend on any timer
/// implementation. Async hosts can wait for the deadline with [`sleep_until_deadline`].
///
/// ```
/// use std::time::{Duration, Instant};
/// use r3bl_color_picker::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(100));
/// let start = Instant::now();
///
/// debouncer.call("first", start);
/// debouncer.call("second", start + Duration::from_millis(50));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(150)), Some("second"));
/// assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration { self.window }

    /// Replaces any pending value with `value` and restarts the window at `now`.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    #[must_use]
    pub fn get_status(&self, now: Instant) -> DebounceStatus {
        match &self.pending {
            None => DebounceStatus::Idle,
            Some(pending) if now >= pending.deadline => DebounceStatus::Settled,
            Some(_) => DebounceStatus::Waiting,
        }
    }

    /// Returns the pending value if it has settled at `now`, and clears it.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.get_status(now) {
            DebounceStatus::Settled => self.pending.take().map(|it| it.value),
            DebounceStatus::Idle | DebounceStatus::Waiting => None,
        }
    }

    /// Returns the pending value right away, regardless of the window.
    pub fn flush(&mut self) -> Option<T> { self.pending.take().map(|it| it.value) }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) { self.pending = None; }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// The instant at which the pending value settles, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|it| it.deadline)
    }
}

/// Sleeps until the given deadline.
///
/// - If deadline is `Some(instant)`, sleeps until that instant.
/// - If deadline is `None`, returns a pending future (never completes).
///
/// This is designed to be used in `tokio::select!` branches:
///
/// ```rust,ignore
/// () = sleep_until_deadline(picker.next_change_deadline()) => {
///     picker.poll_change();
/// }
/// ```
pub async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    const WINDOW: Duration = Duration::from_millis(100);

    fn ms(it: u64) -> Duration { Duration::from_millis(it) }

    #[test]
    fn test_new_starts_idle() {
        let debouncer = Debouncer::<u8>::new(WINDOW);
        assert_eq2!(debouncer.get_status(Instant::now()), DebounceStatus::Idle);
        assert!(!debouncer.is_pending());
        assert!(debouncer.deadline().is_none());
    }

    #[test]
    fn test_waiting_then_settled() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();
        debouncer.call(1, start);

        assert_eq2!(debouncer.get_status(start + ms(99)), DebounceStatus::Waiting);
        assert_eq2!(debouncer.poll(start + ms(99)), None);

        assert_eq2!(debouncer.get_status(start + ms(100)), DebounceStatus::Settled);
        assert_eq2!(debouncer.poll(start + ms(100)), Some(1));

        // Delivered exactly once.
        assert_eq2!(debouncer.get_status(start + ms(200)), DebounceStatus::Idle);
        assert_eq2!(debouncer.poll(start + ms(200)), None);
    }

    #[test]
    fn test_calls_within_window_coalesce_to_last() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();
        for step in 0..10_u64 {
            debouncer.call(step, start + ms(step * 20));
        }
        // Last call at 180ms, so the window ends at 280ms.
        assert_eq2!(debouncer.deadline(), Some(start + ms(280)));
        assert_eq2!(debouncer.poll(start + ms(279)), None);
        assert_eq2!(debouncer.poll(start + ms(280)), Some(9));
    }

    #[test]
    fn test_flush_and_cancel() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.call("a", start);
        assert_eq2!(debouncer.flush(), Some("a"));
        assert!(!debouncer.is_pending());

        debouncer.call("b", start);
        debouncer.cancel();
        assert_eq2!(debouncer.poll(start + ms(500)), None);
    }

    #[tokio::test]
    async fn test_sleep_until_deadline_completes() {
        let deadline = Instant::now() + ms(10);
        sleep_until_deadline(Some(deadline)).await;
        assert!(Instant::now() >= deadline);
    }

    #[tokio::test]
    async fn test_sleep_until_no_deadline_never_completes() {
        let result =
            tokio::time::timeout(ms(20), sleep_until_deadline(None)).await;
        assert!(result.is_err());
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

/// Source of "now" for anything time based (currently just the debounced change
/// notification). Injecting it keeps the widget independent of any specific timer
/// implementation, and lets tests move time forward by hand, see
/// [`crate::test_fixtures::ManualClock`].
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The production [`Clock`], backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

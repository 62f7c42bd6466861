// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::Cell,
          rc::Rc,
          time::{Duration, Instant}};

use crate::Clock;

/// A [`Clock`] that only moves when told to. Clones share the same time, so a test can
/// hand one clone to the picker and keep the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, duration: Duration) { self.now.set(self.now.get() + duration); }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { self.now.get() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::default();
        let other = clock.clone();
        let start = other.now();
        clock.advance(Duration::from_millis(42));
        assert_eq2!(other.now() - start, Duration::from_millis(42));
    }
}

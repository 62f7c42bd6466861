// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{PickerSurface, PointerCaptureHost, SurfaceGeometry, SurfaceRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    Acquire(PickerSurface),
    Release(PickerSurface),
}

/// A [`PointerCaptureHost`] that records every acquire and release. Clones share the
/// same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingCaptureHost {
    events: Rc<RefCell<Vec<CaptureEvent>>>,
}

impl RecordingCaptureHost {
    #[must_use]
    pub fn as_host(&self) -> Rc<dyn PointerCaptureHost> { Rc::new(self.clone()) }

    #[must_use]
    pub fn events(&self) -> Vec<CaptureEvent> { self.events.borrow().clone() }

    /// True if some surface has been acquired more times than it has been released.
    #[must_use]
    pub fn is_any_active(&self) -> bool {
        let mut balance: HashMap<PickerSurface, i32> = HashMap::new();
        for event in self.events.borrow().iter() {
            match event {
                CaptureEvent::Acquire(surface) => *balance.entry(*surface).or_default() += 1,
                CaptureEvent::Release(surface) => *balance.entry(*surface).or_default() -= 1,
            }
        }
        balance.values().any(|count| *count > 0)
    }
}

impl PointerCaptureHost for RecordingCaptureHost {
    fn acquire(&self, surface: PickerSurface) {
        self.events.borrow_mut().push(CaptureEvent::Acquire(surface));
    }

    fn release(&self, surface: PickerSurface) {
        self.events.borrow_mut().push(CaptureEvent::Release(surface));
    }
}

/// A [`SurfaceGeometry`] with fixed rectangles. Surfaces that were never added are
/// treated as not mounted.
#[derive(Debug, Clone, Default)]
pub struct FixedGeometry {
    rects: HashMap<PickerSurface, SurfaceRect>,
}

impl FixedGeometry {
    #[must_use]
    pub fn with(mut self, surface: PickerSurface, rect: SurfaceRect) -> Self {
        self.rects.insert(surface, rect);
        self
    }

    pub fn remove(&mut self, surface: PickerSurface) { self.rects.remove(&surface); }
}

impl SurfaceGeometry for FixedGeometry {
    fn bounding_rect(&self, surface: PickerSurface) -> Option<SurfaceRect> {
        self.rects.get(&surface).copied()
    }
}

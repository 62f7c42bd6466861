// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, rc::Rc};

use super::PickerSurface;

/// Implemented by the host to start and stop tracking the pointer across the whole
/// window for a surface, eg: by attaching and detaching a global move listener. Calls
/// are always paired, see [`PointerCapture`].
pub trait PointerCaptureHost: Debug {
    fn acquire(&self, surface: PickerSurface);
    fn release(&self, surface: PickerSurface);
}

/// For hosts that already deliver every pointer event to the picker, like the terminal
/// demo.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPointerCaptureHost;

impl PointerCaptureHost for NoopPointerCaptureHost {
    fn acquire(&self, _surface: PickerSurface) {}
    fn release(&self, _surface: PickerSurface) {}
}

/// A drag session. Acquired on press, released on drop. Controllers hold this in an
/// [`Option`], so the release runs on pointer up, when a controller is torn down (eg:
/// the opacity strip being hidden), and when the whole picker is dropped.
#[derive(Debug)]
pub struct PointerCapture {
    host: Rc<dyn PointerCaptureHost>,
    surface: PickerSurface,
}

impl PointerCapture {
    #[must_use]
    pub fn acquire(host: Rc<dyn PointerCaptureHost>, surface: PickerSurface) -> Self {
        tracing::debug!(message = "Pointer capture acquired", surface = ?surface);
        host.acquire(surface);
        Self { host, surface }
    }

    #[must_use]
    pub fn surface(&self) -> PickerSurface { self.surface }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        tracing::debug!(message = "Pointer capture released", surface = ?self.surface);
        self.host.release(self.surface);
    }
}

/// Drag state for one surface. Press starts a session, release (anywhere) ends it.
#[derive(Debug)]
pub struct DragTracker {
    host: Rc<dyn PointerCaptureHost>,
    surface: PickerSurface,
    maybe_capture: Option<PointerCapture>,
}

impl DragTracker {
    #[must_use]
    pub fn new(host: Rc<dyn PointerCaptureHost>, surface: PickerSurface) -> Self {
        Self {
            host,
            surface,
            maybe_capture: None,
        }
    }

    /// No-op if a session is already active.
    pub fn start(&mut self) {
        if self.maybe_capture.is_none() {
            self.maybe_capture =
                Some(PointerCapture::acquire(self.host.clone(), self.surface));
        }
    }

    pub fn stop(&mut self) { self.maybe_capture = None; }

    #[must_use]
    pub fn is_dragging(&self) -> bool { self.maybe_capture.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_fixtures::{CaptureEvent, RecordingCaptureHost}};

    #[test]
    fn test_release_runs_on_drop() {
        let host = RecordingCaptureHost::default();
        {
            let capture = PointerCapture::acquire(host.as_host(), PickerSurface::Hue);
            assert_eq2!(capture.surface(), PickerSurface::Hue);
            assert_eq2!(host.events(), vec![CaptureEvent::Acquire(PickerSurface::Hue)]);
        }
        assert_eq2!(
            host.events(),
            vec![
                CaptureEvent::Acquire(PickerSurface::Hue),
                CaptureEvent::Release(PickerSurface::Hue),
            ]
        );
        assert!(!host.is_any_active());
    }

    #[test]
    fn test_drag_tracker_start_is_idempotent() {
        let host = RecordingCaptureHost::default();
        let mut tracker = DragTracker::new(host.as_host(), PickerSurface::Opacity);
        tracker.start();
        tracker.start();
        assert!(tracker.is_dragging());
        assert_eq2!(host.events().len(), 1);

        tracker.stop();
        assert!(!tracker.is_dragging());
        assert!(!host.is_any_active());
    }

    #[test]
    fn test_drag_tracker_drop_releases() {
        let host = RecordingCaptureHost::default();
        let mut tracker = DragTracker::new(host.as_host(), PickerSurface::Saturation);
        tracker.start();
        drop(tracker);
        assert!(!host.is_any_active());
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use crate::{ChangeOrigin, DragTracker, PickerEvent, PickerSurface, PointerCaptureHost,
            PointerInput, PointerInputKind, StripClassNames, SurfaceGeometry, round_alpha,
            round_to_decimals, resolve_pointer_x_percent};

/// `round(position / 100, 2)`, with `position` clamped into `0..=100`.
#[must_use]
pub fn alpha_from_position(position_percent: f64) -> f64 {
    round_alpha(position_percent.clamp(0.0, 100.0) / 100.0)
}

/// What the host draws for the opacity strip. The host puts a checkerboard under
/// `background`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityView {
    /// Transparent to opaque, tinted with the current hue only.
    pub background: String,
    pub pointer_left_percent: f64,
    pub pointer_color: String,
    pub class_names: StripClassNames,
}

/// The 1D opacity strip. The position is a percentage of the strip's content width.
#[derive(Debug)]
pub struct OpacityController {
    /// Percentage in `0..=100`.
    pointer: f64,
    hue: f64,
    drag_tracker: DragTracker,
}

impl OpacityController {
    #[must_use]
    pub fn new(alpha: f64, hue: f64, capture_host: Rc<dyn PointerCaptureHost>) -> Self {
        Self {
            pointer: (alpha * 100.0).clamp(0.0, 100.0),
            hue,
            drag_tracker: DragTracker::new(capture_host, PickerSurface::Opacity),
        }
    }

    #[must_use]
    pub fn pointer(&self) -> f64 { self.pointer }

    #[must_use]
    pub fn alpha(&self) -> f64 { alpha_from_position(self.pointer) }

    #[must_use]
    pub fn is_dragging(&self) -> bool { self.drag_tracker.is_dragging() }

    /// Changes that came from the strip itself leave the pointer alone.
    pub fn sync_from_value(&mut self, alpha: f64, hue: f64, origin: ChangeOrigin) {
        self.hue = hue;
        if origin != ChangeOrigin::OpacityStrip {
            self.pointer = (alpha * 100.0).clamp(0.0, 100.0);
        }
    }

    pub fn handle_pointer_input(
        &mut self,
        input: PointerInput,
        geometry: &dyn SurfaceGeometry,
    ) -> Option<PickerEvent> {
        match input.kind {
            PointerInputKind::Down(_) => {
                let rect = geometry
                    .bounding_rect(PickerSurface::Opacity)
                    .filter(|rect| rect.contains(input.pos))?;
                self.drag_tracker.start();
                self.pointer = resolve_pointer_x_percent(input.pos, &rect);
                Some(PickerEvent::AlphaChange(self.alpha()))
            }
            PointerInputKind::Drag(_) | PointerInputKind::Move => {
                if !self.is_dragging() {
                    return None;
                }
                let rect = geometry.bounding_rect(PickerSurface::Opacity)?;
                let pointer = resolve_pointer_x_percent(input.pos, &rect);
                if (pointer - self.pointer).abs() < f64::EPSILON {
                    return None;
                }
                self.pointer = pointer;
                Some(PickerEvent::AlphaChange(self.alpha()))
            }
            PointerInputKind::Up(_) => {
                self.drag_tracker.stop();
                None
            }
            PointerInputKind::Other => None,
        }
    }

    #[must_use]
    pub fn render(&self, alpha: f64, class_names: &StripClassNames) -> OpacityView {
        let hue = round_to_decimals(self.hue, 2);
        OpacityView {
            background: format!(
                "linear-gradient(to right, hsla({hue}, 100%, 50%, 0), \
                 hsla({hue}, 100%, 50%, 1))"
            ),
            pointer_left_percent: self.pointer,
            pointer_color: format!("hsla({hue}, 100%, 50%, {alpha})"),
            class_names: class_names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, NoopPointerCaptureHost, SurfaceRect, assert_eq2,
                test_fixtures::FixedGeometry};
    use test_case::test_case;

    #[test_case(50.0, 0.5)]
    #[test_case(100.0, 1.0)]
    #[test_case(0.0, 0.0)]
    #[test_case(33.333, 0.33)]
    #[test_case(150.0, 1.0 ; "clamped")]
    fn test_alpha_from_position(position: f64, expected: f64) {
        assert_eq2!(alpha_from_position(position), expected);
    }

    fn geometry() -> FixedGeometry {
        FixedGeometry::default().with(
            PickerSurface::Opacity,
            SurfaceRect {
                client_width: 200.0,
                ..SurfaceRect::new(0.0, 50.0, 204.0, 20.0)
            },
        )
    }

    #[test]
    fn test_press_and_drag_use_client_width() {
        let mut it = OpacityController::new(1.0, 0.0, Rc::new(NoopPointerCaptureHost));
        let geometry = geometry();
        assert_eq2!(
            it.handle_pointer_input(
                PointerInput::new(100.0, 60.0, PointerInputKind::Down(Button::Left)),
                &geometry,
            ),
            Some(PickerEvent::AlphaChange(0.5))
        );
        assert_eq2!(
            it.handle_pointer_input(
                PointerInput::new(-10.0, 0.0, PointerInputKind::Drag(Button::Left)),
                &geometry,
            ),
            Some(PickerEvent::AlphaChange(0.0))
        );
        it.handle_pointer_input(
            PointerInput::new(0.0, 0.0, PointerInputKind::Up(Button::Left)),
            &geometry,
        );
        assert!(!it.is_dragging());
    }

    #[test]
    fn test_sync_and_render() {
        let mut it = OpacityController::new(0.25, 120.0, Rc::new(NoopPointerCaptureHost));
        assert_eq2!(it.pointer(), 25.0);

        it.sync_from_value(0.8, 200.0, ChangeOrigin::OpacityStrip);
        assert_eq2!(it.pointer(), 25.0);

        it.sync_from_value(0.8, 200.0, ChangeOrigin::External);
        assert_eq2!(it.pointer(), 80.0);

        let view = it.render(0.8, &StripClassNames::default());
        assert_eq2!(
            view.background,
            "linear-gradient(to right, hsla(200, 100%, 50%, 0), hsla(200, 100%, 50%, 1))"
        );
        assert_eq2!(view.pointer_color, "hsla(200, 100%, 50%, 0.8)");
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use crate::{ChangeOrigin, DragTracker, Hsv, PickerEvent, PickerSurface, PointerCaptureHost,
            PointerInput, PointerInputKind, PointerPos2d, SaturationContainerClassNames,
            SurfaceGeometry, ValueHsl, ValueObject, clamp_unit,
            hsv_to_hsl_saturation_lightness, resolve_pointer_2d, round_to_decimals};

/// What the host draws for the saturation / value plane.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationView {
    /// CSS compatible layered background: a vertical black fade, over a horizontal
    /// white fade, over the fully saturated hue.
    pub background: String,
    /// Pointer position as fractions of the plane's width and height.
    pub pointer: PointerPos2d,
    /// The formatted color shown in the copy-to-clipboard control.
    pub display_value: String,
    pub class_names: SaturationContainerClassNames,
}

/// The 2D saturation / value plane.
///
/// - `x` is HSV saturation, `y` is `1 - HSV value`.
/// - The hue used to emit colors is held separately, since the plane itself never
///   changes hue. The orchestrator keeps it fresh.
/// - A press on the color display control (which sits on top of the plane) does not
///   start a drag. A press and release that both land on it is a click.
#[derive(Debug)]
pub struct SaturationController {
    pointer: PointerPos2d,
    hue: f64,
    drag_tracker: DragTracker,
    is_display_pressed: bool,
}

impl SaturationController {
    #[must_use]
    pub fn new(value: &ValueObject, hue: f64, capture_host: Rc<dyn PointerCaptureHost>) -> Self {
        Self {
            pointer: pointer_from_value(value),
            hue,
            drag_tracker: DragTracker::new(capture_host, PickerSurface::Saturation),
            is_display_pressed: false,
        }
    }

    #[must_use]
    pub fn pointer(&self) -> PointerPos2d { self.pointer }

    #[must_use]
    pub fn hue(&self) -> f64 { self.hue }

    #[must_use]
    pub fn is_dragging(&self) -> bool { self.drag_tracker.is_dragging() }

    /// True between a press on the color display control and the next release.
    #[must_use]
    pub fn is_display_pressed(&self) -> bool { self.is_display_pressed }

    /// Changes that came from the plane itself leave the pointer alone.
    pub fn sync_from_value(&mut self, value: &ValueObject, hue: f64, origin: ChangeOrigin) {
        self.hue = hue;
        if origin != ChangeOrigin::SaturationPlane {
            self.pointer = pointer_from_value(value);
        }
    }

    /// The color under the pointer, at the current hue. Saturation and lightness are
    /// percentages. Alpha is not carried.
    #[must_use]
    pub fn current_hsl(&self) -> ValueHsl {
        let hsv = Hsv {
            h: self.hue,
            s: self.pointer.x,
            v: 1.0 - self.pointer.y,
        };
        let (s, l) = hsv_to_hsl_saturation_lightness(hsv.s, hsv.v);
        ValueHsl::new(hsv.h, s * 100.0, l * 100.0)
    }

    pub fn handle_pointer_input(
        &mut self,
        input: PointerInput,
        geometry: &dyn SurfaceGeometry,
    ) -> Option<PickerEvent> {
        match input.kind {
            PointerInputKind::Down(_) => {
                if geometry.hit_test(PickerSurface::ColorDisplay, input.pos) {
                    self.is_display_pressed = true;
                    return None;
                }
                let rect = geometry
                    .bounding_rect(PickerSurface::Saturation)
                    .filter(|rect| rect.contains(input.pos))?;
                self.drag_tracker.start();
                self.pointer = resolve_pointer_2d(input.pos, &rect);
                Some(PickerEvent::HslChange(self.current_hsl()))
            }
            PointerInputKind::Drag(_) | PointerInputKind::Move => {
                if !self.is_dragging() {
                    return None;
                }
                let rect = geometry.bounding_rect(PickerSurface::Saturation)?;
                let pointer = resolve_pointer_2d(input.pos, &rect);
                if pointer == self.pointer {
                    return None;
                }
                self.pointer = pointer;
                Some(PickerEvent::HslChange(self.current_hsl()))
            }
            PointerInputKind::Up(_) => {
                self.drag_tracker.stop();
                let was_display_pressed = std::mem::take(&mut self.is_display_pressed);
                (was_display_pressed
                    && geometry.hit_test(PickerSurface::ColorDisplay, input.pos))
                .then_some(PickerEvent::ColorDisplayClick(input))
            }
            PointerInputKind::Other => None,
        }
    }

    #[must_use]
    pub fn render(
        &self,
        display_value: String,
        class_names: &SaturationContainerClassNames,
    ) -> SaturationView {
        SaturationView {
            background: format!(
                "linear-gradient(transparent, black), \
                 linear-gradient(to right, white, transparent), \
                 hsl({}, 100%, 50%)",
                round_to_decimals(self.hue, 2)
            ),
            pointer: self.pointer,
            display_value,
            class_names: class_names.clone(),
        }
    }
}

/// `x = hsv.s`, `y = 1 - hsv.v`.
fn pointer_from_value(value: &ValueObject) -> PointerPos2d {
    let hsv = value.to_true_color().to_hsv();
    PointerPos2d {
        x: clamp_unit(hsv.s),
        y: clamp_unit(1.0 - hsv.v),
    }
}

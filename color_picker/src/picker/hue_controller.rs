// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use crate::{ChangeOrigin, DragTracker, PickerEvent, PickerSurface, PointerCaptureHost,
            PointerInput, PointerInputKind, StripClassNames, SurfaceGeometry, ValueHsl,
            ValueObject, clamp_unit, resolve_pointer_x, round_to_decimals};

/// The largest hue the strip emits. The right edge of the strip is `359`, never `360`
/// (which would wrap around to `0`).
pub const MAX_STRIP_HUE: f64 = 359.0;

/// Full rainbow, left to right.
pub const HUE_STRIP_BACKGROUND: &str = "linear-gradient(to right, rgb(255, 0, 0), \
                                        rgb(255, 255, 0), rgb(0, 255, 0), \
                                        rgb(0, 255, 255), rgb(0, 0, 255), \
                                        rgb(255, 0, 255), rgb(255, 0, 0))";

/// `min(359, position * 360)`, with `position` clamped into `0..=1`.
#[must_use]
pub fn hue_from_position(position: f64) -> f64 {
    (clamp_unit(position) * 360.0).min(MAX_STRIP_HUE)
}

/// What the host draws for the hue strip.
#[derive(Debug, Clone, PartialEq)]
pub struct HueView {
    pub background: &'static str,
    /// Pointer position as a percentage of the strip's width.
    pub pointer_left_percent: f64,
    pub pointer_color: String,
    pub class_names: StripClassNames,
}

/// The 1D hue strip. Only the horizontal axis matters. Saturation and lightness are
/// passed through unchanged from the canonical value.
#[derive(Debug)]
pub struct HueController {
    /// Fraction in `0..=1`.
    pointer: f64,
    saturation: f64,
    lightness: f64,
    drag_tracker: DragTracker,
}

impl HueController {
    #[must_use]
    pub fn new(value: &ValueObject, hue: f64, capture_host: Rc<dyn PointerCaptureHost>) -> Self {
        Self {
            pointer: clamp_unit(hue / 360.0),
            saturation: value.hsl.s,
            lightness: value.hsl.l,
            drag_tracker: DragTracker::new(capture_host, PickerSurface::Hue),
        }
    }

    #[must_use]
    pub fn pointer(&self) -> f64 { self.pointer }

    #[must_use]
    pub fn hue(&self) -> f64 { hue_from_position(self.pointer) }

    #[must_use]
    pub fn is_dragging(&self) -> bool { self.drag_tracker.is_dragging() }

    /// Changes that came from the strip itself leave the pointer alone.
    pub fn sync_from_value(&mut self, value: &ValueObject, hue: f64, origin: ChangeOrigin) {
        self.saturation = value.hsl.s;
        self.lightness = value.hsl.l;
        if origin != ChangeOrigin::HueStrip {
            self.pointer = clamp_unit(hue / 360.0);
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
                    .bounding_rect(PickerSurface::Hue)
                    .filter(|rect| rect.contains(input.pos))?;
                self.drag_tracker.start();
                self.pointer = resolve_pointer_x(input.pos, &rect);
                Some(self.emit())
            }
            PointerInputKind::Drag(_) | PointerInputKind::Move => {
                if !self.is_dragging() {
                    return None;
                }
                let rect = geometry.bounding_rect(PickerSurface::Hue)?;
                let pointer = resolve_pointer_x(input.pos, &rect);
                if (pointer - self.pointer).abs() < f64::EPSILON {
                    return None;
                }
                self.pointer = pointer;
                Some(self.emit())
            }
            PointerInputKind::Up(_) => {
                self.drag_tracker.stop();
                None
            }
            PointerInputKind::Other => None,
        }
    }

    #[must_use]
    pub fn render(&self, class_names: &StripClassNames) -> HueView {
        HueView {
            background: HUE_STRIP_BACKGROUND,
            pointer_left_percent: self.pointer * 100.0,
            pointer_color: format!("hsl({}, 100%, 50%)", round_to_decimals(self.hue(), 2)),
            class_names: class_names.clone(),
        }
    }

    fn emit(&self) -> PickerEvent {
        PickerEvent::HslChange(ValueHsl::new(self.hue(), self.saturation, self.lightness))
    }
}

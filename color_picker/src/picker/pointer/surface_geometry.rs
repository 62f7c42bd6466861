// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ClientPos;

/// The interactive surfaces of the picker. The host maps each of these to whatever it
/// renders, and answers geometry queries for them via [`SurfaceGeometry`].
#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash)]
pub enum PickerSurface {
    /// The 2D saturation / value plane.
    Saturation,
    /// The copy-to-clipboard control that sits on top of the saturation plane.
    ColorDisplay,
    Hue,
    Opacity,
}

/// Bounding box of a rendered surface, in client coordinates.
///
/// `client_width` is the content width (without borders), which is what the opacity
/// strip resolves its position against. For most hosts it is the same as `width`.
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub client_width: f64,
}

impl SurfaceRect {
    /// Creates a rect whose `client_width` is the same as `width`.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            client_width: width,
        }
    }

    /// Edges are inclusive, so a pointer on the right edge of a strip is inside it and
    /// resolves to the full value.
    #[must_use]
    pub fn contains(&self, pos: ClientPos) -> bool {
        pos.x >= self.left
            && pos.x <= self.left + self.width
            && pos.y >= self.top
            && pos.y <= self.top + self.height
    }
}

/// Implemented by the host. Geometry is queried on demand at interaction time, so the
/// host is free to move or resize surfaces between events. Returning `None` means the
/// surface isn't currently rendered, and pointer input for it is ignored.
pub trait SurfaceGeometry {
    fn bounding_rect(&self, surface: PickerSurface) -> Option<SurfaceRect>;

    fn hit_test(&self, surface: PickerSurface, pos: ClientPos) -> bool {
        self.bounding_rect(surface)
            .is_some_and(|rect| rect.contains(pos))
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure mapping from client coordinates to normalized pointer positions. Nothing here
//! knows about any rendering surface, the host supplies the [`SurfaceRect`].

use super::{ClientPos, SurfaceRect};

/// Position on the saturation / value plane. Both axes are fractions in `0..=1`. `x` is
/// HSV saturation, `y` is `1 - HSV value` (so `0` is the top, bright edge).
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct PointerPos2d {
    pub x: f64,
    pub y: f64,
}

/// Clamps into `0..=1`. `NaN` becomes `0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// `offset / extent` clamped into `0..=1`. Zero or negative extents resolve to `0`.
#[must_use]
pub fn resolve_fraction(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    clamp_unit(offset / extent)
}

#[must_use]
pub fn resolve_pointer_2d(pos: ClientPos, rect: &SurfaceRect) -> PointerPos2d {
    PointerPos2d {
        x: resolve_fraction(pos.x - rect.left, rect.width),
        y: resolve_fraction(pos.y - rect.top, rect.height),
    }
}

/// Horizontal fraction in `0..=1`, relative to the bounding box width.
#[must_use]
pub fn resolve_pointer_x(pos: ClientPos, rect: &SurfaceRect) -> f64 {
    resolve_fraction(pos.x - rect.left, rect.width)
}

/// Horizontal percentage in `0..=100`, relative to the content width.
#[must_use]
pub fn resolve_pointer_x_percent(pos: ClientPos, rect: &SurfaceRect) -> f64 {
    resolve_fraction(pos.x - rect.left, rect.client_width) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(-0.5, 0.0)]
    #[test_case(0.25, 0.25)]
    #[test_case(7.0, 1.0)]
    #[test_case(f64::NAN, 0.0)]
    fn test_clamp_unit(value: f64, expected: f64) {
        assert_eq2!(clamp_unit(value), expected);
    }

    #[test_case(5.0, 10.0, 0.5)]
    #[test_case(-5.0, 10.0, 0.0)]
    #[test_case(50.0, 10.0, 1.0)]
    #[test_case(5.0, 0.0, 0.0 ; "zero extent")]
    #[test_case(5.0, -3.0, 0.0 ; "negative extent")]
    fn test_resolve_fraction(offset: f64, extent: f64, expected: f64) {
        assert_eq2!(resolve_fraction(offset, extent), expected);
    }

    #[test]
    fn test_resolve_pointer_2d_clamps_outside_of_rect() {
        let rect = SurfaceRect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq2!(
            resolve_pointer_2d(ClientPos::new(150.0, 100.0), &rect),
            PointerPos2d { x: 0.25, y: 0.5 }
        );
        assert_eq2!(
            resolve_pointer_2d(ClientPos::new(0.0, 500.0), &rect),
            PointerPos2d { x: 0.0, y: 1.0 }
        );
    }

    #[test]
    fn test_resolve_pointer_x_percent_uses_client_width() {
        let rect = SurfaceRect {
            client_width: 50.0,
            ..SurfaceRect::new(0.0, 0.0, 60.0, 10.0)
        };
        assert_eq2!(resolve_pointer_x_percent(ClientPos::new(25.0, 0.0), &rect), 50.0);
        assert_eq2!(resolve_pointer_x(ClientPos::new(30.0, 0.0), &rect), 0.5);
    }
}

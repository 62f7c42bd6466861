// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between RGB, HSL and HSV. All inputs and outputs here are unit floats in
//! `0..=1` (hue included, as a fraction of a full turn). No rounding happens in this
//! module, that is done once when building a [`crate::ValueObject`].

#![allow(clippy::float_cmp)]

/// Returns `(h, s, l)`.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    (hue_from_rgb(r, g, b, max, d), s, l)
}

/// Returns `(r, g, b)`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Returns `(h, s, v)`.
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if max == min {
        return (0.0, s, v);
    }

    (hue_from_rgb(r, g, b, max, d), s, v)
}

/// Returns `(r, g, b)`. A hue of `1.0` is the same as `0.0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Returns HSL `(s, l)` for the HSV `(s, v)`. Hue is the same in both models, so it is
/// not involved, which keeps it intact for achromatic colors.
#[must_use]
pub fn hsv_to_hsl_saturation_lightness(s: f64, v: f64) -> (f64, f64) {
    let l = v * (1.0 - s / 2.0);
    let sl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (sl.clamp(0.0, 1.0), l.clamp(0.0, 1.0))
}

/// Converts a hue in degrees to a unit fraction. `360` maps to `1.0` (not `0.0`), both
/// produce the same color.
#[must_use]
pub fn degrees_to_unit(degrees: f64) -> f64 {
    if (degrees - 360.0).abs() < 0.000_001 {
        return 1.0;
    }
    degrees.rem_euclid(360.0) / 360.0
}

fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, round_to_decimals};
    use test_case::test_case;

    fn round3(it: (f64, f64, f64)) -> (f64, f64, f64) {
        (
            round_to_decimals(it.0, 3),
            round_to_decimals(it.1, 3),
            round_to_decimals(it.2, 3),
        )
    }

    #[test_case((1.0, 0.0, 0.0), (0.0, 1.0, 0.5) ; "red")]
    #[test_case((0.0, 1.0, 1.0), (0.5, 1.0, 0.5) ; "cyan")]
    #[test_case((1.0, 1.0, 1.0), (0.0, 0.0, 1.0) ; "white")]
    #[test_case((0.5, 0.5, 0.5), (0.0, 0.0, 0.5) ; "gray")]
    fn test_rgb_to_hsl(rgb: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_eq2!(round3(rgb_to_hsl(rgb.0, rgb.1, rgb.2)), expected);
    }

    #[test_case((0.0, 1.0, 0.5), (1.0, 0.0, 0.0) ; "red")]
    #[test_case((1.0, 1.0, 0.5), (1.0, 0.0, 0.0) ; "red at full turn")]
    #[test_case((0.5, 1.0, 0.5), (0.0, 1.0, 1.0) ; "cyan")]
    #[test_case((0.0, 0.0, 0.25), (0.25, 0.25, 0.25) ; "achromatic")]
    fn test_hsl_to_rgb(hsl: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_eq2!(round3(hsl_to_rgb(hsl.0, hsl.1, hsl.2)), expected);
    }

    #[test_case((1.0, 0.0, 0.0), (0.0, 1.0, 1.0) ; "red")]
    #[test_case((0.0, 0.0, 0.0), (0.0, 0.0, 0.0) ; "black")]
    #[test_case((0.5, 0.25, 0.25), (0.0, 0.5, 0.5) ; "dark red")]
    fn test_rgb_to_hsv(rgb: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_eq2!(round3(rgb_to_hsv(rgb.0, rgb.1, rgb.2)), expected);
    }

    #[test_case((0.0, 1.0, 1.0), (1.0, 0.0, 0.0) ; "red")]
    #[test_case((1.0, 1.0, 1.0), (1.0, 0.0, 0.0) ; "red at full turn")]
    #[test_case((0.5, 1.0, 1.0), (0.0, 1.0, 1.0) ; "cyan")]
    #[test_case((0.0, 0.0, 0.5), (0.5, 0.5, 0.5) ; "gray")]
    fn test_hsv_to_rgb(hsv: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_eq2!(round3(hsv_to_rgb(hsv.0, hsv.1, hsv.2)), expected);
    }

    #[test_case((1.0, 1.0), (1.0, 0.5) ; "pure hue")]
    #[test_case((0.0, 1.0), (0.0, 1.0) ; "white")]
    #[test_case((0.0, 0.0), (0.0, 0.0) ; "black")]
    #[test_case((0.5, 0.5), (0.333, 0.375) ; "muted")]
    fn test_hsv_to_hsl_saturation_lightness(sv: (f64, f64), expected: (f64, f64)) {
        let (s, l) = hsv_to_hsl_saturation_lightness(sv.0, sv.1);
        assert_eq2!((round_to_decimals(s, 3), round_to_decimals(l, 3)), expected);
    }

    #[test]
    fn test_degrees_to_unit() {
        assert_eq2!(degrees_to_unit(360.0), 1.0);
        assert_eq2!(degrees_to_unit(180.0), 0.5);
        assert_eq2!(degrees_to_unit(0.0), 0.0);
    }
}

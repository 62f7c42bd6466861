// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Write as _, str::FromStr};

use super::{degrees_to_unit, hsl_to_rgb, hsv_to_rgb, looks_like_hex, lookup_named_color,
            parse_hex_color, rgb_to_hsl, rgb_to_hsv, try_parse_css_color};
use crate::{ColorInput, ColorParseError, ColorParseResult, HslaValue, Hsv,
            LossyConvertToByte, RgbaValue, ValueHsl, ValueObject, ValueRgb, round_alpha,
            round_to_integer};

/// Unrounded RGBA color, all channels are unit floats in `0..=1`. Every accepted
/// [`ColorInput`] is converted into this first, and every output format is produced from
/// it, so rounding happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrueColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for TrueColor {
    fn default() -> Self { Self::BLACK }
}

impl TrueColor {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            r: f64::from(red) / 255.0,
            g: f64::from(green) / 255.0,
            b: f64::from(blue) / 255.0,
            a: alpha,
        }
    }

    /// # Errors
    ///
    /// Returns [`ColorParseError::ComponentOutOfRange`] if a channel is outside of
    /// `0..=255` or alpha is outside of `0..=1`.
    pub fn try_from_value_rgb(value: ValueRgb) -> ColorParseResult<Self> {
        let r = ColorParseError::check_range("r", value.r, 0.0, 255.0)?;
        let g = ColorParseError::check_range("g", value.g, 0.0, 255.0)?;
        let b = ColorParseError::check_range("b", value.b, 0.0, 255.0)?;
        let a = try_alpha(value.a)?;
        Ok(Self {
            r: r / 255.0,
            g: g / 255.0,
            b: b / 255.0,
            a,
        })
    }

    /// Saturation and lightness are percentages.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::ComponentOutOfRange`] if hue is outside of `0..=360`,
    /// saturation or lightness are outside of `0..=100`, or alpha is outside of `0..=1`.
    pub fn try_from_value_hsl(value: ValueHsl) -> ColorParseResult<Self> {
        let h = ColorParseError::check_range("h", value.h, 0.0, 360.0)?;
        let s = ColorParseError::check_range("s", value.s, 0.0, 100.0)?;
        let l = ColorParseError::check_range("l", value.l, 0.0, 100.0)?;
        let a = try_alpha(value.a)?;
        let (r, g, b) = hsl_to_rgb(degrees_to_unit(h), s / 100.0, l / 100.0);
        Ok(Self { r, g, b, a })
    }

    /// Saturation and value are percentages.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_from_value_hsl`], with `v` in place of `l`.
    pub fn try_from_hsv_percent(
        h: f64,
        s: f64,
        v: f64,
        maybe_alpha: Option<f64>,
    ) -> ColorParseResult<Self> {
        let h = ColorParseError::check_range("h", h, 0.0, 360.0)?;
        let s = ColorParseError::check_range("s", s, 0.0, 100.0)?;
        let v = ColorParseError::check_range("v", v, 0.0, 100.0)?;
        let a = try_alpha(maybe_alpha)?;
        Ok(Self::from_hsv(
            Hsv {
                h,
                s: s / 100.0,
                v: v / 100.0,
            },
            a,
        ))
    }

    /// Hue in degrees, saturation and value as fractions. Out of range input is clamped,
    /// this is used by the saturation plane which always produces valid coordinates.
    #[must_use]
    pub fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(
            degrees_to_unit(hsv.h.clamp(0.0, 360.0)),
            hsv.s.clamp(0.0, 1.0),
            hsv.v.clamp(0.0, 1.0),
        );
        Self { r, g, b, a: alpha }
    }

    /// # Errors
    ///
    /// Returns a [`ColorParseError`] describing why the input is not a color.
    pub fn try_from_color_input(input: &ColorInput) -> ColorParseResult<Self> {
        match input {
            ColorInput::Text(text) => text.parse(),
            ColorInput::Rgb(value) => Self::try_from_value_rgb(*value),
            ColorInput::Hsl(value) => Self::try_from_value_hsl(*value),
        }
    }

    /// Rounds channels to integers and alpha to 2 decimal places.
    #[must_use]
    pub fn to_rgba(&self) -> RgbaValue {
        RgbaValue {
            r: (self.r * 255.0).to_u8_lossy(),
            g: (self.g * 255.0).to_u8_lossy(),
            b: (self.b * 255.0).to_u8_lossy(),
            a: round_alpha(self.a),
        }
    }

    /// Hue is rounded to a whole degree and reported in `0..360`, saturation and
    /// lightness are rounded to whole percentages, alpha to 2 decimal places.
    #[must_use]
    pub fn to_hsla(&self) -> HslaValue {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        let h = round_to_integer(h * 360.0);
        HslaValue {
            h: if h >= 360.0 { 0.0 } else { h },
            s: round_to_integer(s * 100.0),
            l: round_to_integer(l * 100.0),
            a: round_alpha(self.a),
        }
    }

    /// Unrounded. Hue is in degrees `0..360`, saturation and value are fractions.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        Hsv { h: h * 360.0, s, v }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let it = self.to_rgba();
        format!("#{:02x}{:02x}{:02x}", it.r, it.g, it.b)
    }

    /// Lowercase `#rrggbbaa`.
    #[must_use]
    pub fn to_hex8_string(&self) -> String {
        let mut acc = self.to_hex_string();
        // Writing to a String can't fail.
        _ = write!(acc, "{:02x}", (self.a * 255.0).to_u8_lossy());
        acc
    }

    /// Builds the canonical value. The hex string has alpha digits only if
    /// `is_opacity_enabled`.
    ///
    /// Every field is derived from [`Self::snap_to_byte_grid`], so `rgb` and `hsl`
    /// describe exactly the color that `hex` encodes, and normalizing `hex` again
    /// produces the same value.
    #[must_use]
    pub fn to_value_object(&self, is_opacity_enabled: bool) -> ValueObject {
        let snapped = self.snap_to_byte_grid(is_opacity_enabled);
        ValueObject {
            hex: if is_opacity_enabled {
                snapped.to_hex8_string()
            } else {
                snapped.to_hex_string()
            },
            rgb: snapped.to_rgba(),
            hsl: snapped.to_hsla(),
        }
    }

    /// Moves the channels onto the `n / 255` grid that hex can represent. Alpha is only
    /// moved if `snap_alpha`, since a 6 digit hex doesn't carry it. A 2 decimal alpha
    /// survives this, the grid step is smaller than `0.01`.
    #[must_use]
    pub fn snap_to_byte_grid(&self, snap_alpha: bool) -> Self {
        let snap = |it: f64| f64::from((it * 255.0).to_u8_lossy()) / 255.0;
        Self {
            r: snap(self.r),
            g: snap(self.g),
            b: snap(self.b),
            a: if snap_alpha { snap(self.a) } else { self.a },
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = alpha;
        self
    }
}

impl FromStr for TrueColor {
    type Err = ColorParseError;

    /// Tries named colors, then CSS functions, then hex.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some((red, green, blue, alpha)) = lookup_named_color(trimmed) {
            return Ok(Self::from_u8(red, green, blue, alpha));
        }

        if trimmed.contains('(') {
            return try_parse_css_color(trimmed);
        }

        match parse_hex_color(trimmed) {
            Ok((_, it)) => Ok(Self::from_u8(
                it.red,
                it.green,
                it.blue,
                f64::from(it.alpha) / 255.0,
            )),
            Err(_) if looks_like_hex(trimmed) => Err(ColorParseError::InvalidHex {
                input: input.to_string(),
            }),
            Err(_) => Err(ColorParseError::UnknownFormat {
                input: input.to_string(),
            }),
        }
    }
}

fn try_alpha(maybe_alpha: Option<f64>) -> ColorParseResult<f64> {
    match maybe_alpha {
        Some(alpha) => ColorParseError::check_range("a", alpha, 0.0, 1.0),
        None => Ok(1.0),
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Color used when the host doesn't supply an initial value.
pub const DEFAULT_COLOR_VALUE: &str = "#000000";

/// Any accepted external color representation.
///
/// With serde this is untagged, so JSON config can say `"#ff0000"`, `"red"`,
/// `{"r": 255, "g": 0, "b": 0}` or `{"h": 0, "s": 100, "l": 50, "a": 0.5}`.
///
/// Equality is structural, which is what [`crate::PredefinedColors`] uses to collapse
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#` optional), CSS function
    /// (`rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()`) or CSS named color.
    Text(String),
    Rgb(ValueRgb),
    Hsl(ValueHsl),
}

impl Default for ColorInput {
    fn default() -> Self { Self::Text(DEFAULT_COLOR_VALUE.to_string()) }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self { Self::Text(value.to_string()) }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self { Self::Text(value) }
}

impl From<ValueRgb> for ColorInput {
    fn from(value: ValueRgb) -> Self { Self::Rgb(value) }
}

impl From<ValueHsl> for ColorInput {
    fn from(value: ValueHsl) -> Self { Self::Hsl(value) }
}

impl From<HslaValue> for ColorInput {
    fn from(value: HslaValue) -> Self { Self::Hsl(value.into()) }
}

/// RGB object input. Components are in `0..=255`, alpha (when present) in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl ValueRgb {
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self { Self { r, g, b, a: None } }

    #[must_use]
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }
}

/// HSL object input. Hue is in degrees `0..=360`. Saturation and lightness are always
/// percentages in `0..=100` (never fractions). Alpha (when present) is in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueHsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl ValueHsl {
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self { Self { h, s, l, a: None } }

    #[must_use]
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }
}

impl From<HslaValue> for ValueHsl {
    fn from(value: HslaValue) -> Self {
        Self {
            h: value.h,
            s: value.s,
            l: value.l,
            a: Some(value.a),
        }
    }
}

/// Integer valued RGB plus alpha rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Hue rounded to a whole degree in `0..360`, saturation and lightness rounded to whole
/// percentages, alpha rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslaValue {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl HslaValue {
    /// Just hue, saturation and lightness, leaving alpha out.
    #[must_use]
    pub fn without_alpha(&self) -> ValueHsl { ValueHsl::new(self.h, self.s, self.l) }
}

/// The canonical color value. This is what [`crate::normalize_color`] returns and what
/// the host's `on_change` callback receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueObject {
    /// 8 digits (`#rrggbbaa`) when opacity is enabled, 6 digits (`#rrggbb`) otherwise.
    /// Always lowercase.
    pub hex: String,
    pub rgb: RgbaValue,
    pub hsl: HslaValue,
}

impl Default for ValueObject {
    fn default() -> Self { Self::fallback(true) }
}

impl ValueObject {
    /// The value that invalid input resolves to: opaque black.
    #[must_use]
    pub fn fallback(is_opacity_enabled: bool) -> Self {
        Self {
            hex: if is_opacity_enabled {
                "#000000ff".to_string()
            } else {
                "#000000".to_string()
            },
            rgb: RgbaValue {
                r: 0,
                g: 0,
                b: 0,
                a: 1.0,
            },
            hsl: HslaValue {
                h: 0.0,
                s: 0.0,
                l: 0.0,
                a: 1.0,
            },
        }
    }
}

/// HSV triple. Hue is in degrees, saturation and value are fractions in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

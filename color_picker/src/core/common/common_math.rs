// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Rounds `value` to `decimals` places after the decimal point, half away from zero.
///
/// All of the canonical color value's components go through this exactly once, at the
/// point where they are converted out of the internal true color representation.
///
/// ```
/// use r3bl_color_picker::round_to_decimals;
/// assert_eq!(round_to_decimals(0.501_960_784, 2), 0.5);
/// assert_eq!(round_to_decimals(179.5, 0), 180.0);
/// ```
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let it = (value * factor).round() / factor;
    // Avoid leaking `-0` into formatted output.
    if it == 0.0 { 0.0 } else { it }
}

/// Rounds to the nearest whole number, half away from zero.
#[must_use]
pub fn round_to_integer(value: f64) -> f64 { round_to_decimals(value, 0) }

/// Rounds to two decimal places. This is the precision used for alpha everywhere.
#[must_use]
pub fn round_alpha(value: f64) -> f64 { round_to_decimals(value, 2) }

pub trait LossyConvertToByte {
    /// Rounds the value and clamps it into `0..=255` before converting it to a [`u8`].
    #[must_use]
    fn to_u8_lossy(self) -> u8;
}

impl LossyConvertToByte for f64 {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn to_u8_lossy(self) -> u8 {
        if self.is_nan() {
            return 0;
        }
        self.round().clamp(0.0, 255.0) as u8
    }
}

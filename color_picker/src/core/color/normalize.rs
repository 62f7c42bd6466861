// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The color normalization engine. These are total functions: invalid input never
//! propagates as an error, it is reported once to the [`DiagnosticSink`] and resolves to
//! opaque black.

use crate::{ColorInput, DiagnosticSink, TracingDiagnosticSink, TrueColor, ValueObject};

/// Converts any accepted representation into the canonical [`ValueObject`].
///
/// - `hex` is `#rrggbbaa` when `is_opacity_enabled`, `#rrggbb` otherwise.
/// - `rgb` channels are rounded to integers, alpha to 2 decimal places.
/// - `hsl` hue is a whole degree in `0..360`, saturation and lightness are whole
///   percentages, alpha is rounded to 2 decimal places.
///
/// Invalid input produces [`ValueObject::fallback`] and exactly one call to
/// [`DiagnosticSink::report_invalid_color`].
///
/// ```
/// use r3bl_color_picker::{TracingDiagnosticSink, normalize_color};
///
/// let it = normalize_color(&"#FF0000".into(), true, &TracingDiagnosticSink);
/// assert_eq!(it.hex, "#ff0000ff");
/// assert_eq!((it.rgb.r, it.rgb.g, it.rgb.b, it.rgb.a), (255, 0, 0, 1.0));
/// assert_eq!((it.hsl.h, it.hsl.s, it.hsl.l), (0.0, 100.0, 50.0));
/// ```
pub fn normalize_color(
    value: &ColorInput,
    is_opacity_enabled: bool,
    sink: &dyn DiagnosticSink,
) -> ValueObject {
    match TrueColor::try_from_color_input(value) {
        Ok(color) => color.to_value_object(is_opacity_enabled),
        Err(error) => {
            sink.report_invalid_color(value, &error);
            ValueObject::fallback(is_opacity_enabled)
        }
    }
}

/// Returns the alpha of any accepted representation, rounded to 2 decimal places. Inputs
/// with no alpha are fully opaque. Invalid input produces `1` and exactly one call to
/// [`DiagnosticSink::report_invalid_color`].
pub fn extract_alpha(value: &ColorInput, sink: &dyn DiagnosticSink) -> f64 {
    match TrueColor::try_from_color_input(value) {
        Ok(color) => color.to_rgba().a,
        Err(error) => {
            sink.report_invalid_color(value, &error);
            1.0
        }
    }
}

/// Does the work of [`normalize_color`] and [`extract_alpha`] in a single pass, so an
/// invalid input is only reported once.
pub fn normalize_color_and_alpha(
    value: &ColorInput,
    is_opacity_enabled: bool,
    sink: &dyn DiagnosticSink,
) -> (ValueObject, f64) {
    match TrueColor::try_from_color_input(value) {
        Ok(color) => (color.to_value_object(is_opacity_enabled), color.to_rgba().a),
        Err(error) => {
            sink.report_invalid_color(value, &error);
            (ValueObject::fallback(is_opacity_enabled), 1.0)
        }
    }
}

impl ValueObject {
    /// Same as [`normalize_color`], reporting to [`TracingDiagnosticSink`].
    #[must_use]
    pub fn from_value(value: &ColorInput, is_opacity_enabled: bool) -> Self {
        normalize_color(value, is_opacity_enabled, &TracingDiagnosticSink)
    }

    /// Back to a [`TrueColor`], from the integer channels.
    #[must_use]
    pub fn to_true_color(&self) -> TrueColor {
        TrueColor::from_u8(self.rgb.r, self.rgb.g, self.rgb.b, self.rgb.a)
    }
}

impl ColorInput {
    /// Same as [`extract_alpha`], reporting to [`TracingDiagnosticSink`].
    #[must_use]
    pub fn alpha(&self) -> f64 { extract_alpha(self, &TracingDiagnosticSink) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorParseError, HslaValue, RgbaValue, ValueHsl, ValueRgb, assert_eq2,
                test_fixtures::RecordingDiagnosticSink};
    use test_case::test_case;

    #[test]
    fn test_normalize_red_with_opacity() {
        let sink = RecordingDiagnosticSink::default();
        let it = normalize_color(&"#FF0000".into(), true, &sink);
        assert_eq2!(
            it,
            ValueObject {
                hex: "#ff0000ff".into(),
                rgb: RgbaValue {
                    r: 255,
                    g: 0,
                    b: 0,
                    a: 1.0,
                },
                hsl: HslaValue {
                    h: 0.0,
                    s: 100.0,
                    l: 50.0,
                    a: 1.0,
                },
            }
        );
        assert_eq2!(sink.len(), 0);
    }

    #[test]
    fn test_normalize_without_opacity_uses_six_digits() {
        let sink = RecordingDiagnosticSink::default();
        let it = normalize_color(&"rgba(0, 0, 255, 0.5)".into(), false, &sink);
        assert_eq2!(it.hex, "#0000ff");
        // Alpha is still reported in the objects.
        assert_eq2!(it.rgb.a, 0.5);
        assert_eq2!(it.hsl.a, 0.5);
    }

    #[test_case(ColorInput::from("not-a-color") ; "garbage string")]
    #[test_case(ColorInput::from("") ; "empty string")]
    #[test_case(ColorInput::from("#ff000") ; "five hex digits")]
    #[test_case(ValueRgb::new(300.0, 0.0, 0.0).into() ; "rgb out of range")]
    #[test_case(ValueHsl::new(10.0, 150.0, 50.0).into() ; "hsl out of range")]
    fn test_invalid_input_falls_back_and_reports_once(input: ColorInput) {
        let sink = RecordingDiagnosticSink::default();
        let it = normalize_color(&input, true, &sink);
        assert_eq2!(it, ValueObject::fallback(true));
        assert_eq2!(sink.len(), 1);
        assert_eq2!(sink.inputs(), vec![input]);
    }

    #[test]
    fn test_fallback_without_opacity() {
        let sink = RecordingDiagnosticSink::default();
        let it = normalize_color(&"nope".into(), false, &sink);
        assert_eq2!(it.hex, "#000000");
        assert_eq2!(it.rgb.a, 1.0);
        assert_eq2!(
            sink.errors(),
            vec![ColorParseError::UnknownFormat {
                input: "nope".into(),
            }]
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let sink = RecordingDiagnosticSink::default();
        for input in ["#12345678", "hsl(300, 20%, 70%)", "teal", "#abc"] {
            let once = normalize_color(&input.into(), true, &sink);
            let twice = normalize_color(&once.hex.clone().into(), true, &sink);
            assert_eq2!(once, twice);
        }
        assert_eq2!(sink.len(), 0);
    }

    #[test]
    fn test_normalize_is_idempotent_for_alpha_grid() {
        let sink = RecordingDiagnosticSink::default();
        for thousandths in 0..=1000_u32 {
            let alpha = f64::from(thousandths) / 1000.0;
            let input: ColorInput = ValueRgb::new(10.0, 20.0, 30.0).with_alpha(alpha).into();
            let once = normalize_color(&input, true, &sink);
            let twice = normalize_color(&once.hex.clone().into(), true, &sink);
            assert_eq2!(once, twice, "alpha {alpha}");
        }
        assert_eq2!(sink.len(), 0);
    }

    #[test]
    fn test_rgba_alpha_agrees_with_hex_byte() {
        let sink = RecordingDiagnosticSink::default();
        let once = normalize_color(&"rgba(0, 0, 0, 0.005)".into(), true, &sink);
        let twice = normalize_color(&once.hex.clone().into(), true, &sink);
        assert_eq2!(once.rgb.a, 0.0);
        assert_eq2!(twice.rgb.a, 0.0);
    }

    #[test_case(ColorInput::from("#ff000080"), 0.5)]
    #[test_case(ColorInput::from("#ff0000"), 1.0)]
    #[test_case(ColorInput::from("hsla(0, 0%, 0%, 0.256)"), 0.26)]
    #[test_case(ValueRgb::new(0.0, 0.0, 0.0).with_alpha(0.3).into(), 0.3)]
    #[test_case(ColorInput::from("garbage"), 1.0)]
    fn test_extract_alpha(input: ColorInput, expected: f64) {
        let sink = RecordingDiagnosticSink::default();
        assert_eq2!(extract_alpha(&input, &sink), expected);
    }

    #[test]
    fn test_convenience_entry_points() {
        let input = ColorInput::from("#00000080");
        assert_eq2!(input.alpha(), 0.5);
        assert_eq2!(ValueObject::from_value(&input, false).hex, "#000000");
    }

    #[test]
    fn test_normalize_color_and_alpha_reports_once() {
        let sink = RecordingDiagnosticSink::default();

        let (value, alpha) = normalize_color_and_alpha(&"#00ff0033".into(), false, &sink);
        assert_eq2!(value.hex, "#00ff00");
        assert_eq2!(alpha, 0.2);
        assert_eq2!(sink.len(), 0);

        let (value, alpha) = normalize_color_and_alpha(&"nope".into(), true, &sink);
        assert_eq2!(value, ValueObject::fallback(true));
        assert_eq2!(alpha, 1.0);
        assert_eq2!(sink.len(), 1);
    }

    #[test]
    fn test_extract_alpha_reports_invalid_input() {
        let sink = RecordingDiagnosticSink::default();
        extract_alpha(&"garbage".into(), &sink);
        assert_eq2!(sink.len(), 1);
    }
}

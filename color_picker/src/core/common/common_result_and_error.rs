// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the crate. See [`ColorParseError`] and [`ColorPickerConfigError`] for
//! details.
//!
//! Note that none of these ever cross the widget boundary as a fault. The widget
//! operations degrade to documented fallbacks, and the errors are only used to produce
//! diagnostics (see [`crate::DiagnosticSink`]) or returned from explicitly fallible APIs
//! like [`crate::ColorPickerOptions::try_from_json`].

/// Type alias to make it easy to work with [`Result`]s that carry a
/// [`ColorParseError`].
pub type ColorParseResult<T> = Result<T, ColorParseError>;

/// Why a [`crate::ColorInput`] could not be turned into a color.
///
/// | Variant                  | Cause                                                   |
/// | :----------------------- | :------------------------------------------------------ |
/// | [`Empty`]                | Empty or whitespace only string                         |
/// | [`InvalidHex`]           | Hex digits present but not 3, 4, 6 or 8 of them         |
/// | [`InvalidCssFunction`]   | `rgb(..)`, `hsl(..)`, etc. with malformed arguments     |
/// | [`UnknownFormat`]        | Not hex, not a CSS function, not a named color          |
/// | [`ComponentOutOfRange`]  | A numeric component outside of its domain               |
///
/// [`Empty`]: Self::Empty
/// [`InvalidHex`]: Self::InvalidHex
/// [`InvalidCssFunction`]: Self::InvalidCssFunction
/// [`UnknownFormat`]: Self::UnknownFormat
/// [`ComponentOutOfRange`]: Self::ComponentOutOfRange
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorParseError {
    #[error("🎨 Empty color string")]
    #[diagnostic(
        code(r3bl_color_picker::color::empty),
        help("Provide a hex string like `#ff0000`, a CSS function, or a named color")
    )]
    Empty,

    #[error("🎨 Invalid hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_color_picker::color::invalid_hex),
        help("Valid formats are `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`")
    )]
    InvalidHex { input: String },

    #[error("🎨 Invalid CSS color function: '{input}'")]
    #[diagnostic(
        code(r3bl_color_picker::color::invalid_css_function),
        help("Examples: `rgb(255, 0, 0)`, `rgba(255 0 0 / 0.5)`, `hsl(120, 50%, 50%)`")
    )]
    InvalidCssFunction { input: String },

    #[error("🎨 Unknown color format: '{input}'")]
    #[diagnostic(code(r3bl_color_picker::color::unknown_format))]
    UnknownFormat { input: String },

    #[error("🎨 Color component '{component}' is {value}, expected {min}..={max}")]
    #[diagnostic(code(r3bl_color_picker::color::component_out_of_range))]
    ComponentOutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ColorParseError {
    /// Returns an error if `value` is not a finite number in `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::ComponentOutOfRange`] when the check fails.
    pub fn check_range(
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> ColorParseResult<f64> {
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(ColorParseError::ComponentOutOfRange {
                component,
                value,
                min,
                max,
            })
        }
    }
}

/// Errors from loading [`crate::ColorPickerOptions`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ColorPickerConfigError {
    #[error("📑 Could not read color picker config file: '{path}'")]
    #[diagnostic(code(r3bl_color_picker::config::read_file))]
    ReadFile { path: String },

    #[error("📑 Could not parse color picker config JSON")]
    #[diagnostic(
        code(r3bl_color_picker::config::parse_json),
        help(
            "Keys are camelCase: `value`, `hideOpacityPicker`, `debounceTime`, \
             `predefinedColors`, `classNames`"
        )
    )]
    ParseJson,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_check_range() {
        assert_eq2!(ColorParseError::check_range("r", 255.0, 0.0, 255.0), Ok(255.0));
        assert_eq2!(
            ColorParseError::check_range("r", 999.0, 0.0, 255.0),
            Err(ColorParseError::ComponentOutOfRange {
                component: "r",
                value: 999.0,
                min: 0.0,
                max: 255.0,
            })
        );
        assert!(ColorParseError::check_range("a", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_display() {
        let it = ColorParseError::InvalidHex {
            input: "#ff000".into(),
        };
        assert_eq2!(it.to_string(), "🎨 Invalid hex color: '#ff000'");
    }
}

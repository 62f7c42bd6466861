// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Formatting of the value shown in the color display control, in one of the
//! [`ColorScheme`]s.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::ValueObject;

/// Display format for the value shown in the color display control.
///
/// Parsing accepts the opacity-less aliases too:
///
/// ```
/// use r3bl_color_picker::ColorScheme;
///
/// assert_eq!("rgb".parse::<ColorScheme>().unwrap(), ColorScheme::Rgba);
/// assert_eq!("HSLA".parse::<ColorScheme>().unwrap(), ColorScheme::Hsla);
/// assert_eq!(ColorScheme::Hex.to_string(), "hex");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[strum(to_string = "rgba", serialize = "rgb")]
    Rgba,
    #[default]
    #[strum(to_string = "hex")]
    Hex,
    #[strum(to_string = "hsla", serialize = "hsl")]
    Hsla,
}

/// A row in [`COLOR_SCHEMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSchemeEntry {
    pub key: ColorScheme,
    pub title: &'static str,
    pub title_without_opacity: &'static str,
}

/// The footer selector's options, in display order.
pub const COLOR_SCHEMES: [ColorSchemeEntry; 3] = [
    ColorSchemeEntry {
        key: ColorScheme::Rgba,
        title: "RGBA",
        title_without_opacity: "RGB",
    },
    ColorSchemeEntry {
        key: ColorScheme::Hex,
        title: "HEX",
        title_without_opacity: "HEX",
    },
    ColorSchemeEntry {
        key: ColorScheme::Hsla,
        title: "HSLA",
        title_without_opacity: "HSL",
    },
];

impl ColorScheme {
    #[must_use]
    pub fn entry(self) -> ColorSchemeEntry {
        match self {
            ColorScheme::Rgba => COLOR_SCHEMES[0],
            ColorScheme::Hex => COLOR_SCHEMES[1],
            ColorScheme::Hsla => COLOR_SCHEMES[2],
        }
    }

    /// The footer label. Opacity suffixes are dropped when opacity is disabled.
    #[must_use]
    pub fn title(self, is_opacity_enabled: bool) -> &'static str {
        let entry = self.entry();
        if is_opacity_enabled {
            entry.title
        } else {
            entry.title_without_opacity
        }
    }

    /// The next scheme in footer order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ColorScheme::Rgba => ColorScheme::Hex,
            ColorScheme::Hex => ColorScheme::Hsla,
            ColorScheme::Hsla => ColorScheme::Rgba,
        }
    }
}

/// Formats the display control text. `alpha` is the live opacity, which overrides the
/// alpha stored in `value`.
///
/// | Scheme   | Opacity enabled          | Opacity disabled     |
/// | :------- | :----------------------- | :------------------- |
/// | `hex`    | `#rrggbbaa`              | `#rrggbb`            |
/// | `rgba`   | `rgba(r, g, b, a)`       | `rgb(r, g, b)`       |
/// | `hsla`   | `hsla(h, s%, l%, a)`     | `hsl(h, s%, l%)`     |
#[must_use]
pub fn format_display_value(
    value: &ValueObject,
    alpha: f64,
    scheme: ColorScheme,
    is_opacity_enabled: bool,
) -> String {
    match scheme {
        ColorScheme::Hex => {
            let color = value.to_true_color().with_alpha(alpha);
            if is_opacity_enabled {
                color.to_hex8_string()
            } else {
                color.to_hex_string()
            }
        }
        ColorScheme::Rgba => {
            let rgb = &value.rgb;
            if is_opacity_enabled {
                format!("rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b)
            } else {
                format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
            }
        }
        ColorScheme::Hsla => {
            let hsl = &value.hsl;
            if is_opacity_enabled {
                format!("hsla({}, {}%, {}%, {alpha})", hsl.h, hsl.s, hsl.l)
            } else {
                format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
            }
        }
    }
}

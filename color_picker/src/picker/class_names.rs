// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-subcomponent style hooks. These are opaque to the picker, they are carried from
//! [`crate::ColorPickerOptions`] into the render models so the host can apply them.
//! Every field is optional, and JSON keys are camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassNames {
    pub root: Option<String>,
    pub saturation_container: SaturationContainerClassNames,
    /// The hue strip.
    pub color_container: StripClassNames,
    pub opacity_container: StripClassNames,
    pub predefined_colors_container: PredefinedColorsClassNames,
    pub footer: FooterClassNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaturationContainerClassNames {
    pub root: Option<String>,
    pub pointer: Option<String>,
    pub color_display: ColorDisplayClassNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorDisplayClassNames {
    pub root: Option<String>,
    pub icon: Option<String>,
    pub text: Option<String>,
}

/// Used by both the hue and the opacity strips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StripClassNames {
    pub root: Option<String>,
    pub pointer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredefinedColorsClassNames {
    pub root: Option<String>,
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterClassNames {
    pub root: Option<String>,
    pub color_scheme_picker: ColorSchemePickerClassNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSchemePickerClassNames {
    pub root: Option<String>,
    pub item: Option<String>,
    pub active_item: Option<String>,
    pub separator: Option<String>,
}

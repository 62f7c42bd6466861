// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::Path, time::Duration};

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{ClassNames, ColorInput, ColorPickerConfigError};

/// How long the picker waits after the last change before notifying the host.
pub const DEFAULT_DEBOUNCE_TIME: Duration = Duration::from_millis(100);

/// Construction parameters for [`crate::ColorPicker`]. Every field is optional. The
/// callbacks are not part of this struct since they can't be loaded from JSON, they are
/// passed to [`crate::ColorPickerBuilder`] instead.
///
/// JSON keys are camelCase:
///
/// ```
/// use r3bl_color_picker::ColorPickerOptions;
///
/// let options = ColorPickerOptions::try_from_json(
///     r##"{"value": "#ff0000", "hideOpacityPicker": true, "debounceTime": 250}"##,
/// )
/// .unwrap();
/// assert!(options.hide_opacity_picker);
/// assert_eq!(options.debounce_time().as_millis(), 250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPickerOptions {
    /// Initial color. Opaque black when absent.
    pub value: Option<ColorInput>,
    /// Suppresses the opacity strip, and forces alpha-less formatting everywhere.
    pub hide_opacity_picker: bool,
    /// Milliseconds.
    #[serde(rename = "debounceTime")]
    pub debounce_time_ms: u64,
    pub predefined_colors: Vec<ColorInput>,
    pub class_names: ClassNames,
}

impl Default for ColorPickerOptions {
    fn default() -> Self {
        Self {
            value: None,
            hide_opacity_picker: false,
            debounce_time_ms: 100,
            predefined_colors: vec![],
            class_names: ClassNames::default(),
        }
    }
}

impl ColorPickerOptions {
    #[must_use]
    pub fn debounce_time(&self) -> Duration { Duration::from_millis(self.debounce_time_ms) }

    #[must_use]
    pub fn is_opacity_enabled(&self) -> bool { !self.hide_opacity_picker }

    /// The initial value, or [`ColorInput::default`] (opaque black) when absent.
    #[must_use]
    pub fn value_or_default(&self) -> ColorInput { self.value.clone().unwrap_or_default() }

    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn try_from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(ColorPickerConfigError::ParseJson)
    }

    /// # Errors
    ///
    /// Returns an error if the file can't be read, or see [`Self::try_from_json`].
    #[tracing::instrument]
    pub fn try_from_json_file(path: &Path) -> miette::Result<Self> {
        let json = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err(ColorPickerConfigError::ReadFile {
                path: path.display().to_string(),
            })?;

        let options = Self::try_from_json(&json)?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📑 Loaded color picker options",
            path = %path.display(),
            options = ?options
        );

        Ok(options)
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorInput, DiagnosticSink, PredefinedColorsClassNames, ValueHsl, ValueObject,
            normalize_color};

/// One swatch. Swatches are always normalized with opacity on, regardless of the
/// picker's own setting, so `hex` always has 8 digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub input: ColorInput,
    pub value: ValueObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedColorsView {
    /// Filled circles, in order. Each is drawn with its `value.hex` as the fill.
    pub swatches: Vec<Swatch>,
    pub class_names: PredefinedColorsClassNames,
}

/// The preset swatch row. Duplicates (by structural equality) are collapsed, keeping the
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredefinedColors {
    swatches: Vec<Swatch>,
}

impl PredefinedColors {
    #[must_use]
    pub fn new(colors: &[ColorInput], sink: &dyn DiagnosticSink) -> Self {
        let mut unique: Vec<&ColorInput> = vec![];
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        let swatches = unique
            .into_iter()
            .map(|input| Swatch {
                input: input.clone(),
                value: normalize_color(input, true, sink),
            })
            .collect();

        Self { swatches }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.swatches.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.swatches.is_empty() }

    #[must_use]
    pub fn swatches(&self) -> &[Swatch] { &self.swatches }

    /// Only hue, saturation and lightness are taken from the swatch, never alpha.
    #[must_use]
    pub fn handle_click(&self, index: usize) -> Option<ValueHsl> {
        self.swatches
            .get(index)
            .map(|swatch| swatch.value.hsl.without_alpha())
    }

    /// Nothing at all is rendered when there are no swatches.
    #[must_use]
    pub fn render(&self, class_names: &PredefinedColorsClassNames) -> Option<PredefinedColorsView> {
        if self.is_empty() {
            return None;
        }
        Some(PredefinedColorsView {
            swatches: self.swatches.clone(),
            class_names: class_names.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValueRgb, assert_eq2, test_fixtures::RecordingDiagnosticSink};

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let sink = RecordingDiagnosticSink::default();
        let it = PredefinedColors::new(
            &["#fff".into(), "#fff".into(), "#000".into()],
            &sink,
        );
        let hexes: Vec<_> = it.swatches().iter().map(|it| it.value.hex.as_str()).collect();
        assert_eq2!(hexes, vec!["#ffffffff", "#000000ff"]);
    }

    #[test]
    fn test_dedup_is_structural_not_by_color() {
        let sink = RecordingDiagnosticSink::default();
        let it = PredefinedColors::new(
            &[
                ValueRgb::new(255.0, 0.0, 0.0).into(),
                "#ff0000".into(),
                ValueRgb::new(255.0, 0.0, 0.0).into(),
            ],
            &sink,
        );
        assert_eq2!(it.len(), 2);
    }

    #[test]
    fn test_click_carries_only_hsl() {
        let sink = RecordingDiagnosticSink::default();
        let it = PredefinedColors::new(&["#00ff0080".into()], &sink);
        assert_eq2!(it.handle_click(0), Some(ValueHsl::new(120.0, 100.0, 50.0)));
        assert_eq2!(it.handle_click(1), None);
    }

    #[test]
    fn test_empty_renders_nothing() {
        let sink = RecordingDiagnosticSink::default();
        let it = PredefinedColors::new(&[], &sink);
        assert_eq2!(it.render(&PredefinedColorsClassNames::default()), None);
    }

    #[test]
    fn test_invalid_swatch_falls_back_to_black() {
        let sink = RecordingDiagnosticSink::default();
        let it = PredefinedColors::new(&["bogus".into()], &sink);
        assert_eq2!(it.swatches()[0].value, ValueObject::fallback(true));
        assert_eq2!(sink.len(), 1);
    }
}

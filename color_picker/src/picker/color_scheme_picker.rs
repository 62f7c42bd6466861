// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{COLOR_SCHEMES, ColorScheme, FooterClassNames};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSchemeItemView {
    pub key: ColorScheme,
    pub title: &'static str,
    pub is_active: bool,
    /// A `/` is drawn after every item but the last.
    pub has_separator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSchemePickerView {
    pub items: Vec<ColorSchemeItemView>,
    pub class_names: FooterClassNames,
}

/// The footer: selects which [`ColorScheme`] the color display control uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSchemePicker {
    selected: ColorScheme,
}

impl ColorSchemePicker {
    #[must_use]
    pub fn selected(&self) -> ColorScheme { self.selected }

    pub fn select(&mut self, scheme: ColorScheme) { self.selected = scheme; }

    /// Moves to the next scheme in footer order, wrapping around.
    pub fn cycle(&mut self) -> ColorScheme {
        self.selected = self.selected.next();
        self.selected
    }

    #[must_use]
    pub fn render(
        &self,
        is_opacity_enabled: bool,
        class_names: &FooterClassNames,
    ) -> ColorSchemePickerView {
        let last_index = COLOR_SCHEMES.len() - 1;
        let items = COLOR_SCHEMES
            .iter()
            .enumerate()
            .map(|(index, entry)| ColorSchemeItemView {
                key: entry.key,
                title: entry.key.title(is_opacity_enabled),
                is_active: entry.key == self.selected,
                has_separator: index < last_index,
            })
            .collect();
        ColorSchemePickerView {
            items,
            class_names: class_names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_select_and_cycle() {
        let mut it = ColorSchemePicker::default();
        assert_eq2!(it.selected(), ColorScheme::Hex);
        assert_eq2!(it.cycle(), ColorScheme::Hsla);
        assert_eq2!(it.cycle(), ColorScheme::Rgba);
        it.select(ColorScheme::Hex);
        assert_eq2!(it.selected(), ColorScheme::Hex);
    }

    #[test]
    fn test_render_without_opacity() {
        let it = ColorSchemePicker::default();
        let view = it.render(false, &FooterClassNames::default());
        let titles: Vec<_> = view.items.iter().map(|it| it.title).collect();
        assert_eq2!(titles, vec!["RGB", "HEX", "HSL"]);
        let active: Vec<_> = view.items.iter().map(|it| it.is_active).collect();
        assert_eq2!(active, vec![false, true, false]);
        let separators: Vec<_> = view.items.iter().map(|it| it.has_separator).collect();
        assert_eq2!(separators, vec![true, true, false]);
    }
}

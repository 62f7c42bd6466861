// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{rc::Rc,
          time::{Duration, Instant}};

use crate::{ChangeOrigin, ClassNames, ClipboardService, Clock, ColorInput,
            ColorPickerBuilder, ColorPickerOptions, ColorScheme, ColorSchemePicker,
            ColorSchemePickerView, Debouncer, DiagnosticSink, EventPropagation, HueController,
            HueView, OnChangeFn, OnColorDisplayClickFn, OpacityController, OpacityView,
            PickerEvent, PickerSurface, PointerCaptureHost, PointerInput, PointerInputKind,
            PredefinedColors, PredefinedColorsView, SaturationController, SaturationView,
            SurfaceGeometry, ValueHsl, ValueObject, copy_to_clipboard, format_display_value,
            normalize_color, normalize_color_and_alpha, round_alpha};

/// Everything the host needs to draw one frame, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPickerView {
    pub class_name: Option<String>,
    pub saturation: SaturationView,
    pub hue: HueView,
    /// Absent when the opacity picker is hidden.
    pub maybe_opacity: Option<OpacityView>,
    /// Absent when there are no preset colors.
    pub maybe_predefined_colors: Option<PredefinedColorsView>,
    pub footer: ColorSchemePickerView,
}

/// The headless color picker. It is the single source of truth for the color, and owns
/// the three surface controllers, the preset row, and the footer.
///
/// There are two pieces of state the host cares about:
/// 1. The canonical color, see [`Self::color`]. Saturation, hue and preset changes all
///    replace it by normalizing the incoming HSL.
/// 2. The alpha scalar, see [`Self::alpha`]. Only the opacity strip changes it.
///
/// Every change to either one schedules the merged value, see [`Self::current_value`],
/// on a trailing debouncer. The host drives delivery by calling [`Self::poll_change`]
/// (on a timer, or when [`Self::next_change_deadline`] is reached), which invokes the
/// `on_change` callback once the value settles.
///
/// The picker also tracks a live hue, which is not part of the canonical color. For
/// achromatic colors (grays, black, white) HSL has no meaningful hue, and without this
/// the hue would snap back to `0` whenever the saturation plane touches an edge.
pub struct ColorPicker {
    options: ColorPickerOptions,
    color: ValueObject,
    alpha: f64,
    hue: f64,
    footer: ColorSchemePicker,
    saturation: SaturationController,
    hue_strip: HueController,
    maybe_opacity: Option<OpacityController>,
    predefined_colors: PredefinedColors,
    debouncer: Debouncer<ValueObject>,
    clock: Box<dyn Clock>,
    clipboard: Box<dyn ClipboardService>,
    diagnostic_sink: Box<dyn DiagnosticSink>,
    capture_host: Rc<dyn PointerCaptureHost>,
    maybe_on_change: Option<OnChangeFn>,
    maybe_on_color_display_click: Option<OnColorDisplayClickFn>,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &self.color)
            .field("alpha", &self.alpha)
            .field("hue", &self.hue)
            .field("display_scheme", &self.footer.selected())
            .field("saturation", &self.saturation)
            .field("hue_strip", &self.hue_strip)
            .field("maybe_opacity", &self.maybe_opacity)
            .field("predefined_colors", &self.predefined_colors)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

impl ColorPicker {
    #[must_use]
    pub fn builder(options: ColorPickerOptions) -> ColorPickerBuilder {
        ColorPickerBuilder::new(options)
    }

    /// Same as `Self::builder(options).build()`, with every collaborator defaulted.
    #[must_use]
    pub fn new(options: ColorPickerOptions) -> Self { Self::builder(options).build() }

    pub(crate) fn from_builder(builder: ColorPickerBuilder) -> Self {
        let ColorPickerBuilder {
            options,
            clock,
            clipboard,
            diagnostic_sink,
            capture_host,
            maybe_on_change,
            maybe_on_color_display_click,
        } = builder;

        let is_opacity_enabled = options.is_opacity_enabled();
        let (color, alpha) = normalize_color_and_alpha(
            &options.value_or_default(),
            is_opacity_enabled,
            diagnostic_sink.as_ref(),
        );
        let hue = color.hsl.h;

        let maybe_opacity = is_opacity_enabled
            .then(|| OpacityController::new(alpha, hue, capture_host.clone()));
        let predefined_colors =
            PredefinedColors::new(&options.predefined_colors, diagnostic_sink.as_ref());

        let mut it = Self {
            saturation: SaturationController::new(&color, hue, capture_host.clone()),
            hue_strip: HueController::new(&color, hue, capture_host.clone()),
            maybe_opacity,
            predefined_colors,
            debouncer: Debouncer::new(options.debounce_time()),
            footer: ColorSchemePicker::default(),
            options,
            color,
            alpha,
            hue,
            clock,
            clipboard,
            diagnostic_sink,
            capture_host,
            maybe_on_change,
            maybe_on_color_display_click,
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎨 Color picker created",
            hex = %it.color.hex,
            alpha = %it.alpha,
            is_opacity_enabled = %is_opacity_enabled,
            predefined_colors = %it.predefined_colors.len(),
        );

        it.schedule_change();
        it
    }
}

// Accessors.
impl ColorPicker {
    /// The canonical color. Its alpha is the one it was last normalized with, see
    /// [`Self::alpha`] for the live one.
    #[must_use]
    pub fn color(&self) -> &ValueObject { &self.color }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    /// The live hue in degrees, which survives achromatic colors.
    #[must_use]
    pub fn hue(&self) -> f64 { self.hue }

    /// The canonical color merged with the live alpha. This is what `on_change`
    /// receives.
    #[must_use]
    pub fn current_value(&self) -> ValueObject {
        let merged: ColorInput = self.color.hsl.without_alpha().with_alpha(self.alpha).into();
        normalize_color(
            &merged,
            self.is_opacity_enabled(),
            self.diagnostic_sink.as_ref(),
        )
    }

    #[must_use]
    pub fn is_opacity_enabled(&self) -> bool { self.options.is_opacity_enabled() }

    #[must_use]
    pub fn display_scheme(&self) -> ColorScheme { self.footer.selected() }

    /// The text of the color display control, which is also what gets copied.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_display_value(
            &self.color,
            self.alpha,
            self.footer.selected(),
            self.is_opacity_enabled(),
        )
    }

    #[must_use]
    pub fn options(&self) -> &ColorPickerOptions { &self.options }

    #[must_use]
    pub fn class_names(&self) -> &ClassNames { &self.options.class_names }

    #[must_use]
    pub fn saturation_controller(&self) -> &SaturationController { &self.saturation }

    #[must_use]
    pub fn hue_controller(&self) -> &HueController { &self.hue_strip }

    #[must_use]
    pub fn maybe_opacity_controller(&self) -> Option<&OpacityController> {
        self.maybe_opacity.as_ref()
    }

    #[must_use]
    pub fn predefined_colors(&self) -> &PredefinedColors { &self.predefined_colors }

    /// True while any surface is tracking a press.
    #[must_use]
    pub fn is_tracking_pointer(&self) -> bool {
        self.saturation.is_dragging()
            || self.saturation.is_display_pressed()
            || self.hue_strip.is_dragging()
            || self
                .maybe_opacity
                .as_ref()
                .is_some_and(OpacityController::is_dragging)
    }

    #[must_use]
    pub fn render(&self) -> ColorPickerView {
        let class_names = &self.options.class_names;
        ColorPickerView {
            class_name: class_names.root.clone(),
            saturation: self
                .saturation
                .render(self.display_value(), &class_names.saturation_container),
            hue: self.hue_strip.render(&class_names.color_container),
            maybe_opacity: self
                .maybe_opacity
                .as_ref()
                .map(|it| it.render(self.alpha, &class_names.opacity_container)),
            maybe_predefined_colors: self
                .predefined_colors
                .render(&class_names.predefined_colors_container),
            footer: self
                .footer
                .render(self.is_opacity_enabled(), &class_names.footer),
        }
    }
}

// Input handling.
impl ColorPicker {
    /// Presses are routed to the surface under the pointer. Moves and releases go to
    /// every controller, since a drag keeps tracking the pointer after it leaves the
    /// surface it started on.
    pub fn handle_pointer_input(
        &mut self,
        input: PointerInput,
        geometry: &dyn SurfaceGeometry,
    ) -> EventPropagation {
        let was_tracking = self.is_tracking_pointer();

        let events: Vec<(ChangeOrigin, PickerEvent)> = match input.kind {
            PointerInputKind::Down(_) => {
                let Some(surface) = self.surface_under(input, geometry) else {
                    return EventPropagation::Propagate;
                };
                let maybe_event = match surface {
                    PickerSurface::Saturation | PickerSurface::ColorDisplay => self
                        .saturation
                        .handle_pointer_input(input, geometry)
                        .map(|it| (ChangeOrigin::SaturationPlane, it)),
                    PickerSurface::Hue => self
                        .hue_strip
                        .handle_pointer_input(input, geometry)
                        .map(|it| (ChangeOrigin::HueStrip, it)),
                    PickerSurface::Opacity => self
                        .maybe_opacity
                        .as_mut()
                        .and_then(|it| it.handle_pointer_input(input, geometry))
                        .map(|it| (ChangeOrigin::OpacityStrip, it)),
                };
                maybe_event.into_iter().collect()
            }
            PointerInputKind::Move | PointerInputKind::Drag(_) | PointerInputKind::Up(_) => {
                let mut acc = vec![];
                if let Some(event) = self.saturation.handle_pointer_input(input, geometry) {
                    acc.push((ChangeOrigin::SaturationPlane, event));
                }
                if let Some(event) = self.hue_strip.handle_pointer_input(input, geometry) {
                    acc.push((ChangeOrigin::HueStrip, event));
                }
                if let Some(event) = self
                    .maybe_opacity
                    .as_mut()
                    .and_then(|it| it.handle_pointer_input(input, geometry))
                {
                    acc.push((ChangeOrigin::OpacityStrip, event));
                }
                acc
            }
            PointerInputKind::Other => return EventPropagation::Propagate,
        };

        if !events.is_empty() {
            for (origin, event) in events {
                self.apply_event(origin, event);
            }
            return EventPropagation::ConsumedRender;
        }

        if was_tracking || self.is_tracking_pointer() {
            EventPropagation::Consumed
        } else {
            EventPropagation::Propagate
        }
    }

    /// Replaces the canonical color, as if it came from outside the surfaces. Alpha in
    /// `hsl` is ignored, use [`Self::handle_alpha_change`] for that.
    pub fn handle_color_change(&mut self, hsl: ValueHsl) {
        self.apply_color_change(ValueHsl::new(hsl.h, hsl.s, hsl.l), ChangeOrigin::External);
    }

    /// Replaces the alpha scalar. The value is clamped into `0..=1` and rounded to 2
    /// decimal places.
    pub fn handle_alpha_change(&mut self, alpha: f64) {
        self.apply_alpha_change(alpha, ChangeOrigin::External);
    }

    /// Takes hue, saturation and lightness from the swatch at `index`. The live alpha
    /// is kept.
    pub fn handle_predefined_color_click(&mut self, index: usize) -> EventPropagation {
        match self.predefined_colors.handle_click(index) {
            Some(hsl) => {
                tracing::debug!(message = "Predefined color clicked", index = %index);
                self.apply_color_change(hsl, ChangeOrigin::External);
                EventPropagation::ConsumedRender
            }
            None => EventPropagation::Propagate,
        }
    }

    pub fn select_display_scheme(&mut self, scheme: ColorScheme) {
        self.footer.select(scheme);
    }

    /// Moves the footer to the next scheme, wrapping around.
    pub fn cycle_display_scheme(&mut self) -> ColorScheme { self.footer.cycle() }

    /// Copies the display value to the clipboard. On success, reports `input` to the
    /// `on_color_display_click` callback. Failures are logged and swallowed.
    pub fn handle_color_display_click(&mut self, input: PointerInput) -> bool {
        let display_value = self.display_value();
        if !copy_to_clipboard(self.clipboard.as_mut(), &display_value) {
            return false;
        }
        tracing::debug!(message = "📋 Copied color to clipboard", value = %display_value);
        if let Some(on_click) = self.maybe_on_color_display_click.as_mut() {
            on_click(&input);
        }
        true
    }

    fn surface_under(
        &self,
        input: PointerInput,
        geometry: &dyn SurfaceGeometry,
    ) -> Option<PickerSurface> {
        // The color display sits on top of the saturation plane, so it is tested first.
        let mut surfaces = vec![
            PickerSurface::ColorDisplay,
            PickerSurface::Saturation,
            PickerSurface::Hue,
        ];
        if self.maybe_opacity.is_some() {
            surfaces.push(PickerSurface::Opacity);
        }
        surfaces
            .into_iter()
            .find(|surface| geometry.hit_test(*surface, input.pos))
    }

    fn apply_event(&mut self, origin: ChangeOrigin, event: PickerEvent) {
        match event {
            PickerEvent::HslChange(hsl) => self.apply_color_change(hsl, origin),
            PickerEvent::AlphaChange(alpha) => self.apply_alpha_change(alpha, origin),
            PickerEvent::ColorDisplayClick(input) => {
                self.handle_color_display_click(input);
            }
        }
    }

    fn apply_color_change(&mut self, hsl: ValueHsl, origin: ChangeOrigin) {
        self.color = normalize_color(
            &hsl.into(),
            self.is_opacity_enabled(),
            self.diagnostic_sink.as_ref(),
        );
        self.hue = match origin {
            ChangeOrigin::SaturationPlane => self.hue,
            ChangeOrigin::HueStrip => hsl.h,
            ChangeOrigin::External | ChangeOrigin::OpacityStrip => self.color.hsl.h,
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Color changed",
            origin = ?origin,
            hex = %self.color.hex,
            hue = %self.hue,
        );

        self.sync_controllers(origin);
        self.schedule_change();
    }

    fn apply_alpha_change(&mut self, alpha: f64, origin: ChangeOrigin) {
        self.alpha = round_alpha(alpha.clamp(0.0, 1.0));

        // % is Display, ? is Debug.
        tracing::debug!(message = "Alpha changed", origin = ?origin, alpha = %self.alpha);

        self.sync_controllers(origin);
        self.schedule_change();
    }

    fn sync_controllers(&mut self, origin: ChangeOrigin) {
        self.saturation.sync_from_value(&self.color, self.hue, origin);
        self.hue_strip.sync_from_value(&self.color, self.hue, origin);
        if let Some(opacity) = self.maybe_opacity.as_mut() {
            opacity.sync_from_value(self.alpha, self.hue, origin);
        }
    }
}

// Runtime option changes.
impl ColorPicker {
    /// Replaces the color and the alpha from an external value. Invalid input is reported
    /// once and resolves to opaque black.
    pub fn set_value(&mut self, value: impl Into<ColorInput>) {
        let value = value.into();
        let (color, alpha) = normalize_color_and_alpha(
            &value,
            self.is_opacity_enabled(),
            self.diagnostic_sink.as_ref(),
        );
        self.color = color;
        self.alpha = alpha;
        self.hue = self.color.hsl.h;
        self.options.value = Some(value);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Value set",
            hex = %self.color.hex,
            alpha = %self.alpha,
        );

        self.sync_controllers(ChangeOrigin::External);
        self.schedule_change();
    }

    /// Mounts or unmounts the opacity strip. Unmounting releases any pointer capture it
    /// holds. The canonical color is re-formatted for the new setting.
    pub fn set_hide_opacity_picker(&mut self, hide_opacity_picker: bool) {
        if self.options.hide_opacity_picker == hide_opacity_picker {
            return;
        }
        self.options.hide_opacity_picker = hide_opacity_picker;

        let is_opacity_enabled = self.is_opacity_enabled();
        self.maybe_opacity = is_opacity_enabled
            .then(|| OpacityController::new(self.alpha, self.hue, self.capture_host.clone()));
        self.color = self.color.to_true_color().to_value_object(is_opacity_enabled);

        tracing::debug!(
            message = "Opacity picker toggled",
            is_opacity_enabled = %is_opacity_enabled
        );

        self.schedule_change();
    }

    pub fn set_predefined_colors(&mut self, colors: Vec<ColorInput>) {
        self.predefined_colors = PredefinedColors::new(&colors, self.diagnostic_sink.as_ref());
        self.options.predefined_colors = colors;
    }

    /// Re-creates the debouncer, so a pending change on the old one is dropped. The
    /// current value is then scheduled on the new one.
    pub fn set_debounce_time(&mut self, debounce_time: Duration) {
        self.options.debounce_time_ms =
            u64::try_from(debounce_time.as_millis()).unwrap_or(u64::MAX);
        self.reset_debouncer();
    }

    /// Same debouncer reset as [`Self::set_debounce_time`].
    pub fn set_on_change(&mut self, on_change: impl FnMut(&ValueObject) + 'static) {
        self.maybe_on_change = Some(Box::new(on_change));
        self.reset_debouncer();
    }

    pub fn set_on_color_display_click(
        &mut self,
        on_click: impl FnMut(&PointerInput) + 'static,
    ) {
        self.maybe_on_color_display_click = Some(Box::new(on_click));
    }

    pub fn set_class_names(&mut self, class_names: ClassNames) {
        self.options.class_names = class_names;
    }

    fn reset_debouncer(&mut self) {
        if self.debouncer.is_pending() {
            tracing::debug!(message = "Dropping pending change from previous debouncer");
        }
        self.debouncer = Debouncer::new(self.options.debounce_time());
        self.schedule_change();
    }
}

// Change delivery.
impl ColorPicker {
    /// Delivers the settled value to `on_change`, if the debounce window has elapsed
    /// according to the injected [`Clock`]. Returns it too.
    pub fn poll_change(&mut self) -> Option<ValueObject> {
        let now = self.clock.now();
        let settled = self.debouncer.poll(now)?;
        self.deliver_change(&settled);
        Some(settled)
    }

    /// Delivers the pending value right away, without waiting for the window.
    pub fn flush_pending_change(&mut self) -> Option<ValueObject> {
        let pending = self.debouncer.flush()?;
        self.deliver_change(&pending);
        Some(pending)
    }

    /// When the pending change settles, for hosts that want to sleep until then. See
    /// [`crate::sleep_until_deadline`].
    #[must_use]
    pub fn next_change_deadline(&self) -> Option<Instant> { self.debouncer.deadline() }

    #[must_use]
    pub fn has_pending_change(&self) -> bool { self.debouncer.is_pending() }

    fn schedule_change(&mut self) {
        let merged = self.current_value();
        let now = self.clock.now();
        self.debouncer.call(merged, now);
    }

    fn deliver_change(&mut self, value: &ValueObject) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🎨 Color change settled", hex = %value.hex);
        if let Some(on_change) = self.maybe_on_change.as_mut() {
            on_change(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{Button, SurfaceRect, assert_eq2,
                test_fixtures::{FailingClipboard, FixedGeometry, ManualClock,
                                RecordingCaptureHost, RecordingDiagnosticSink,
                                TestClipboard}};

    const WINDOW: Duration = Duration::from_millis(100);

    fn geometry() -> FixedGeometry {
        FixedGeometry::default()
            .with(PickerSurface::Saturation, SurfaceRect::new(0.0, 0.0, 100.0, 100.0))
            .with(PickerSurface::ColorDisplay, SurfaceRect::new(5.0, 90.0, 30.0, 8.0))
            .with(PickerSurface::Hue, SurfaceRect::new(0.0, 110.0, 360.0, 10.0))
            .with(PickerSurface::Opacity, SurfaceRect::new(0.0, 130.0, 100.0, 10.0))
    }

    fn down(x: f64, y: f64) -> PointerInput {
        PointerInput::new(x, y, PointerInputKind::Down(Button::Left))
    }

    fn drag(x: f64, y: f64) -> PointerInput {
        PointerInput::new(x, y, PointerInputKind::Drag(Button::Left))
    }

    fn up(x: f64, y: f64) -> PointerInput {
        PointerInput::new(x, y, PointerInputKind::Up(Button::Left))
    }

    fn options(value: &str) -> ColorPickerOptions {
        ColorPickerOptions {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// A picker on a manual clock, that records every `on_change` delivery.
    fn picker_with_changes(
        options: ColorPickerOptions,
    ) -> (ColorPicker, ManualClock, Rc<RefCell<Vec<ValueObject>>>) {
        let clock = ManualClock::default();
        let changes = Rc::new(RefCell::new(vec![]));
        let changes_clone = changes.clone();
        let picker = ColorPicker::builder(options)
            .with_clock(clock.clone())
            .with_clipboard(TestClipboard::default())
            .with_on_change(move |value| changes_clone.borrow_mut().push(value.clone()))
            .build();
        (picker, clock, changes)
    }

    #[test]
    fn test_construction_schedules_initial_change() {
        let (mut picker, clock, changes) = picker_with_changes(options("#ff000080"));
        assert_eq2!(picker.alpha(), 0.5);
        assert_eq2!(picker.color().hex, "#ff000080");

        clock.advance(Duration::from_millis(99));
        assert_eq2!(picker.poll_change(), None);

        clock.advance(Duration::from_millis(1));
        let settled = picker.poll_change().unwrap();
        assert_eq2!(settled.hex, "#ff000080");
        assert_eq2!(changes.borrow().len(), 1);

        // Delivered once.
        clock.advance(WINDOW);
        assert_eq2!(picker.poll_change(), None);
        assert_eq2!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_hue_strip_press_changes_color() {
        let (mut picker, clock, changes) = picker_with_changes(options("#ff0000"));
        let geometry = geometry();

        assert_eq2!(
            picker.handle_pointer_input(down(180.0, 115.0), &geometry),
            EventPropagation::ConsumedRender
        );
        assert_eq2!(picker.hue(), 180.0);

        clock.advance(WINDOW);
        picker.poll_change();
        let changes = changes.borrow();
        let last = changes.last().unwrap();
        assert_eq2!((last.hsl.h, last.hsl.s, last.hsl.l), (180.0, 100.0, 50.0));
        assert_eq2!((last.rgb.r, last.rgb.g, last.rgb.b), (0, 255, 255));
    }

    #[test]
    fn test_drag_coalesces_into_one_change() {
        let (mut picker, clock, changes) = picker_with_changes(options("#ff0000"));
        let geometry = geometry();

        // Let the initial change settle first.
        clock.advance(WINDOW);
        picker.poll_change();
        changes.borrow_mut().clear();

        picker.handle_pointer_input(down(0.0, 115.0), &geometry);
        for x in [90.0, 180.0, 270.0] {
            clock.advance(Duration::from_millis(20));
            assert_eq2!(
                picker.handle_pointer_input(drag(x, 500.0), &geometry),
                EventPropagation::ConsumedRender
            );
            assert_eq2!(picker.poll_change(), None);
        }
        picker.handle_pointer_input(up(270.0, 500.0), &geometry);

        clock.advance(WINDOW);
        picker.poll_change();
        assert_eq2!(changes.borrow().len(), 1);
        assert_eq2!(changes.borrow()[0].hsl.h, 270.0);
    }

    #[test]
    fn test_live_hue_survives_achromatic_colors() {
        let (mut picker, _clock, _changes) = picker_with_changes(options("#ff0000"));
        let geometry = geometry();

        picker.handle_pointer_input(down(180.0, 115.0), &geometry);
        picker.handle_pointer_input(up(180.0, 115.0), &geometry);
        assert_eq2!(picker.color().hsl.h, 180.0);

        // Bottom left corner of the plane is black, which has no hue of its own.
        picker.handle_pointer_input(down(0.0, 100.0), &geometry);
        assert_eq2!(picker.color().hex, "#000000ff");
        assert_eq2!(picker.color().hsl.h, 0.0);
        assert_eq2!(picker.hue(), 180.0);
        assert_eq2!(picker.hue_controller().pointer(), 0.5);

        // Dragging back to the top right corner restores the hue.
        picker.handle_pointer_input(drag(100.0, 0.0), &geometry);
        assert_eq2!(
            (picker.color().hsl.h, picker.color().hsl.s, picker.color().hsl.l),
            (180.0, 100.0, 50.0)
        );
        picker.handle_pointer_input(up(100.0, 0.0), &geometry);
        assert!(!picker.is_tracking_pointer());
    }

    #[test]
    fn test_opacity_strip_changes_alpha_only() {
        let (mut picker, clock, changes) = picker_with_changes(options("#00ff00"));
        let geometry = geometry();

        picker.handle_pointer_input(down(25.0, 135.0), &geometry);
        assert_eq2!(picker.alpha(), 0.25);
        assert_eq2!(picker.color().hex, "#00ff00ff");
        assert_eq2!(picker.current_value().hex, "#00ff0040");

        clock.advance(WINDOW);
        picker.poll_change();
        assert_eq2!(changes.borrow().last().unwrap().rgb.a, 0.25);
    }

    #[test]
    fn test_color_display_click_copies_and_reports() {
        let clipboard = Rc::new(RefCell::new(TestClipboard::default()));
        let clicks = Rc::new(RefCell::new(vec![]));
        let clicks_clone = clicks.clone();
        let mut picker = ColorPicker::builder(options("#ff0000"))
            .with_clock(ManualClock::default())
            .with_clipboard(clipboard.clone())
            .with_on_color_display_click(move |input| clicks_clone.borrow_mut().push(*input))
            .build();
        let geometry = geometry();

        assert_eq2!(
            picker.handle_pointer_input(down(10.0, 92.0), &geometry),
            EventPropagation::Consumed
        );
        let release = up(12.0, 93.0);
        assert_eq2!(
            picker.handle_pointer_input(release, &geometry),
            EventPropagation::ConsumedRender
        );
        assert_eq2!(clipboard.borrow().content, "#ff0000ff");
        assert_eq2!(*clicks.borrow(), vec![release]);

        // The color did not change.
        assert_eq2!(picker.color().hex, "#ff0000ff");
    }

    #[test]
    fn test_color_display_click_uses_selected_scheme() {
        let clipboard = Rc::new(RefCell::new(TestClipboard::default()));
        let mut picker = ColorPicker::builder(options("#ff0000"))
            .with_clipboard(clipboard.clone())
            .build();
        picker.select_display_scheme(ColorScheme::Rgba);
        assert!(picker.handle_color_display_click(up(0.0, 0.0)));
        assert_eq2!(clipboard.borrow().content, "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn test_clipboard_failure_skips_callback() {
        let clicks = Rc::new(RefCell::new(0));
        let clicks_clone = clicks.clone();
        let mut picker = ColorPicker::builder(options("#ff0000"))
            .with_clipboard(FailingClipboard)
            .with_on_color_display_click(move |_| *clicks_clone.borrow_mut() += 1)
            .build();
        let geometry = geometry();

        picker.handle_pointer_input(down(10.0, 92.0), &geometry);
        picker.handle_pointer_input(up(10.0, 92.0), &geometry);
        assert_eq2!(*clicks.borrow(), 0);
    }

    #[test]
    fn test_hidden_opacity_picker() {
        let (mut picker, _clock, _changes) = picker_with_changes(ColorPickerOptions {
            hide_opacity_picker: true,
            ..options("#0000ff80")
        });
        let geometry = geometry();

        assert!(picker.maybe_opacity_controller().is_none());
        assert!(picker.render().maybe_opacity.is_none());
        assert_eq2!(picker.color().hex, "#0000ff");
        assert_eq2!(picker.current_value().hex, "#0000ff");
        assert_eq2!(picker.display_value(), "#0000ff");

        // Presses on where the strip would be fall through.
        assert_eq2!(
            picker.handle_pointer_input(down(50.0, 135.0), &geometry),
            EventPropagation::Propagate
        );

        picker.set_hide_opacity_picker(false);
        assert!(picker.maybe_opacity_controller().is_some());
        assert_eq2!(picker.color().hex, "#0000ff80");
        assert_eq2!(picker.maybe_opacity_controller().unwrap().pointer(), 50.0);
    }

    #[test]
    fn test_unmounting_opacity_releases_capture() {
        let host = RecordingCaptureHost::default();
        let mut picker = ColorPicker::builder(options("#ff0000"))
            .with_pointer_capture_host(host.as_host())
            .build();

        picker.handle_pointer_input(down(50.0, 135.0), &geometry());
        assert!(host.is_any_active());

        picker.set_hide_opacity_picker(true);
        assert!(!host.is_any_active());
    }

    #[test]
    fn test_drop_releases_capture() {
        let host = RecordingCaptureHost::default();
        let mut picker = ColorPicker::builder(options("#ff0000"))
            .with_pointer_capture_host(host.as_host())
            .build();

        picker.handle_pointer_input(down(20.0, 20.0), &geometry());
        assert!(host.is_any_active());
        drop(picker);
        assert!(!host.is_any_active());
    }

    #[test]
    fn test_predefined_color_click_keeps_alpha() {
        let (mut picker, _clock, _changes) = picker_with_changes(ColorPickerOptions {
            predefined_colors: vec!["#00ff00".into(), "#00ff00".into(), "#0000ff".into()],
            ..options("#ff000080")
        });
        assert_eq2!(picker.predefined_colors().len(), 2);

        assert_eq2!(
            picker.handle_predefined_color_click(0),
            EventPropagation::ConsumedRender
        );
        assert_eq2!(picker.color().hex, "#00ff00ff");
        assert_eq2!(picker.alpha(), 0.5);
        assert_eq2!(picker.current_value().hex, "#00ff0080");
        assert_eq2!(picker.hue(), 120.0);

        assert_eq2!(
            picker.handle_predefined_color_click(5),
            EventPropagation::Propagate
        );
    }

    #[test]
    fn test_set_debounce_time_drops_pending_and_reschedules() {
        let (mut picker, clock, changes) = picker_with_changes(options("#ff0000"));
        picker.handle_color_change(ValueHsl::new(120.0, 100.0, 50.0));

        picker.set_debounce_time(Duration::from_millis(300));
        assert_eq2!(picker.debouncer.window(), Duration::from_millis(300));
        clock.advance(WINDOW);
        assert_eq2!(picker.poll_change(), None);

        clock.advance(Duration::from_millis(200));
        assert_eq2!(picker.poll_change().unwrap().hex, "#00ff00ff");
        assert_eq2!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_press_on_unrendered_surface_propagates() {
        let (mut picker, _clock, _changes) = picker_with_changes(options("#ff0000"));
        let mut geometry = geometry();
        geometry.remove(PickerSurface::Hue);

        assert_eq2!(
            picker.handle_pointer_input(down(180.0, 115.0), &geometry),
            EventPropagation::Propagate
        );
        assert_eq2!(picker.hue(), 0.0);
        assert!(!picker.is_tracking_pointer());
    }

    #[test]
    fn test_set_on_change_replaces_callback() {
        let (mut picker, clock, old_changes) = picker_with_changes(options("#ff0000"));
        let new_changes = Rc::new(RefCell::new(0));
        let new_changes_clone = new_changes.clone();
        picker.set_on_change(move |_| *new_changes_clone.borrow_mut() += 1);

        clock.advance(WINDOW);
        picker.poll_change();
        assert_eq2!(old_changes.borrow().len(), 0);
        assert_eq2!(*new_changes.borrow(), 1);
    }

    #[test]
    fn test_invalid_value_reports_once_and_falls_back() {
        let sink = Rc::new(RecordingDiagnosticSink::default());
        let mut picker = ColorPicker::builder(options("not-a-color"))
            .with_diagnostic_sink(sink.clone())
            .build();
        assert_eq2!(sink.len(), 1);
        assert_eq2!(*picker.color(), ValueObject::fallback(true));
        assert_eq2!(picker.alpha(), 1.0);

        picker.set_value("#12345");
        assert_eq2!(sink.len(), 2);
        assert_eq2!(picker.color().hex, "#000000ff");
    }

    #[test]
    fn test_set_value_resyncs_every_controller() {
        let (mut picker, _clock, _changes) = picker_with_changes(options("#ff0000"));
        picker.set_value("hsla(240, 100%, 50%, 0.3)");

        assert_eq2!(picker.color().hex, "#0000ff4d");
        assert_eq2!(picker.alpha(), 0.3);
        assert_eq2!(picker.hue(), 240.0);
        assert_eq2!(round_alpha(picker.hue_controller().pointer()), 0.67);
        assert_eq2!(picker.maybe_opacity_controller().unwrap().pointer(), 30.0);
    }

    #[test]
    fn test_flush_pending_change() {
        let (mut picker, _clock, changes) = picker_with_changes(options("#ff0000"));
        assert!(picker.has_pending_change());
        assert!(picker.next_change_deadline().is_some());

        assert_eq2!(picker.flush_pending_change().unwrap().hex, "#ff0000ff");
        assert_eq2!(changes.borrow().len(), 1);
        assert!(!picker.has_pending_change());
        assert_eq2!(picker.next_change_deadline(), None);
    }

    #[test]
    fn test_display_schemes() {
        let (mut picker, _clock, _changes) = picker_with_changes(options("#ff000080"));
        assert_eq2!(picker.display_value(), "#ff000080");

        assert_eq2!(picker.cycle_display_scheme(), ColorScheme::Hsla);
        assert_eq2!(picker.display_value(), "hsla(0, 100%, 50%, 0.5)");

        assert_eq2!(picker.cycle_display_scheme(), ColorScheme::Rgba);
        assert_eq2!(picker.display_value(), "rgba(255, 0, 0, 0.5)");

        let footer = picker.render().footer;
        let active: Vec<_> = footer.items.iter().filter(|it| it.is_active).collect();
        assert_eq2!(active.len(), 1);
        assert_eq2!(active[0].key, ColorScheme::Rgba);
    }

    #[test]
    fn test_moves_without_press_propagate() {
        let (mut picker, _clock, _changes) = picker_with_changes(options("#ff0000"));
        let geometry = geometry();
        assert_eq2!(
            picker.handle_pointer_input(
                PointerInput::new(50.0, 50.0, PointerInputKind::Move),
                &geometry
            ),
            EventPropagation::Propagate
        );
        assert_eq2!(
            picker.handle_pointer_input(down(500.0, 500.0), &geometry),
            EventPropagation::Propagate
        );
    }

    #[test]
    fn test_render_carries_class_names() {
        let (picker, _clock, _changes) = picker_with_changes(ColorPickerOptions {
            class_names: ClassNames {
                root: Some("picker".into()),
                ..Default::default()
            },
            ..options("#ff0000")
        });
        let view = picker.render();
        assert_eq2!(view.class_name.as_deref(), Some("picker"));
        assert_eq2!(view.saturation.display_value, "#ff0000ff");
        assert!(view.maybe_opacity.is_some());
        assert!(view.maybe_predefined_colors.is_none());
    }
}

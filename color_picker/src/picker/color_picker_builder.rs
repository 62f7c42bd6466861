// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::rc::Rc;

use crate::{ClipboardService, Clock, ColorPicker, ColorPickerOptions, DiagnosticSink,
            NoopPointerCaptureHost, PointerCaptureHost, PointerInput, SystemClipboard,
            SystemClock, TracingDiagnosticSink, ValueObject};

/// Receives the merged value each time a change settles.
pub type OnChangeFn = Box<dyn FnMut(&ValueObject)>;

/// Receives the release that completed a click on the color display control, after its
/// text was copied to the clipboard.
pub type OnColorDisplayClickFn = Box<dyn FnMut(&PointerInput)>;

/// Assembles a [`ColorPicker`]. Every collaborator has a production default:
///
/// | Collaborator           | Default                      |
/// | :--------------------- | :--------------------------- |
/// | [`Clock`]              | [`SystemClock`]              |
/// | [`ClipboardService`]   | [`SystemClipboard`]          |
/// | [`DiagnosticSink`]     | [`TracingDiagnosticSink`]    |
/// | [`PointerCaptureHost`] | [`NoopPointerCaptureHost`]   |
pub struct ColorPickerBuilder {
    pub(crate) options: ColorPickerOptions,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) clipboard: Box<dyn ClipboardService>,
    pub(crate) diagnostic_sink: Box<dyn DiagnosticSink>,
    pub(crate) capture_host: Rc<dyn PointerCaptureHost>,
    pub(crate) maybe_on_change: Option<OnChangeFn>,
    pub(crate) maybe_on_color_display_click: Option<OnColorDisplayClickFn>,
}

impl std::fmt::Debug for ColorPickerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPickerBuilder")
            .field("options", &self.options)
            .field("capture_host", &self.capture_host)
            .field("has_on_change", &self.maybe_on_change.is_some())
            .field(
                "has_on_color_display_click",
                &self.maybe_on_color_display_click.is_some(),
            )
            .finish_non_exhaustive()
    }
}

impl ColorPickerBuilder {
    #[must_use]
    pub fn new(options: ColorPickerOptions) -> Self {
        Self {
            options,
            clock: Box::new(SystemClock),
            clipboard: Box::new(SystemClipboard),
            diagnostic_sink: Box::new(TracingDiagnosticSink),
            capture_host: Rc::new(NoopPointerCaptureHost),
            maybe_on_change: None,
            maybe_on_color_display_click: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl ClipboardService + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    #[must_use]
    pub fn with_diagnostic_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostic_sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn with_pointer_capture_host(mut self, host: Rc<dyn PointerCaptureHost>) -> Self {
        self.capture_host = host;
        self
    }

    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&ValueObject) + 'static) -> Self {
        self.maybe_on_change = Some(Box::new(on_change));
        self
    }

    #[must_use]
    pub fn with_on_color_display_click(
        mut self,
        on_click: impl FnMut(&PointerInput) + 'static,
    ) -> Self {
        self.maybe_on_color_display_click = Some(Box::new(on_click));
        self
    }

    #[must_use]
    pub fn build(self) -> ColorPicker { ColorPicker::from_builder(self) }
}

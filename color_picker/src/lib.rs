// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_picker
//!
//! A headless, embeddable color picker widget core. The host application (a terminal
//! UI, a GPU renderer, a web frontend over FFI, etc.) is responsible for drawing and for
//! dispatching pointer events. This crate owns everything else:
//!
//! 1. The **color normalization engine** in [`core::color`]. It turns any accepted
//!    external color representation ([`ColorInput`]: hex strings, CSS functions, CSS
//!    named colors, RGB objects, HSL objects) into one canonical [`ValueObject`]. Bad
//!    input never crashes the widget, it resolves to a documented fallback and is
//!    reported once to an injectable [`DiagnosticSink`].
//! 2. Three **interactive surface controllers** in [`picker`]:
//!    - [`SaturationController`] - 2D saturation / value plane, also hosts the
//!      copy-to-clipboard color display.
//!    - [`HueController`] - 1D hue strip.
//!    - [`OpacityController`] - 1D opacity strip.
//! 3. The **orchestrator** [`ColorPicker`] which holds the single source of truth,
//!    routes [`PointerInput`]s to the controllers, and delivers debounced change
//!    notifications to the host.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use r3bl_color_picker::{ColorPicker, ColorPickerOptions, ValueHsl,
//!                         test_fixtures::{ManualClock, TestClipboard}};
//!
//! let clock = ManualClock::default();
//! let mut picker = ColorPicker::builder(ColorPickerOptions {
//!         value: Some("#ff0000".into()),
//!         ..Default::default()
//!     })
//!     .with_clock(clock.clone())
//!     .with_clipboard(TestClipboard::default())
//!     .build();
//!
//! picker.handle_color_change(ValueHsl::new(180.0, 100.0, 50.0));
//! clock.advance(Duration::from_millis(100));
//!
//! let settled = picker.poll_change().unwrap();
//! assert_eq!(settled.hex, "#00ffffff");
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod picker;
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use picker::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod class_names;
pub mod clipboard;
pub mod color_picker_builder;
pub mod color_picker_config;
pub mod color_picker_impl;
pub mod color_scheme_picker;
pub mod event_routing_support;
pub mod hue_controller;
pub mod opacity_controller;
pub mod pointer;
pub mod predefined_colors;
pub mod saturation_controller;

// Re-export.
pub use class_names::*;
pub use clipboard::*;
pub use color_picker_builder::*;
pub use color_picker_config::*;
pub use color_picker_impl::*;
pub use color_scheme_picker::*;
pub use event_routing_support::*;
pub use hue_controller::*;
pub use opacity_controller::*;
pub use pointer::*;
pub use predefined_colors::*;
pub use saturation_controller::*;

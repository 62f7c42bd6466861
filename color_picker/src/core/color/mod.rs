// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_space_conversions;
pub mod color_types;
pub mod css_color_parser;
pub mod display_format;
pub mod hex_color_parser;
pub mod named_colors;
pub mod normalize;
pub mod true_color;

// Re-export.
pub use color_space_conversions::*;
pub use color_types::*;
pub use css_color_parser::*;
pub use display_format::*;
pub use hex_color_parser::*;
pub use named_colors::*;
pub use normalize::*;
pub use true_color::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod pointer_capture;
pub mod pointer_input;
pub mod pointer_math;
pub mod surface_geometry;

// Re-export.
pub use pointer_capture::*;
pub use pointer_input::*;
pub use pointer_math::*;
pub use surface_geometry::*;

// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clock;
pub mod common_math;
pub mod common_result_and_error;
pub mod debouncer;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use clock::*;
pub use common_math::*;
pub use common_result_and_error::*;
pub use debouncer::*;
pub use miette_setup_global_report_handler::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for every injectable seam of the picker. These are public so that
//! integration tests, doc tests, and downstream hosts can use them too.

// Attach sources.
pub mod clipboard_fixtures;
pub mod clock_fixtures;
pub mod diagnostic_fixtures;
pub mod pointer_fixtures;
pub mod temp_dir;

// Re-export.
pub use clipboard_fixtures::*;
pub use clock_fixtures::*;
pub use diagnostic_fixtures::*;
pub use pointer_fixtures::*;
pub use temp_dir::*;

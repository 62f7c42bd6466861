// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorInput, ColorParseError};

/// Abstraction for the invalid input side channel, for dependency injection. The
/// normalization engine never fails, instead it emits exactly one event to this sink per
/// invalid input occurrence and falls back to a documented default.
///
/// This trait is implemented by [`TracingDiagnosticSink`] (production) and
/// [`crate::test_fixtures::RecordingDiagnosticSink`] (tests).
pub trait DiagnosticSink {
    fn report_invalid_color(&self, input: &ColorInput, error: &ColorParseError);
}

/// Emits each invalid input occurrence as a [`tracing::error!`] event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report_invalid_color(&self, input: &ColorInput, error: &ColorParseError) {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Color picker: invalid color received",
            input = ?input,
            error = %error,
        );
    }
}

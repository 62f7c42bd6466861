// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cell::RefCell;

use crate::{ColorInput, ColorParseError, DiagnosticSink};

/// Records every invalid input report, in order.
#[derive(Debug, Default)]
pub struct RecordingDiagnosticSink {
    reports: RefCell<Vec<(ColorInput, ColorParseError)>>,
}

impl RecordingDiagnosticSink {
    #[must_use]
    pub fn len(&self) -> usize { self.reports.borrow().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.reports.borrow().is_empty() }

    #[must_use]
    pub fn inputs(&self) -> Vec<ColorInput> {
        self.reports
            .borrow()
            .iter()
            .map(|(input, _)| input.clone())
            .collect()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<ColorParseError> {
        self.reports
            .borrow()
            .iter()
            .map(|(_, error)| error.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingDiagnosticSink {
    fn report_invalid_color(&self, input: &ColorInput, error: &ColorParseError) {
        self.reports.borrow_mut().push((input.clone(), error.clone()));
    }
}

/// Lets a test keep a handle on the sink after moving it into the picker.
impl DiagnosticSink for std::rc::Rc<RecordingDiagnosticSink> {
    fn report_invalid_color(&self, input: &ColorInput, error: &ColorParseError) {
        self.as_ref().report_invalid_color(input, error);
    }
}

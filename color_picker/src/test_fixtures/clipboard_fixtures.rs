// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc};

use crate::{ClipboardResult, ClipboardService};

/// Remembers the last thing that was copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestClipboard {
    pub content: String,
}

impl ClipboardService for TestClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        self.content = content;
        Ok(())
    }
}

/// Lets a test keep a handle on the clipboard after moving it into the picker.
impl ClipboardService for Rc<RefCell<TestClipboard>> {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        self.borrow_mut().try_to_put_content_into_clipboard(content)
    }
}

/// Always fails, like a headless machine with no clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingClipboard;

impl ClipboardService for FailingClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        _content: String,
    ) -> ClipboardResult<()> {
        Err("clipboard is not available".into())
    }
}

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Abstraction for the clipboard service for dependency injection. The color display
/// control only ever writes, it never reads.
///
/// This trait is implemented by [`crate::SystemClipboard`] (production) and by the
/// fakes in [`crate::test_fixtures`] (tests).
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or the write fails.
    fn try_to_put_content_into_clipboard(&mut self, content: String)
    -> ClipboardResult<()>;
}

/// Copies `content`, logging any failure instead of returning it. Returns whether the
/// copy succeeded.
pub fn copy_to_clipboard(
    clipboard_service_provider: &mut dyn ClipboardService,
    content: &str,
) -> bool {
    match clipboard_service_provider.try_to_put_content_into_clipboard(content.to_string())
    {
        Ok(()) => true,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Color picker: could not copy color to clipboard",
                content = %content,
                error = %error,
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_fixtures::{FailingClipboard, TestClipboard}};

    #[test]
    fn test_copy_to_clipboard() {
        let mut clipboard = TestClipboard::default();
        assert!(copy_to_clipboard(&mut clipboard, "#ff0000ff"));
        assert_eq2!(clipboard.content, "#ff0000ff");
    }

    #[test]
    fn test_copy_to_clipboard_failure_is_swallowed() {
        let mut clipboard = FailingClipboard;
        assert!(!copy_to_clipboard(&mut clipboard, "#ff0000ff"));
    }
}

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService};
use crate::throws;

/// The OS clipboard. On X11 the content is kept alive by a forked process after the
/// picker goes away.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        throws!({
            let mut ctx = ClipboardContext::new()?;
            ctx.set_contents(content.clone())?;

            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 Color was copied to clipboard",
                copied = %content,
            );
        })
    }
}

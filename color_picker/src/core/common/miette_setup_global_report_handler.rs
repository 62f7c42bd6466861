// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customizes how [miette](https://docs.rs/miette/latest/miette/index.html) renders a
//! [`miette::Report`] when a host binary's `main() -> miette::Result<_>` errors out, eg:
//! when [`crate::ColorPickerOptions::try_from_json_file`] fails in the demo.

use miette::MietteHandlerOpts;
use tracing::debug;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map(|(columns, _rows)| columns)
                .unwrap_or(80) as usize;
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .rgb_colors(miette::RgbColors::Always)
                .unicode(true)
                .context_lines(3)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

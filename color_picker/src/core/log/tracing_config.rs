// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where display output goes, see [`WriterConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Where log output goes. Hosts that take over the terminal (like the demo) should use
/// [`WriterConfig::File`] so log output doesn't corrupt the rendered picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Log file path.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Configure the tracing logging to suit your needs. You can display the logs to:
/// 1. stdout or stderr,
/// 2. a file,
/// 3. both.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(path.into()),
        }
    }

    #[must_use]
    pub fn new_display(preference: DisplayPreference, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::Display(preference),
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new_display(DisplayPreference::Stderr, LevelFilter::WARN)
    }
}

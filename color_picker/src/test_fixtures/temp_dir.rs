// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;
use rand::{Rng, rngs::ThreadRng};

const COLOR_NAMES: [&str; 10] = [
    "amber", "azure", "coral", "indigo", "jade", "lilac", "ochre", "russet", "teal",
    "umber",
];

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Something like `color-picker-teal-042-913`.
fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();
    let name = COLOR_NAMES[rng.random_range(0..COLOR_NAMES.len())];
    let first: u16 = rng.random_range(0..1000);
    let second: u16 = rng.random_range(0..1000);
    format!("color-picker-{name}-{first:03}-{second:03}")
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(generate_friendly_random_id());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.inner.clone();
        assert!(path.is_dir());
        drop(dir);
        assert!(!path.exists());
    }
}

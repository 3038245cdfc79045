//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the file system and
//! working directory, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - The process working directory
//! - `fs` - File system operations (read, write, rename)

mod env;
mod fs;

use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.rename_impl(from, to)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }
}

/// Replace `path` with `contents` in one step.
///
/// The bytes go to a sibling temporary file first, which is then renamed over
/// the destination. Readers see either the old file or the new one.
#[tracing::instrument(skip(runtime, contents))]
pub fn write_atomic<R: Runtime>(runtime: &R, path: &Path, contents: &[u8]) -> Result<()> {
    let tmp = temp_path_for(path);
    runtime.write(&tmp, contents)?;

    if let Err(e) = runtime.rename(&tmp, path) {
        if runtime.exists(&tmp)
            && let Err(cleanup) = runtime.remove_file(&tmp)
        {
            warn!("Failed to remove temporary file {:?}: {}", tmp, cleanup);
        }
        return Err(e);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

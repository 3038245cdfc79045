//! Paths the `coerce` command works on, resolved from the runtime.

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use crate::runtime::Runtime;

/// Reference manifest file name, looked up in the working directory.
pub const REFERENCE_MANIFEST: &str = "original.package.json";

pub const TARGET_MANIFEST: &str = "package.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub reference_path: PathBuf,
    /// Target directory as given on the command line.
    pub target_name: String,
    pub target_path: PathBuf,
}

impl Config {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, target: &str) -> Result<Self> {
        let work_dir = runtime.current_dir()?;

        Ok(Self {
            reference_path: work_dir.join(REFERENCE_MANIFEST),
            target_name: target.to_string(),
            target_path: nest_under(&work_dir, Path::new(target)).join(TARGET_MANIFEST),
        })
    }
}

/// Append `path` to `base` component by component.
///
/// Root and prefix components are dropped, so an absolute `path` still lands
/// under `base`. `..` pops one level.
fn nest_under(base: &Path, path: &Path) -> PathBuf {
    let mut nested = base.to_path_buf();
    for component in path.components() {
        match component {
            Component::Normal(part) => nested.push(part),
            Component::ParentDir => {
                nested.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    nested
}

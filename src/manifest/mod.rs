//! Package manifest records
//!
//! This module loads the two `package.json` documents the tool works with:
//! the read-only reference manifest that supplies the version, and the target
//! manifest that gets patched and written back.

mod reference;
mod target;

pub use reference::ReferenceManifest;
pub use target::{DependencySection, TargetManifest};

use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ManifestError;
use crate::runtime::Runtime;

/// Read and parse a manifest into its top-level JSON object.
fn load_object<R: Runtime>(runtime: &R, path: &Path) -> Result<Map<String, Value>, ManifestError> {
    let content = runtime
        .read_to_string(path)
        .map_err(|e| read_error(path, e))?;
    parse_object(path, &content)
}

fn parse_object(path: &Path, content: &str) -> Result<Map<String, Value>, ManifestError> {
    let value: Value = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

fn read_error(path: &Path, err: anyhow::Error) -> ManifestError {
    match err.downcast_ref::<io::Error>() {
        Some(io_err) if io_err.kind() == io::ErrorKind::NotFound => ManifestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ManifestError::Read {
            path: path.to_path_buf(),
            reason: format!("{:#}", err),
        },
    }
}

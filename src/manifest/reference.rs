use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{ManifestError, Result};
use crate::runtime::Runtime;

/// The manifest whose version the virtual publish is derived from.
///
/// Only `version` is read; every other field is ignored. It is kept as raw
/// JSON so a non-string version is reported as a bad version, not bad JSON.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReferenceManifest {
    #[serde(default)]
    pub version: Option<Value>,
}

impl ReferenceManifest {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let object = super::load_object(runtime, path)?;
        serde_json::from_value(object.into()).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The declared version, or a value error when it is absent or not a string.
    pub fn version(&self) -> Result<&str> {
        match &self.version {
            Some(Value::String(version)) => Ok(version),
            None | Some(Value::Null) => Err(ManifestError::value(
                "Reference manifest has no \"version\" field",
            )),
            Some(other) => Err(ManifestError::value(format!(
                "Invalid version {}: expected a semver string",
                other
            ))),
        }
    }
}

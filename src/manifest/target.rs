use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::error::{ManifestError, Result};
use crate::runtime::{Runtime, write_atomic};

const RESOLUTIONS: &str = "resolutions";
const FILE_INDENT: &[u8] = b"    ";

/// A dependency map of `package.json` that tracked packages are removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySection {
    DevDependencies,
    Dependencies,
}

impl DependencySection {
    /// Sections in the order they are cleaned.
    pub const ALL: [DependencySection; 2] = [
        DependencySection::DevDependencies,
        DependencySection::Dependencies,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DependencySection::DevDependencies => "devDependencies",
            DependencySection::Dependencies => "dependencies",
        }
    }
}

impl fmt::Display for DependencySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The `package.json` being patched.
///
/// Kept as a raw JSON object so fields this tool does not know about survive
/// the rewrite untouched and in their original order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetManifest {
    fields: Map<String, Value>,
}

impl TargetManifest {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let fields = super::load_object(runtime, path)?;
        Ok(Self { fields })
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn resolutions(&self) -> Option<&Map<String, Value>> {
        self.fields.get(RESOLUTIONS).and_then(Value::as_object)
    }

    /// Replace the whole `resolutions` field.
    ///
    /// An existing field keeps its position; a new one is appended.
    pub fn set_resolutions(&mut self, resolutions: Map<String, Value>) {
        self.fields
            .insert(RESOLUTIONS.to_string(), Value::Object(resolutions));
    }

    /// The dependency map for `section`, if present and an object.
    pub fn section(&self, section: DependencySection) -> Option<&Map<String, Value>> {
        self.fields.get(section.key()).and_then(Value::as_object)
    }

    pub fn section_mut(&mut self, section: DependencySection) -> Option<&mut Map<String, Value>> {
        self.fields
            .get_mut(section.key())
            .and_then(Value::as_object_mut)
    }

    /// Serialize with four-space indentation and no trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(FILE_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| ManifestError::Serialize(serde_json::Error::custom(e)))
    }

    /// Overwrite `path` with this manifest in a single atomic replace.
    #[tracing::instrument(skip(self, runtime))]
    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        let content = self.to_json_string()?;
        write_atomic(runtime, path, content.as_bytes()).map_err(|e| ManifestError::Write {
            path: path.to_path_buf(),
            reason: format!("{:#}", e),
        })
    }
}

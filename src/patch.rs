//! Rewrites a target manifest so the package manager resolves every tracked
//! package to a single coerced version.

use log::{debug, info};
use semver::Version;
use serde_json::{Map, Value};

use crate::error::{ManifestError, Result};
use crate::manifest::{DependencySection, TargetManifest};
use crate::tracked::{is_valid_package_name, resolution_key};

/// A direct declaration removed from the target manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedDependency {
    pub section: DependencySection,
    pub name: String,
    pub constraint: Value,
}

/// Outcome of patching a single manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub version: Version,
    pub resolutions: Map<String, Value>,
    pub removed: Vec<RemovedDependency>,
}

pub struct ResolutionPatcher<'a> {
    tracked: &'a [&'a str],
}

impl<'a> ResolutionPatcher<'a> {
    /// Create a patcher for the given package names.
    ///
    /// Fails if any name is not a valid npm package name.
    pub fn new(tracked: &'a [&'a str]) -> Result<Self> {
        if let Some(bad) = tracked.iter().find(|name| !is_valid_package_name(name)) {
            return Err(ManifestError::value(format!(
                "Invalid tracked package name '{}'",
                bad
            )));
        }
        Ok(Self { tracked })
    }

    /// Build the resolutions map for `version`, one entry per tracked name.
    pub fn resolutions(&self, version: &Version) -> Map<String, Value> {
        let version = version.to_string();
        self.tracked
            .iter()
            .map(|name| (resolution_key(name), Value::String(version.clone())))
            .collect()
    }

    /// Apply the coercion to `manifest`.
    ///
    /// Any previous `resolutions` are discarded, then tracked names are
    /// removed from `devDependencies` and `dependencies`. Untracked entries
    /// keep their values and order.
    #[tracing::instrument(skip(self, manifest))]
    pub fn patch(&self, manifest: &mut TargetManifest, version: &Version) -> PatchReport {
        let resolutions = self.resolutions(version);
        if let Some(previous) = manifest.resolutions()
            && !previous.is_empty()
        {
            debug!("Discarding {} existing resolution(s)", previous.len());
        }
        manifest.set_resolutions(resolutions.clone());

        let mut removed = Vec::new();
        for section in DependencySection::ALL {
            let Some(deps) = manifest.section_mut(section) else {
                continue;
            };
            for name in self.tracked {
                if let Some(constraint) = deps.shift_remove(*name) {
                    info!("Removed {} {} from {}", name, constraint, section);
                    removed.push(RemovedDependency {
                        section,
                        name: name.to_string(),
                        constraint,
                    });
                }
            }
        }

        PatchReport {
            version: version.clone(),
            resolutions,
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracked::TRACKED_PACKAGES;
    use serde_json::json;

    fn manifest(value: Value) -> TargetManifest {
        match value {
            Value::Object(map) => TargetManifest::from_fields(map),
            _ => panic!("test manifest must be an object"),
        }
    }

    fn patcher() -> ResolutionPatcher<'static> {
        ResolutionPatcher::new(TRACKED_PACKAGES).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_names() {
        let names: &[&str] = &["@quainetwork/web3", "Not Valid"];
        assert!(matches!(
            ResolutionPatcher::new(names),
            Err(ManifestError::Value { .. })
        ));
    }

    #[test]
    fn test_resolutions_cover_every_tracked_name_in_order() {
        let version = Version::new(1, 3, 0);
        let resolutions = patcher().resolutions(&version);

        assert_eq!(resolutions.len(), TRACKED_PACKAGES.len());
        for (key, name) in resolutions.keys().zip(TRACKED_PACKAGES) {
            assert_eq!(key, &format!("*/**/{}", name));
        }
        assert!(resolutions.values().all(|v| v == "1.3.0"));
    }

    #[test]
    fn test_patch_scenario_dependencies() {
        let mut target = manifest(json!({
            "dependencies": {"@quainetwork/web3": "^1.0.0", "lodash": "^4.0.0"}
        }));

        let report = patcher().patch(&mut target, &Version::new(1, 3, 0));

        let resolutions = target.resolutions().unwrap();
        assert_eq!(resolutions["*/**/@quainetwork/web3"], json!("1.3.0"));
        assert_eq!(resolutions.len(), TRACKED_PACKAGES.len());
        assert_eq!(
            target.section(DependencySection::Dependencies).unwrap(),
            json!({"lodash": "^4.0.0"}).as_object().unwrap()
        );
        assert_eq!(
            report.removed,
            vec![RemovedDependency {
                section: DependencySection::Dependencies,
                name: "@quainetwork/web3".into(),
                constraint: json!("^1.0.0"),
            }]
        );
    }

    #[test]
    fn test_patch_strips_both_sections_and_keeps_untracked_order() {
        let mut target = manifest(json!({
            "devDependencies": {
                "mocha": "^8.0.0",
                "@quainetwork/web3-utils": "1.0.0",
                "chai": "^4.0.0",
                "@quainetwork/web3-eth": "1.0.0"
            },
            "dependencies": {
                "@quainetwork/web3-core": "1.0.0",
                "bn.js": "^5.0.0",
                "@quainetwork/web3": "1.0.0"
            }
        }));

        let report = patcher().patch(&mut target, &Version::new(2, 1, 0));

        let dev: Vec<_> = target
            .section(DependencySection::DevDependencies)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(dev, vec!["mocha", "chai"]);
        let deps: Vec<_> = target
            .section(DependencySection::Dependencies)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(deps, vec!["bn.js"]);

        assert_eq!(report.removed.len(), 4);
        assert!(
            report.removed[..2]
                .iter()
                .all(|r| r.section == DependencySection::DevDependencies)
        );
    }

    #[test]
    fn test_patch_discards_existing_resolutions() {
        let mut target = manifest(json!({
            "resolutions": {"left-pad": "1.0.0", "*/**/@quainetwork/web3": "0.0.1"}
        }));

        patcher().patch(&mut target, &Version::new(1, 0, 0));

        let resolutions = target.resolutions().unwrap();
        assert!(!resolutions.contains_key("left-pad"));
        assert_eq!(resolutions["*/**/@quainetwork/web3"], json!("1.0.0"));
    }

    #[test]
    fn test_patch_without_dependency_sections() {
        let mut target = manifest(json!({"name": "app"}));

        let report = patcher().patch(&mut target, &Version::new(1, 0, 0));

        assert!(report.removed.is_empty());
        assert!(target.section(DependencySection::Dependencies).is_none());
        assert!(target.section(DependencySection::DevDependencies).is_none());
        assert_eq!(target.fields()["name"], json!("app"));
    }

    #[test]
    fn test_patch_leaves_non_object_sections_alone() {
        let mut target = manifest(json!({"dependencies": null, "devDependencies": "x"}));

        patcher().patch(&mut target, &Version::new(1, 0, 0));

        assert_eq!(target.fields()["dependencies"], Value::Null);
        assert_eq!(target.fields()["devDependencies"], json!("x"));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut target = manifest(json!({
            "name": "app",
            "dependencies": {"@quainetwork/web3": "^1.0.0", "lodash": "^4.0.0"}
        }));
        let p = patcher();
        let version = Version::new(1, 3, 0);

        let first = p.patch(&mut target, &version);
        let after_first = target.to_json_string().unwrap();
        let second = p.patch(&mut target, &version);

        assert_eq!(first.resolutions, second.resolutions);
        assert!(second.removed.is_empty());
        assert_eq!(after_first, target.to_json_string().unwrap());
    }
}

use anyhow::Result;
use log::{debug, info};
use std::io::{self, Write};

use crate::{
    manifest::{ReferenceManifest, TargetManifest},
    patch::{PatchReport, ResolutionPatcher},
    report::write_report,
    runtime::Runtime,
    tracked::TRACKED_PACKAGES,
    version::minor_increment,
};

pub mod config;

use config::Config;

/// Coerce the tracked packages of `<cwd>/<target>/package.json` to the
/// minor increment of the reference manifest's version.
#[tracing::instrument(skip(runtime))]
pub fn coerce<R: Runtime>(runtime: R, target: &str) -> Result<()> {
    let config = Config::load(&runtime, target)?;
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run(&runtime, &config, &mut output)?;
    Ok(())
}

/// Load both manifests, patch the target, report and persist it.
///
/// Nothing is written before the final step, so a failure anywhere leaves the
/// target manifest untouched.
#[tracing::instrument(skip(runtime, output))]
pub fn run<R: Runtime, W: Write>(
    runtime: &R,
    config: &Config,
    output: &mut W,
) -> Result<PatchReport> {
    debug!("Reading reference manifest {:?}", config.reference_path);
    let reference = ReferenceManifest::load(runtime, &config.reference_path)?;
    debug!("Reading target manifest {:?}", config.target_path);
    let mut target = TargetManifest::load(runtime, &config.target_path)?;

    let version = minor_increment(reference.version()?)?;
    info!(
        "Coercing {} package(s) to {}",
        TRACKED_PACKAGES.len(),
        version
    );

    let patcher = ResolutionPatcher::new(TRACKED_PACKAGES)?;
    let report = patcher.patch(&mut target, &version);

    write_report(output, &config.target_name, &report.resolutions)?;

    target.save(runtime, &config.target_path)?;
    info!("Updated {:?}", config.target_path);

    Ok(report)
}

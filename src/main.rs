use anyhow::Result;
use clap::Parser;
use coerce_resolutions::commands::coerce;

/// coerce-resolutions - pin a package family to its virtual publish version
///
/// Reads the version of `original.package.json` in the current directory,
/// bumps its minor component and writes yarn `resolutions` into
/// `<TARGET_DIR>/package.json` so every Web3 package in the tree resolves to
/// that version. Direct Web3 dependencies of the target are removed.
///
/// Examples:
///   coerce-resolutions mosaic-1
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory, relative to the current one, holding the target package.json
    #[arg(value_name = "TARGET_DIR")]
    target: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = coerce_resolutions::runtime::RealRuntime;

    coerce(runtime, &cli.target)
}

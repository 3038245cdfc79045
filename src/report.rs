//! Human-readable progress report printed after patching.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::io::Write;

const DELIMITER: &str = ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";
const REPORT_INDENT: &[u8] = b" ";

/// Write the report for `target_dir` to any writer.
pub fn write_report<W: Write>(
    output: &mut W,
    target_dir: &str,
    resolutions: &Map<String, Value>,
) -> Result<()> {
    writeln!(output, "{}", DELIMITER)?;
    writeln!(
        output,
        "Yarn will resolve Web3 packages in \"{}\" to...",
        target_dir
    )?;
    writeln!(output, "{}", DELIMITER)?;

    let formatter = PrettyFormatter::with_indent(REPORT_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut *output, formatter);
    resolutions.serialize(&mut ser)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

//! # Targets Subcommand
//!
//! Lists the fixed validation targets and whether each data file is present
//! under the data root.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gamedata_schema::{default_targets, Target};

use crate::{resolve_data_root, DEFAULT_DATA_ROOT};

/// Arguments for the targets subcommand.
#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Directory holding the collection documents.
    #[arg(long, default_value = DEFAULT_DATA_ROOT)]
    pub data_root: PathBuf,
}

/// Execute the targets subcommand.
pub fn run_targets(args: &TargetsArgs, cwd: &Path, out: &mut impl Write) -> Result<u8> {
    let data_root = resolve_data_root(&args.data_root, cwd);
    write_targets(out, &default_targets(), &data_root).context("failed to write target list")?;
    Ok(0)
}

pub fn write_targets(
    out: &mut impl Write,
    targets: &[Target],
    data_root: &Path,
) -> std::io::Result<()> {
    writeln!(out, "Validation targets under {}:", data_root.display())?;
    writeln!(out)?;
    for target in targets {
        let path = data_root.join(target.file_name);
        let status = if path.is_file() { "present" } else { "missing" };
        writeln!(
            out,
            "  {:<8} {:<16} {:<10} {}",
            target.kind.as_str(),
            target.file_name,
            target.list_key,
            status
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} targets", targets.len())
}

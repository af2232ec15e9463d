// SPDX-License-Identifier: Apache-2.0

//! rbxmesh CLI - convert Roblox mesh files to OBJ interchange text

use anyhow::{bail, Context, Result};
use clap::Parser;
use rbxmesh::{decode_to_obj, probe_file};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rbxmesh")]
#[command(about = "Roblox mesh importer - decodes .mesh files to OBJ text", long_about = None)]
struct Cli {
    /// Input mesh file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output OBJ file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only check whether the file looks like a Roblox mesh
    #[arg(long)]
    probe: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.probe {
        if probe_file(&cli.input) {
            println!("{}: recognized mesh header", cli.input.display());
            return Ok(());
        }
        bail!("{}: not a recognized mesh file", cli.input.display());
    }

    let data = fs::read(&cli.input)
        .with_context(|| format!("Failed to read mesh file: {}", cli.input.display()))?;

    let obj_text = decode_to_obj(&data)
        .with_context(|| format!("Failed to decode mesh file: {}", cli.input.display()))?;

    if cli.verbose {
        eprintln!(
            "{}: {} bytes in, {} bytes of interchange text",
            cli.input.display(),
            data.len(),
            obj_text.len()
        );
    }

    match cli.output {
        Some(path) => fs::write(&path, obj_text)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => print!("{obj_text}"),
    }

    Ok(())
}

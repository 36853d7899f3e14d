//! nbstrip CLI - strip solutions from Jupyter notebooks
//!
//! Reads a solution notebook, clears outputs and execution counters, rewrites
//! marked code lines to their public version, and writes the distributable
//! challenge notebook.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use nbstrip_core::{clean_file, DEFAULT_MARKER};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nbstrip",
    version,
    about = "Strip solutions from a notebook to produce a challenge version",
    long_about = "Strip solutions from a notebook to produce a challenge version.\n\n\
        Cell outputs are emptied and execution counts reset. Inside code cells,\n\
        any line containing the marker keeps only the text after it (with the\n\
        original indentation); a marker with nothing after it deletes the line."
)]
struct Cli {
    /// Notebook to clean (e.g. solution.ipynb)
    input: PathBuf,

    /// Destination path; defaults to a challenge notebook next to the input
    output: Option<PathBuf>,

    /// Marker that reveals the public version of a code line
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,
}

/// Derive the output path when none was given.
///
/// A file whose stem is "solution" becomes "challenge" with the same
/// extension; any other stem gets a "-challenge" suffix. The file is placed
/// next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = if stem == "solution" {
        "challenge".to_string()
    } else {
        format!("{stem}-challenge")
    };
    match input.extension() {
        Some(ext) => input.with_file_name(format!("{name}.{}", ext.to_string_lossy())),
        None => input.with_file_name(name),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let report = clean_file(&cli.input, &output, &cli.marker)
        .with_context(|| format!("failed to clean {}", cli.input.display()))?;

    if !cli.quiet {
        eprintln!(
            "{} {} -> {} ({} cells, {} bytes)",
            "✓".green().bold(),
            cli.input.display(),
            output.display(),
            report.cells,
            report.bytes
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_solution_stem() {
        assert_eq!(
            default_output_path(Path::new("src/solution.ipynb")),
            PathBuf::from("src/challenge.ipynb")
        );
    }

    #[test]
    fn test_default_output_other_stem() {
        assert_eq!(
            default_output_path(Path::new("week1.ipynb")),
            PathBuf::from("week1-challenge.ipynb")
        );
    }

    #[test]
    fn test_default_output_no_extension() {
        assert_eq!(
            default_output_path(Path::new("notebook")),
            PathBuf::from("notebook-challenge")
        );
    }
}

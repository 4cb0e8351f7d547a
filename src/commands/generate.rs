//! Generate command implementation
//!
//! Assembles the descriptor from its layers (file, environment, command
//! line), picks the resource bundle and runs the generation pipeline.

use std::path::Path;

use console::Style;

use crate::bundle::{DirectoryBundle, EmbeddedBundle};
use crate::cli::{DescriptorArgs, GenerateArgs};
use crate::descriptor::Descriptor;
use crate::error::{Result, fs as fs_errors};
use crate::generator::{self, GenerationReport};

/// Run generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let descriptor = resolve_descriptor(args.descriptor.as_deref(), args.fields)?;

    let report = match &args.bundle_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Using bundle directory");
            generator::generate(&descriptor, &DirectoryBundle::new(dir))?
        }
        None => generator::generate(&descriptor, &EmbeddedBundle)?,
    };

    if args.json {
        print_json(&report)
    } else {
        print_summary(&report);
        Ok(())
    }
}

/// Merge the descriptor file (if any) with the environment and flags
fn resolve_descriptor(file: Option<&Path>, fields: DescriptorArgs) -> Result<Descriptor> {
    let base = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading descriptor file");
            Descriptor::load(path)?
        }
        None => Descriptor::default(),
    };

    Ok(base.merge(fields.into_descriptor()))
}

fn print_json(report: &GenerationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| {
        fs_errors::io_failure(
            "Failed to render report for",
            &report.output_directory,
            std::io::Error::other(e),
        )
    })?;
    println!("{json}");
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    let label = Style::new().bold();
    let path = Style::new().cyan();

    println!(
        "{} {} ({})",
        Style::new().green().bold().apply_to("Generated"),
        report.application_name,
        report.kind
    );
    println!(
        "  {} {}",
        label.apply_to("Script:"),
        path.apply_to(report.script.display())
    );
    println!(
        "  {} {}",
        label.apply_to("Config:"),
        path.apply_to(report.config.display())
    );
    println!(
        "  {} {} files in {}",
        label.apply_to("Extracted:"),
        report.extracted.len(),
        path.apply_to(report.output_directory.display())
    );
}

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::Path;
use docsplit_core::split_document;
use crate::config::DocsplitConfig;

pub fn add_input_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Markdown document to split [default: ./README.md]")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./docsplit.toml]")
        )
}

pub fn make_subcommand() -> Command {
    add_input_args(Command::new("split"))
        .about("Split a Markdown document into per-section pages")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the pages [default: .]")
        )
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .help("Manifest file, relative to the output directory [default: toc.yaml]")
        )
}

/// Document settings live in the same file as the `[run]` table.
pub fn load_document_config(path: &str) -> Result<docsplit_core::Config> {
    docsplit_core::Config::read_or_default(path)
        .with_context(|| format!("Failed to load configuration from {path}"))
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = DocsplitConfig::load(args)?;
    let run = config.run_config();
    tracing::debug!(?run, "run configuration");
    let document_config = load_document_config(&run.config)?;

    let output_dir = Path::new(&run.output);
    let report = split_document(
        document_config,
        Path::new(&run.input),
        output_dir,
        Path::new(&run.manifest),
    )
    .with_context(|| format!("Failed to split {}", run.input))?;

    for link in &report.unresolved {
        println!("Unknown: #{} (in {})", link.target, link.section);
    }

    println!(
        "Wrote {} pages to {} (manifest: {})",
        report.pages.len(),
        output_dir.display(),
        report.manifest.display()
    );

    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::{ArgMatches, Command};
use std::path::Path;
use docsplit_core::check_document;
use crate::cmd::split::{add_input_args, load_document_config};
use crate::config::DocsplitConfig;

pub fn make_subcommand() -> Command {
    add_input_args(Command::new("check"))
        .about("List sections and report unmapped slugs or dangling links without writing")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = DocsplitConfig::load(args)?;
    let run = config.run_config();
    tracing::debug!(?run, "run configuration");
    let document_config = load_document_config(&run.config)?;

    let report = check_document(document_config, Path::new(&run.input))
        .with_context(|| format!("Failed to read {}", run.input))?;

    println!("Sections");
    for page in &report.pages {
        match &page.file {
            Some(file) => println!("- {} -> {}", page.title, file),
            None => println!("- {} -> (no filename for \"{}\")", page.title, page.slug),
        }
    }
    println!("Subsections: {}", report.subsections);

    if !report.unresolved.is_empty() {
        println!("Unresolved links");
        for link in &report.unresolved {
            println!("- #{} (in {})", link.target, link.section);
        }
    }

    if !report.missing.is_empty() {
        bail!(
            "{} section(s) have no entry in [filenames.stems]: {}",
            report.missing.len(),
            report.missing.join(", ")
        );
    }

    Ok(())
}

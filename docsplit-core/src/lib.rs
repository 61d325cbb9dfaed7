pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod filenames;
pub mod links;
pub mod segmenter;
pub mod slug;
pub mod template;

use std::path::Path;

// Re-export main types
pub use builder::{CheckReport, ManifestEntry, PlannedPage, SplitBuilder, SplitReport, Splitter};
pub use config::Config;
pub use document::{Document, Section};
pub use error::{Result, SplitError};
pub use filenames::FilenameMap;
pub use links::{LinkRewriter, LinkTarget, UnresolvedLink};
pub use segmenter::{Heading, Segmenter, parse_heading};
pub use slug::slugify;
pub use template::{NavItem, NavigationRenderer};

/// Segment `input` and write its pages plus the manifest into `output_dir`.
pub fn split_document(
    config: Config,
    input: &Path,
    output_dir: &Path,
    manifest: &Path,
) -> Result<SplitReport> {
    let document = Segmenter::new(&config.document).read(input)?;

    SplitBuilder::new()
        .config(config)
        .output_dir(output_dir)
        .manifest(manifest)
        .build(document)?
        .emit_all()
}

/// Segment `input` and report unmapped slugs and dangling links.
pub fn check_document(config: Config, input: &Path) -> Result<CheckReport> {
    let document = Segmenter::new(&config.document).read(input)?;

    Ok(SplitBuilder::new().config(config).build(document)?.check())
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{Config, CopyrightConfig};
use crate::document::{Document, Section};
use crate::error::Result;
use crate::filenames::FilenameMap;
use crate::links::{LinkRewriter, UnresolvedLink};
use crate::template::{NavItem, NavigationRenderer};

/// Rule between a page body and its navigation footer.
const FOOTER_RULE: &str = "\n\n---\n\n";

/// One manifest record, consumed by the site generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub md: String,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct SplitReport {
    pub pages: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub unresolved: Vec<UnresolvedLink>,
}

#[derive(Debug)]
pub struct PlannedPage {
    pub title: String,
    pub slug: String,
    /// `None` when the slug has no filename mapping.
    pub file: Option<String>,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub pages: Vec<PlannedPage>,
    pub subsections: usize,
    pub missing: Vec<String>,
    pub unresolved: Vec<UnresolvedLink>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unresolved.is_empty()
    }
}

pub fn page_filename(index: usize, stem: &str) -> String {
    format!("{index:02}-{stem}.md")
}

pub fn page_url(stem: &str) -> String {
    format!("{stem}.html")
}

pub struct SplitBuilder {
    config: Config,
    filenames: Option<FilenameMap>,
    output_dir: PathBuf,
    manifest: PathBuf,
}

impl Default for SplitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            filenames: None,
            output_dir: PathBuf::from("."),
            manifest: PathBuf::from("toc.yaml"),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Override the `[filenames]` table from the config.
    pub fn filenames(mut self, filenames: FilenameMap) -> Self {
        self.filenames = Some(filenames);
        self
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Manifest location. Relative paths are taken from the output directory.
    pub fn manifest<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest = path.as_ref().to_path_buf();
        self
    }

    pub fn build(self, document: Document) -> Result<Splitter> {
        let navigation = NavigationRenderer::new(&self.config.navigation)?;
        let filenames = self
            .filenames
            .unwrap_or_else(|| FilenameMap::from_config(&self.config.filenames));

        Ok(Splitter {
            document,
            filenames,
            navigation,
            copyright: self.config.copyright,
            manifest_path: self.output_dir.join(&self.manifest),
            output_dir: self.output_dir,
        })
    }
}

pub struct Splitter {
    document: Document,
    filenames: FilenameMap,
    navigation: NavigationRenderer,
    copyright: CopyrightConfig,
    output_dir: PathBuf,
    manifest_path: PathBuf,
}

impl Splitter {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn nav_item(&self, section: &Section) -> Result<NavItem> {
        let stem = self.filenames.stem(&section.slug)?;
        Ok(NavItem {
            title: section.title.clone(),
            url: page_url(stem),
        })
    }

    /// Rewritten body plus navigation footer for the section at `index`.
    fn render_body(&self, index: usize, unresolved: &mut Vec<UnresolvedLink>) -> Result<String> {
        let sections = self.document.sections();
        let section = &sections[index];
        let rewriter = LinkRewriter::new(&self.document, &self.filenames);

        let mut body = String::new();
        for line in &section.lines {
            body.push_str(&rewriter.rewrite_line(&section.slug, line, unresolved)?);
        }

        let previous = match index.checked_sub(1) {
            Some(i) => Some(self.nav_item(&sections[i])?),
            None => None,
        };
        let next = match sections.get(index + 1) {
            Some(section) => Some(self.nav_item(section)?),
            None => None,
        };
        let footer = self.navigation.render(previous.as_ref(), next.as_ref())?;

        body.push_str(FOOTER_RULE);
        body.push_str(&footer);
        body.push('\n');
        Ok(body)
    }

    /// The first page opens with the notice, every other page closes with it.
    fn attach_copyright(&self, index: usize, body: String) -> String {
        let CopyrightConfig { notice, separator } = &self.copyright;
        if notice.is_empty() {
            return body;
        }

        if index == 0 {
            format!("{notice}{separator}{body}")
        } else {
            format!("{body}{separator}{notice}")
        }
    }

    /// Write every page and the manifest. Stops at the first error; whatever
    /// was written before it stays on disk.
    pub fn emit_all(&self) -> Result<SplitReport> {
        std::fs::create_dir_all(&self.output_dir)?;
        let mut manifest = BufWriter::new(File::create(&self.manifest_path)?);
        let mut report = SplitReport {
            manifest: self.manifest_path.clone(),
            ..SplitReport::default()
        };

        for (index, section) in self.document.sections().iter().enumerate() {
            let stem = self.filenames.stem(&section.slug)?;
            let filename = page_filename(index, stem);

            let entry = ManifestEntry {
                md: filename.clone(),
                url: page_url(stem),
                title: section.title.clone(),
            };
            serde_yaml::to_writer(&mut manifest, &[&entry])?;
            manifest.flush()?;

            let body = self.render_body(index, &mut report.unresolved)?;
            let page = self.attach_copyright(index, body);

            let path = self.output_dir.join(&filename);
            std::fs::write(&path, page)?;
            debug!(path = %path.display(), title = %section.title, "wrote page");
            report.pages.push(path);
        }

        info!(
            pages = report.pages.len(),
            unresolved = report.unresolved.len(),
            manifest = %self.manifest_path.display(),
            "split complete"
        );

        Ok(report)
    }

    /// Everything [`Splitter::emit_all`] would complain about, without writing.
    pub fn check(&self) -> CheckReport {
        let rewriter = LinkRewriter::new(&self.document, &self.filenames);

        let pages = self
            .document
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| PlannedPage {
                title: section.title.clone(),
                slug: section.slug.clone(),
                file: self
                    .filenames
                    .stem(&section.slug)
                    .ok()
                    .map(|stem| page_filename(index, stem)),
            })
            .collect();

        CheckReport {
            pages,
            subsections: self.document.subsection_count(),
            missing: self
                .filenames
                .missing(&self.document)
                .into_iter()
                .map(str::to_string)
                .collect(),
            unresolved: rewriter.unresolved(),
        }
    }
}

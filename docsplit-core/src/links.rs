use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::filenames::FilenameMap;

static ANCHOR_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(#([^)]+)\)").expect("anchor link pattern is valid"));

/// Where a `#target` anchor ends up once sections live in separate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Section { slug: &'a str },
    Subsection { section: &'a str, slug: &'a str },
    Unresolved,
}

/// A `](#target)` reference that matched neither a section nor a subsection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedLink {
    /// Slug of the section the reference appears in.
    pub section: String,
    pub target: String,
}

pub struct LinkRewriter<'a> {
    document: &'a Document,
    filenames: &'a FilenameMap,
}

impl<'a> LinkRewriter<'a> {
    pub fn new(document: &'a Document, filenames: &'a FilenameMap) -> Self {
        Self {
            document,
            filenames,
        }
    }

    pub fn resolve<'t>(&self, target: &'t str) -> LinkTarget<'t>
    where
        'a: 't,
    {
        if self.document.is_section(target) {
            LinkTarget::Section { slug: target }
        } else if let Some(section) = self.document.enclosing_section(target) {
            LinkTarget::Subsection {
                section,
                slug: target,
            }
        } else {
            LinkTarget::Unresolved
        }
    }

    /// Rewrite every anchor reference in `line`. References that can't be
    /// resolved are left as they are and pushed onto `unresolved`.
    pub fn rewrite_line(
        &self,
        section: &str,
        line: &str,
        unresolved: &mut Vec<UnresolvedLink>,
    ) -> Result<String> {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;

        for caps in ANCHOR_LINK.captures_iter(line) {
            let (Some(whole), Some(target)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&line[last..whole.start()]);
            last = whole.end();

            match self.resolve(target.as_str()) {
                LinkTarget::Section { slug } => {
                    let stem = self.filenames.stem(slug)?;
                    out.push_str(&format!("]({stem}.html)"));
                }
                LinkTarget::Subsection { section: owner, slug } => {
                    let stem = self.filenames.stem(owner)?;
                    out.push_str(&format!("]({stem}.html#{slug})"));
                }
                LinkTarget::Unresolved => {
                    debug!(section, target = target.as_str(), "unresolved link");
                    unresolved.push(UnresolvedLink {
                        section: section.to_string(),
                        target: target.as_str().to_string(),
                    });
                    out.push_str(whole.as_str());
                }
            }
        }

        out.push_str(&line[last..]);
        Ok(out)
    }

    /// Check every section for references that would stay unresolved, without
    /// touching the filename map.
    pub fn unresolved(&self) -> Vec<UnresolvedLink> {
        let mut found = Vec::new();
        for section in self.document.sections() {
            for line in &section.lines {
                for caps in ANCHOR_LINK.captures_iter(line) {
                    let target = &caps[1];
                    if self.resolve(target) == LinkTarget::Unresolved {
                        found.push(UnresolvedLink {
                            section: section.slug.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        found
    }
}

use std::collections::HashMap;

use crate::error::{Result, SplitError};

/// A top-level division of the source. Becomes one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub slug: String,
    /// Raw lines, each still carrying its line terminator.
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            lines: Vec::new(),
        }
    }

    pub fn body(&self) -> String {
        self.lines.concat()
    }
}

/// The segmented source: ordered sections plus the subsection index.
#[derive(Debug, Default)]
pub struct Document {
    sections: Vec<Section>,
    section_index: HashMap<String, usize>,
    subsections: HashMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, slug: &str) -> Option<&Section> {
        self.section_index.get(slug).map(|&i| &self.sections[i])
    }

    pub fn is_section(&self, slug: &str) -> bool {
        self.section_index.contains_key(slug)
    }

    /// Slug of the section that owns the given subsection.
    pub fn enclosing_section(&self, subsection: &str) -> Option<&str> {
        self.subsections.get(subsection).map(String::as_str)
    }

    pub fn subsection_count(&self) -> usize {
        self.subsections.len()
    }

    pub(crate) fn push_section(&mut self, section: Section) -> Result<()> {
        if let Some(&existing) = self.section_index.get(&section.slug) {
            return Err(SplitError::DuplicateSection {
                slug: section.slug,
                first: self.sections[existing].title.clone(),
                second: section.title,
            });
        }

        self.section_index
            .insert(section.slug.clone(), self.sections.len());
        self.sections.push(section);
        Ok(())
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        if let Some(section) = self.sections.last_mut() {
            section.lines.push(line.to_string());
        }
    }

    pub(crate) fn current(&self) -> Option<&Section> {
        self.sections.last()
    }

    /// Records a subsection under the current section. Returns false when the
    /// slug was already claimed; the first owner wins.
    pub(crate) fn add_subsection(&mut self, slug: String) -> bool {
        let Some(owner) = self.sections.last().map(|s| s.slug.clone()) else {
            return false;
        };

        if self.subsections.contains_key(&slug) {
            return false;
        }
        self.subsections.insert(slug, owner);
        true
    }
}

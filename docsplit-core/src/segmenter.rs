use std::path::Path;

use tracing::{debug, warn};

use crate::config::DocumentConfig;
use crate::document::{Document, Section};
use crate::error::Result;
use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub title: &'a str,
}

/// Match an ATX-style heading: one or more `#` followed by whitespace or the
/// end of the line. The number of markers is the level.
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let content = strip_line_ending(line);
    let level = content.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }

    let rest = &content[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(Heading {
        level,
        title: rest.trim(),
    })
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[derive(Clone, Copy)]
enum State {
    Preamble,
    Body,
}

pub struct Segmenter<'a> {
    config: &'a DocumentConfig,
}

impl<'a> Segmenter<'a> {
    pub fn new(config: &'a DocumentConfig) -> Self {
        Self { config }
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let source = std::fs::read_to_string(path)?;
        self.segment(&source)
    }

    pub fn segment(&self, source: &str) -> Result<Document> {
        let mut document = Document::new();
        let mut state = State::Preamble;

        for line in source.split_inclusive('\n') {
            let is_delimiter = strip_line_ending(line) == self.config.delimiter;

            match state {
                State::Preamble => {
                    if is_delimiter {
                        document.push_section(Section::new(
                            &self.config.intro_title,
                            &self.config.intro_slug,
                        ))?;
                        state = State::Body;
                    }
                    continue;
                }
                State::Body if is_delimiter => break,
                State::Body => {}
            }

            if let Some(heading) = parse_heading(line) {
                // A bare `##` has nothing to name a page after; it stays as text.
                if heading.level == self.config.section_level && !heading.title.is_empty() {
                    if heading.title == self.config.toc_label {
                        document.push_line(line);
                        continue;
                    }

                    let slug = slugify(heading.title);
                    debug!(title = heading.title, %slug, "section");
                    document.push_section(Section::new(heading.title, slug))?;
                    continue;
                }

                if heading.level > self.config.section_level {
                    let slug = slugify(heading.title);
                    if !document.add_subsection(slug.clone()) {
                        warn!(%slug, "subsection slug already defined, keeping the first one");
                    }
                    // One level down, so `###` inside a page reads as `##`.
                    document.push_line(&line[1..]);
                    continue;
                }
            }

            let section_started = document
                .current()
                .is_some_and(|section| !section.lines.is_empty());
            if !section_started && strip_line_ending(line).is_empty() {
                continue;
            }

            document.push_line(line);
        }

        debug!(
            sections = document.len(),
            subsections = document.subsection_count(),
            "segmented document"
        );

        Ok(document)
    }
}

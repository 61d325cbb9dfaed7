use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub navigation: NavigationConfig,
    pub copyright: CopyrightConfig,
    pub filenames: FilenameConfig,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;

        Self::parse(&data).map_err(|source| SplitError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(data: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Like [`Config::read`], but a missing file yields the defaults.
    pub fn read_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::read(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// How the source document is carved into sections.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct DocumentConfig {
    /// Line that ends the preamble and, the second time, the content.
    pub delimiter: String,
    /// Heading level that starts a new section. Deeper headings are subsections.
    pub section_level: usize,
    pub intro_title: String,
    pub intro_slug: String,
    /// Section heading title that stays in the body instead of starting a section.
    pub toc_label: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            delimiter: "---".to_string(),
            section_level: 2,
            intro_title: "Introduction".to_string(),
            intro_slug: "introduction".to_string(),
            toc_label: "Table of Contents".to_string(),
        }
    }
}

/// Tera templates for the prev/next footer. Both see `title` and `url`.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct NavigationConfig {
    pub previous: String,
    pub next: String,
    pub separator: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            previous: "[\u{2190} Previous: {{ title }}]({{ url }})".to_string(),
            next: "[Next: {{ title }} \u{2192}]({{ url }})".to_string(),
            separator: " | ".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct CopyrightConfig {
    pub notice: String,
    pub separator: String,
}

impl Default for CopyrightConfig {
    fn default() -> Self {
        Self {
            notice: String::new(),
            separator: "\n\n---\n\n".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct FilenameConfig {
    /// Use the slug itself when it has no stem instead of failing.
    pub fallback_to_slug: bool,
    pub stems: BTreeMap<String, String>,
}

use std::collections::BTreeMap;

use crate::config::FilenameConfig;
use crate::document::Document;
use crate::error::{Result, SplitError};

/// Slug to ASCII-safe filename stem. Slugs keep non-ASCII letters, so they
/// can't be used as filenames directly.
#[derive(Debug, Clone, Default)]
pub struct FilenameMap {
    stems: BTreeMap<String, String>,
    fallback_to_slug: bool,
}

impl FilenameMap {
    pub fn new(stems: BTreeMap<String, String>) -> Self {
        Self {
            stems,
            fallback_to_slug: false,
        }
    }

    pub fn from_config(config: &FilenameConfig) -> Self {
        Self {
            stems: config.stems.clone(),
            fallback_to_slug: config.fallback_to_slug,
        }
    }

    pub fn fallback_to_slug(mut self, enabled: bool) -> Self {
        self.fallback_to_slug = enabled;
        self
    }

    pub fn stem<'a>(&'a self, slug: &'a str) -> Result<&'a str> {
        match self.stems.get(slug) {
            Some(stem) => Ok(stem.as_str()),
            None if self.fallback_to_slug => Ok(slug),
            None => Err(SplitError::MissingFilename {
                slug: slug.to_string(),
            }),
        }
    }

    /// Section slugs of `document` that [`FilenameMap::stem`] would reject.
    pub fn missing<'d>(&self, document: &'d Document) -> Vec<&'d str> {
        document
            .sections()
            .iter()
            .map(|section| section.slug.as_str())
            .filter(|slug| !self.fallback_to_slug && !self.stems.contains_key(*slug))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilenameMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(slug, stem)| (slug.into(), stem.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentConfig;
    use crate::segmenter::Segmenter;

    #[test]
    fn test_known_slug() {
        let map: FilenameMap = [("字符串", "strings")].into_iter().collect();
        assert_eq!(map.stem("字符串").unwrap(), "strings");
    }

    #[test]
    fn test_missing_slug_is_descriptive() {
        let map = FilenameMap::default();
        let err = map.stem("循环").unwrap_err();

        assert!(matches!(&err, SplitError::MissingFilename { slug } if slug == "循环"));
        assert!(err.to_string().contains("循环"));
    }

    #[test]
    fn test_fallback_uses_slug() {
        let map = FilenameMap::default().fallback_to_slug(true);
        assert_eq!(map.stem("loops").unwrap(), "loops");
    }

    #[test]
    fn test_missing_lists_unmapped_sections() {
        let doc = Segmenter::new(&DocumentConfig::default())
            .segment("---\n## Strings\n## 循环\n")
            .unwrap();
        let map: FilenameMap = [("introduction", "introduction"), ("strings", "strings")]
            .into_iter()
            .collect();

        assert_eq!(map.missing(&doc), vec!["循环"]);
    }
}

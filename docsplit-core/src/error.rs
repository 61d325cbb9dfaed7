use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_yaml::Error),

    /// The slug has no entry in the `[filenames.stems]` table.
    #[error("No filename mapping for slug \"{slug}\"; add it to [filenames.stems]")]
    MissingFilename { slug: String },

    #[error("Sections \"{first}\" and \"{second}\" both produce the slug \"{slug}\"")]
    DuplicateSection {
        slug: String,
        first: String,
        second: String,
    },
}

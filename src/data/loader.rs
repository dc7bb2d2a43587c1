//! JSON document loader.

use crate::error::{Result, ViewerError};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on the local filesystem.
    File(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl Source {
    /// Parse a source string. Anything with an http(s) scheme is a URL,
    /// everything else a path.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ViewerError::InvalidSource("empty source".to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Source::Url(trimmed.to_string()))
        } else if lower.contains("://") {
            Err(ViewerError::InvalidSource(format!(
                "unsupported scheme in {}",
                trimmed
            )))
        } else {
            Ok(Source::File(PathBuf::from(trimmed)))
        }
    }
}

impl FromStr for Source {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        Source::parse(s)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// JSON document loader.
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Fetch a source once and parse it as a document.
    pub fn load<D: DeserializeOwned>(source: &Source) -> Result<D> {
        tracing::debug!("Loading document from {}", source);

        let body = match source {
            Source::File(path) => Self::read_file(path)?,
            Source::Url(url) => Self::fetch_url(url)?,
        };

        Self::parse(&body)
    }

    /// Parse a JSON body as a document.
    pub fn parse<D: DeserializeOwned>(body: &str) -> Result<D> {
        Ok(serde_json::from_str(body)?)
    }

    fn read_file(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| ViewerError::file_open(path.to_path_buf(), e))
    }

    fn fetch_url(url: &str) -> Result<String> {
        let response = reqwest::blocking::get(url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BrahmasutramDocument;
    use std::io::Write;

    #[test]
    fn parse_distinguishes_urls_and_paths() {
        assert_eq!(
            Source::parse("https://example.org/gita.json").unwrap(),
            Source::Url("https://example.org/gita.json".to_string())
        );
        assert_eq!(
            Source::parse(" data/isha.json ").unwrap(),
            Source::File(PathBuf::from("data/isha.json"))
        );
        assert!(matches!(
            Source::parse("ftp://example.org/x.json"),
            Err(ViewerError::InvalidSource(_))
        ));
        assert!(Source::parse("   ").is_err());
    }

    #[test]
    fn load_reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chapters":[{{"id":1,"title":"One"}}]}}"#).unwrap();

        let doc: BrahmasutramDocument =
            DataLoader::load(&Source::File(file.path().to_path_buf())).unwrap();
        assert_eq!(doc.chapters.len(), 1);
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = DataLoader::load::<BrahmasutramDocument>(&Source::File(PathBuf::from(
            "/nonexistent/brahmasutram.json",
        )))
        .unwrap_err();
        assert!(matches!(err, ViewerError::FileOpen { .. }));
        assert!(err.is_load_failure());
    }

    #[test]
    fn malformed_json_is_a_load_failure() {
        let err = DataLoader::parse::<BrahmasutramDocument>("{ not json").unwrap_err();
        assert!(matches!(err, ViewerError::Json(_)));
        assert!(err.is_load_failure());
    }
}

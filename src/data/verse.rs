//! Flat verse documents (shlokas or mantras with optional intro and summary).
//!
//! Data files for this corpus come in two spellings: `shlokas` with
//! `total_shlokas`, or `mantras` with `total_mantras`, and either `title` or
//! `name`. They are normalised once at load time into [`VerseDocument`] so
//! rendering never has to guess which fields exist.

use super::{non_empty, null_as_default};
use serde::Deserialize;
use std::fmt;

/// Which kind of verse a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseKind {
    /// Shlokas (Bhagavad Gita style).
    Shlokas,
    /// Mantras (Upanishad style).
    Mantras,
}

impl VerseKind {
    /// Plural label for stat counts.
    pub fn plural_label(self) -> &'static str {
        match self {
            VerseKind::Shlokas => "Shlokas",
            VerseKind::Mantras => "Mantras",
        }
    }

    /// Devanagari label prefixed to each verse number.
    pub fn number_label(self) -> &'static str {
        match self {
            VerseKind::Shlokas => "श्लोक",
            VerseKind::Mantras => "मन्त्र",
        }
    }

    /// Title of the index page this kind of document belongs to.
    pub fn parent_title(self) -> &'static str {
        match self {
            VerseKind::Shlokas => "Bhagavad Gita",
            VerseKind::Mantras => "Upanishads",
        }
    }
}

/// A verse number, either numeric (`12`) or textual (`"1.2"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VerseNumber {
    /// Plain number.
    Number(u64),
    /// Free-form label.
    Text(String),
}

impl Default for VerseNumber {
    fn default() -> Self {
        VerseNumber::Text(String::new())
    }
}

impl fmt::Display for VerseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseNumber::Number(n) => write!(f, "{}", n),
            VerseNumber::Text(s) => f.write_str(s),
        }
    }
}

/// A link to a recorded explanation, optionally pointing into the video.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoRef {
    /// Video URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Link text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Start timestamp (`M:SS` or `H:MM:SS`).
    #[serde(default)]
    pub start_time: Option<String>,
    /// End timestamp, shown only.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// A single verse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Verse {
    /// Verse number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: VerseNumber,
    /// Devanagari text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sanskrit: String,
    /// Roman transliteration.
    #[serde(default)]
    pub transliteration: Option<String>,
    /// Explanation videos.
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<VideoRef>,
}

/// An introduction or summary passage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Passage {
    /// Passage title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Passage body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Explanation videos.
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<VideoRef>,
}

/// A normalised verse document.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawVerseDocument")]
pub struct VerseDocument {
    /// Display title.
    pub title: String,
    /// Subtitle, empty when the data file has none.
    pub subtitle: String,
    /// Kind of verses held.
    pub kind: VerseKind,
    /// Verses in order.
    pub verses: Vec<Verse>,
    /// Total declared by the data file, if non-zero.
    pub declared_total: Option<u32>,
    /// Link to the lecture playlist.
    pub playlist_url: Option<String>,
    /// Introduction passages.
    pub introduction: Vec<Passage>,
    /// Summary passages.
    pub summary: Vec<Passage>,
}

impl VerseDocument {
    /// Verse count for the header: the declared total, else the number of verses.
    pub fn verse_total(&self) -> usize {
        self.declared_total
            .map(|n| n as usize)
            .unwrap_or(self.verses.len())
    }
}

#[derive(Deserialize)]
struct RawVerseDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    english_title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    total_shlokas: Option<u32>,
    #[serde(default)]
    total_mantras: Option<u32>,
    #[serde(default)]
    shlokas: Option<Vec<Verse>>,
    #[serde(default)]
    mantras: Option<Vec<Verse>>,
    #[serde(default)]
    playlist_url: Option<String>,
    #[serde(default)]
    introduction: Option<Vec<Passage>>,
    #[serde(default)]
    summary: Option<Vec<Passage>>,
}

impl From<RawVerseDocument> for VerseDocument {
    fn from(raw: RawVerseDocument) -> Self {
        let (kind, verses) = match (raw.shlokas, raw.mantras) {
            (Some(shlokas), _) => (VerseKind::Shlokas, shlokas),
            (None, Some(mantras)) => (VerseKind::Mantras, mantras),
            (None, None) => (VerseKind::Mantras, Vec::new()),
        };

        Self {
            title: non_empty(raw.title)
                .or_else(|| non_empty(raw.name))
                .unwrap_or_default(),
            subtitle: non_empty(raw.english_title)
                .or_else(|| non_empty(raw.subtitle))
                .unwrap_or_default(),
            kind,
            verses,
            declared_total: raw
                .total_shlokas
                .filter(|n| *n > 0)
                .or(raw.total_mantras.filter(|n| *n > 0)),
            playlist_url: non_empty(raw.playlist_url),
            introduction: raw.introduction.unwrap_or_default(),
            summary: raw.summary.unwrap_or_default(),
        }
    }
}

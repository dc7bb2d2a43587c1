//! Brahmasutram commentary documents.

use super::{find_node, null_as_default, NodeId, TreeNode};
use serde::Deserialize;

/// Root of the Brahmasutram data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrahmasutramDocument {
    /// Top-level chapters (adhyayas).
    #[serde(default, deserialize_with = "null_as_default")]
    pub chapters: Vec<Chapter>,
}

/// A chapter, made of sections.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    /// Chapter id.
    pub id: NodeId,
    /// Chapter title.
    pub title: String,
    /// Short description shown on the card.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Completion percentage, 0 to 100.
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: u32,
    /// Whether the chapter can be opened.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// Sections (padas) of this chapter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

/// A section, made of adhikaranams.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Section id.
    pub id: NodeId,
    /// Section title.
    pub title: String,
    /// Topics of this section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adhikaranams: Vec<Adhikaranam>,
}

/// A single topic of commentary, the terminal node of this corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct Adhikaranam {
    /// Adhikaranam id.
    pub id: NodeId,
    /// Title.
    pub title: String,
    /// Whether the commentary is complete.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Sutras covered by this topic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sutrams: Vec<String>,
    /// Subject matter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vishaya_vakyam: String,
    /// Doubt or question.
    #[serde(default, deserialize_with = "null_as_default")]
    pub samshayam: String,
    /// Prima facie view.
    #[serde(default, deserialize_with = "null_as_default")]
    pub purvapaksha: String,
    /// Established conclusion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub siddhanta: String,
    /// Shankara's additional points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shankara_additional: Vec<String>,
    /// Links to recorded classes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub youtube_links: Vec<String>,
}

impl BrahmasutramDocument {
    /// Look up a chapter by id.
    pub fn chapter(&self, id: NodeId) -> Option<&Chapter> {
        find_node(&self.chapters, id)
    }
}

impl Chapter {
    /// Find an adhikaranam anywhere in this chapter, along with its section.
    pub fn adhikaranam(&self, id: NodeId) -> Option<(&Section, &Adhikaranam)> {
        self.sections
            .iter()
            .find_map(|section| find_node(&section.adhikaranams, id).map(|a| (section, a)))
    }
}

impl TreeNode for Chapter {
    fn id(&self) -> NodeId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn child_count(&self) -> usize {
        self.sections.len()
    }
}

impl TreeNode for Section {
    fn id(&self) -> NodeId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn child_count(&self) -> usize {
        self.adhikaranams.len()
    }
}

impl TreeNode for Adhikaranam {
    fn id(&self) -> NodeId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn child_count(&self) -> usize {
        self.sutrams.len()
    }
}

//! Multi-level Upanishad documents (sections of subsections).

use super::{find_node, non_empty_string, null_as_default, NodeId, TreeNode};
use serde::Deserialize;

/// Root of a sectioned Upanishad data file.
#[derive(Debug, Clone, Deserialize)]
pub struct UpanishadDocument {
    /// Sanskrit name of the text.
    pub name: String,
    /// English title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_title: String,
    /// Total mantras across all sections.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_mantras: u32,
    /// Link to the lecture playlist, `None` when missing or empty.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub playlist_url: Option<String>,
    /// Top-level sections (e.g. Mundakas).
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<UpanishadSection>,
}

/// A top-level section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpanishadSection {
    /// Section id.
    pub id: NodeId,
    /// Sanskrit title.
    pub title: String,
    /// English title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_title: String,
    /// Short description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Mantras in this section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_mantras: u32,
    /// Subsections (e.g. Khandas).
    #[serde(default, deserialize_with = "null_as_default")]
    pub subsections: Vec<Subsection>,
}

/// A subsection, the terminal node of this corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct Subsection {
    /// Subsection id.
    pub id: NodeId,
    /// Sanskrit title.
    pub title: String,
    /// English title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_title: String,
    /// Number of mantras.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mantra_count: u32,
}

impl UpanishadDocument {
    /// Look up a section by id.
    pub fn section(&self, id: NodeId) -> Option<&UpanishadSection> {
        find_node(&self.sections, id)
    }

    /// Look up a subsection through its parent section.
    pub fn subsection(
        &self,
        section_id: NodeId,
        subsection_id: NodeId,
    ) -> Option<(&UpanishadSection, &Subsection)> {
        let section = self.section(section_id)?;
        find_node(&section.subsections, subsection_id).map(|sub| (section, sub))
    }
}

impl TreeNode for UpanishadSection {
    fn id(&self) -> NodeId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn child_count(&self) -> usize {
        self.subsections.len()
    }
}

impl TreeNode for Subsection {
    fn id(&self) -> NodeId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn child_count(&self) -> usize {
        self.mantra_count as usize
    }
}

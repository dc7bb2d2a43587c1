//! Viewer configuration.
//!
//! Links and container ids that the hosting page decides. Every field has a
//! default matching the static site layout the data files ship with.

/// Default location of the Brahmasutram data file, relative to its page.
pub const BRAHMASUTRAM_DATA_PATH: &str = "../data/brahmasutram/brahmasutram.json";

/// Configuration for links that leave the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Href of the site home page.
    pub home_href: String,
    /// Href of the sibling index page (Upanishads or Bhagavad Gita listing).
    pub index_href: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            home_href: "../index.html".to_string(),
            index_href: "index.html".to_string(),
        }
    }
}

/// Configuration for the container a viewer renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Id of the element whose contents get replaced.
    pub container_id: String,
    /// Message shown in place of all content when loading fails.
    pub load_error_message: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            container_id: "app".to_string(),
            load_error_message: "Error loading content. Please check the data file.".to_string(),
        }
    }
}

impl ContainerConfig {
    /// Container defaults for the Brahmasutram page, whose error names its data file.
    pub fn brahmasutram() -> Self {
        Self {
            load_error_message:
                "Error loading content. Please check data/brahmasutram.json file.".to_string(),
            ..Self::default()
        }
    }
}

/// Combined configuration for a mounted viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    /// External links.
    pub links: LinkConfig,
    /// Container settings.
    pub container: ContainerConfig,
}

impl ViewerConfig {
    /// Configuration for the Brahmasutram page.
    pub fn brahmasutram() -> Self {
        Self {
            links: LinkConfig::default(),
            container: ContainerConfig::brahmasutram(),
        }
    }

    /// Override the container id.
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container.container_id = id.into();
        self
    }

    /// Override the home href.
    pub fn with_home_href(mut self, href: impl Into<String>) -> Self {
        self.links.home_href = href.into();
        self
    }

    /// Override the index href.
    pub fn with_index_href(mut self, href: impl Into<String>) -> Self {
        self.links.index_href = href.into();
        self
    }
}

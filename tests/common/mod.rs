//! Shared helpers for integration tests.

#![allow(dead_code)]

use scripture_viewer::controller::{View, Viewer};
use scripture_viewer::{Source, ViewerConfig};
use std::path::PathBuf;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Mount a viewer on a fixture with the given configuration.
pub fn mount_with<V: View>(config: &ViewerConfig, name: &str) -> Viewer<V> {
    Viewer::mount(config, &Source::File(fixture_path(name)))
}

/// Mount a viewer on a fixture with the default configuration.
pub fn mount<V: View>(name: &str) -> Viewer<V> {
    mount_with(&ViewerConfig::default(), name)
}

/// Count occurrences of a CSS class attribute prefix in rendered HTML.
pub fn count_class(html: &str, class: &str) -> usize {
    html.matches(&format!("class=\"{}", class)).count()
}

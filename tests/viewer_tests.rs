//! Navigation and rendering through mounted viewers.

mod common;

use common::{count_class, mount};
use scripture_viewer::controller::{
    BrahmasutramController, BrahmasutramView, UpanishadController, UpanishadView, VerseController,
};
use scripture_viewer::{Action, Transition, ViewerError};

#[test]
fn root_view_renders_a_card_per_top_level_node() {
    let brahmasutram = mount::<BrahmasutramController>("brahmasutram.json");
    let chapters = brahmasutram
        .controller()
        .map(|c| c.document().chapters.len())
        .unwrap();
    assert_eq!(count_class(brahmasutram.html(), "chapter-card"), chapters);

    let mundaka = mount::<UpanishadController>("mundaka.json");
    let sections = mundaka
        .controller()
        .map(|c| c.document().sections.len())
        .unwrap();
    assert_eq!(count_class(mundaka.html(), "nav-card\""), sections);
}

#[test]
fn clicking_a_disabled_chapter_changes_nothing() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    let html_before = viewer.html().to_string();
    let state_before = viewer.controller().unwrap().state().clone();

    assert_eq!(viewer.apply(Action::ShowMid(2)).unwrap(), Transition::Ignored);
    assert_eq!(viewer.html(), html_before);
    assert_eq!(viewer.controller().unwrap().state(), &state_before);
}

#[test]
fn disabled_chapter_card_has_no_region() {
    let viewer = mount::<BrahmasutramController>("brahmasutram.json");
    assert!(viewer.regions().region_for(Action::ShowMid(1)).is_some());
    assert!(viewer.regions().region_for(Action::ShowMid(2)).is_none());
    assert!(viewer.regions().region_for(Action::ShowMid(3)).is_some());
}

#[test]
fn entering_a_chapter_expands_only_its_first_section() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    viewer.apply(Action::ShowMid(1)).unwrap();
    viewer.apply(Action::Toggle(2)).unwrap();
    viewer.apply(Action::ShowRoot).unwrap();
    viewer.apply(Action::ShowMid(1)).unwrap();

    let state = viewer.controller().unwrap().state();
    assert_eq!(state.view(), BrahmasutramView::Chapter);
    assert_eq!(state.expanded().sorted_ids(), vec![1]);
    assert_eq!(count_class(viewer.html(), "topic-item"), 2);
}

#[test]
fn chapter_with_empty_first_section_starts_collapsed() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    viewer.apply(Action::ShowMid(3)).unwrap();

    assert!(viewer.controller().unwrap().state().expanded().is_empty());
    assert_eq!(count_class(viewer.html(), "topics-grid"), 0);
}

#[test]
fn toggling_twice_restores_the_expanded_set() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    viewer.apply(Action::ShowMid(1)).unwrap();
    let before = viewer.controller().unwrap().state().expanded().clone();
    let html_before = viewer.html().to_string();

    for id in [1, 2] {
        viewer.apply(Action::Toggle(id)).unwrap();
        viewer.apply(Action::Toggle(id)).unwrap();
    }

    assert_eq!(viewer.controller().unwrap().state().expanded(), &before);
    assert_eq!(viewer.html(), html_before);
}

#[test]
fn reentering_a_chapter_matches_a_fresh_entry() {
    let mut fresh = mount::<BrahmasutramController>("brahmasutram.json");
    fresh.apply(Action::ShowMid(1)).unwrap();

    let mut revisited = mount::<BrahmasutramController>("brahmasutram.json");
    revisited.apply(Action::ShowMid(1)).unwrap();
    revisited.apply(Action::ShowRoot).unwrap();
    revisited.apply(Action::ShowMid(1)).unwrap();

    assert_eq!(
        revisited.controller().unwrap().state(),
        fresh.controller().unwrap().state()
    );
    assert_eq!(revisited.html(), fresh.html());
}

#[test]
fn dangling_leaf_renders_only_the_not_found_message() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    viewer.apply(Action::ShowLeaf(1, 404)).unwrap();
    assert_eq!(viewer.html(), "<p>Adhikaranam not found</p>");
    assert!(viewer.regions().is_empty());
}

#[test]
fn clicks_follow_the_region_table() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");

    let chapter = viewer.regions().region_for(Action::ShowMid(1)).unwrap().to_string();
    viewer.dispatch(&chapter).unwrap();
    assert!(viewer.html().contains("← Back to Chapters"));

    let topic = viewer
        .regions()
        .region_for(Action::ShowLeaf(1, 1))
        .unwrap()
        .to_string();
    assert_eq!(viewer.dispatch(&topic).unwrap(), Transition::RENDERED_AT_TOP);
    assert!(viewer.scroll_to_top());
    assert!(viewer.html().contains("Qualifications of the seeker"));

    let back = viewer.regions().region_for(Action::ShowMid(1)).unwrap().to_string();
    viewer.dispatch(&back).unwrap();
    assert_eq!(
        viewer.controller().unwrap().state().view(),
        BrahmasutramView::Chapter
    );
    assert!(!viewer.scroll_to_top());
}

#[test]
fn stale_region_ids_are_rejected() {
    let mut viewer = mount::<BrahmasutramController>("brahmasutram.json");
    let last = format!("r{}", viewer.regions().len());
    assert!(matches!(
        viewer.dispatch(&last),
        Err(ViewerError::UnboundRegion { .. })
    ));
}

#[test]
fn history_pop_returns_to_the_root_view() {
    let mut viewer = mount::<UpanishadController>("mundaka.json");
    viewer.apply(Action::ShowLeaf(1, 2)).unwrap();
    assert!(viewer.html().contains("13 mantras"));

    viewer.history_pop().unwrap();
    assert_eq!(
        viewer.controller().unwrap().state().view(),
        UpanishadView::Sections
    );
    assert!(viewer.html().contains("Mundaka Upanishad"));
}

#[test]
fn upanishad_breadcrumb_leads_back_up() {
    let mut viewer = mount::<UpanishadController>("mundaka.json");
    viewer.apply(Action::ShowLeaf(2, 1)).unwrap();

    let section = viewer.regions().region_for(Action::ShowMid(2)).unwrap().to_string();
    viewer.dispatch(&section).unwrap();
    assert_eq!(count_class(viewer.html(), "nav-card\""), 1);

    let root = viewer.regions().region_for(Action::ShowRoot).unwrap().to_string();
    viewer.dispatch(&root).unwrap();
    assert_eq!(count_class(viewer.html(), "nav-card\""), 2);
}

#[test]
fn verse_viewer_renders_everything_at_once() {
    let mut viewer = mount::<VerseController>("gita_dhyanam.json");
    let html = viewer.html().to_string();

    assert_eq!(count_class(&html, "verse-container"), 2);
    assert!(html.contains("<strong>9</strong> Shlokas"));
    assert!(html.contains("&amp;t=135s"));
    assert!(html.contains("&amp;t=3723s"));
    assert!(html.contains("&amp;t=45s"));
    assert!(html.contains("📝 Summary"));
    assert!(viewer.regions().is_empty());

    assert_eq!(viewer.apply(Action::ShowRoot).unwrap(), Transition::Ignored);
    assert_eq!(viewer.html(), html);
}

#[test]
fn broken_json_shows_the_error_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"chapters\": [ ").unwrap();

    let viewer: scripture_viewer::controller::Viewer<UpanishadController> =
        scripture_viewer::controller::Viewer::mount(
            &scripture_viewer::ViewerConfig::default(),
            &scripture_viewer::Source::File(path),
        );

    assert!(!viewer.is_loaded());
    assert_eq!(
        viewer.html(),
        "<p>Error loading content. Please check the data file.</p>"
    );
}

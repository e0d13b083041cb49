use crate::config::SiteConfig;
use crate::core::agents::{AgentFilterCriteria, AgentProfile};
use crate::core::app::{AgentEntry, SiteApp};
use crate::core::storage::MemoryStore;
use crate::core::view::{Outcome, UiEvent};
use crate::tests::common::*;
use crate::tests::mocks::RecordingView;

fn form(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn visible(view: &RecordingView) -> Vec<usize> {
    let mut ids: Vec<usize> = view
        .listings_visible
        .iter()
        .filter(|(_, v)| **v)
        .map(|(id, _)| *id)
        .collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_start_normalizes_with_form_defaults() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();
    app.start(&mut view, form(&[("type", "House"), ("location", "")]));
    assert_eq!(visible(&view), vec![0, 2]);
}

#[test]
fn test_featured_card_outside_results_is_untouched() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();
    app.handle(UiEvent::FilterChanged(form(&[("location", "zzz")])), &mut view);
    assert!(!view.listings_visible.contains_key(&3));
    assert_eq!(view.listings_visible.len(), 3);
}

#[test]
fn test_filter_submit_prevents_default() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();
    let outcome = app.handle(UiEvent::FilterChanged(Vec::new()), &mut view);
    assert_eq!(outcome, Outcome::PreventDefault);
    assert_eq!(visible(&view), vec![0, 1, 2]);
}

#[test]
fn test_live_filter_narrows_and_widens() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();

    app.handle(UiEvent::FilterChanged(form(&[("minPrice", "500000")])), &mut view);
    assert_eq!(visible(&view), vec![1, 2]);

    app.handle(
        UiEvent::FilterChanged(form(&[("minPrice", "500000"), ("bedrooms", "4")])),
        &mut view,
    );
    assert_eq!(visible(&view), vec![2]);

    app.handle(UiEvent::FilterChanged(form(&[("amenities", "gym")])), &mut view);
    assert_eq!(visible(&view), vec![1]);

    app.handle(UiEvent::FilterChanged(form(&[("maxPrice", "")])), &mut view);
    assert_eq!(visible(&view), vec![0, 1, 2]);
}

#[test]
fn test_agent_filter_by_language_and_query() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();

    app.handle(
        UiEvent::AgentFilterChanged(AgentFilterCriteria::new("", "English", "")),
        &mut view,
    );
    assert_eq!(view.agents_visible.get(&0), Some(&true));
    assert_eq!(view.agents_visible.get(&1), Some(&true));
    assert_eq!(view.agents_visible.get(&2), Some(&false));
    // Header card is not part of the directory
    assert!(!view.agents_visible.contains_key(&3));

    app.handle(
        UiEvent::AgentFilterChanged(AgentFilterCriteria::new("rent", "", "")),
        &mut view,
    );
    assert_eq!(view.agents_visible.get(&0), Some(&false));
    assert_eq!(view.agents_visible.get(&2), Some(&true));
}

#[test]
fn test_agent_filter_by_specialty() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();
    app.handle(
        UiEvent::AgentFilterChanged(AgentFilterCriteria::new("", "", "Commercial")),
        &mut view,
    );
    assert_eq!(view.agents_visible.get(&1), Some(&true));
    assert_eq!(view.agents_visible.get(&0), Some(&false));
    assert_eq!(view.agents_visible.get(&2), Some(&false));
}

#[test]
fn test_unnamed_directory_card_is_filtered() {
    let mut page = create_test_page();
    page.agents.push(AgentEntry {
        profile: AgentProfile::default(),
        in_directory: true,
    });
    let unnamed = page.agents.len() - 1;
    let mut app: SiteApp<_, String> =
        SiteApp::new(MemoryStore::new(), &SiteConfig::default(), page);
    let mut view = RecordingView::default();

    app.handle(
        UiEvent::AgentFilterChanged(AgentFilterCriteria::new("maria", "", "")),
        &mut view,
    );
    assert_eq!(view.agents_visible.get(&unnamed), Some(&false));

    app.handle(
        UiEvent::AgentFilterChanged(AgentFilterCriteria::default()),
        &mut view,
    );
    assert_eq!(view.agents_visible.get(&unnamed), Some(&true));
}

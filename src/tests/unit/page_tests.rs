use crate::core::view::UiEvent;
use crate::tests::common::*;
use crate::tests::mocks::RecordingView;

#[test]
fn test_tab_click_selects_exactly_one() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();

    app.handle(UiEvent::TabClicked(1), &mut view);
    assert_eq!(view.tabs.get(&0), Some(&false));
    assert_eq!(view.tabs.get(&1), Some(&true));
    assert_eq!(view.tabs.get(&2), Some(&false));
    assert_eq!(app.selected_tab(), Some(1));

    app.handle(UiEvent::TabClicked(2), &mut view);
    assert_eq!(view.tabs.get(&1), Some(&false));
    assert_eq!(view.tabs.get(&2), Some(&true));
}

#[test]
fn test_search_summary() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();

    app.handle(
        UiEvent::SearchClicked {
            location: "  Austin ".into(),
            property_type: "House".into(),
        },
        &mut view,
    );
    app.handle(
        UiEvent::SearchClicked {
            location: "".into(),
            property_type: "Condo".into(),
        },
        &mut view,
    );

    assert_eq!(
        view.notifications,
        vec![
            "Searching for House in \"Austin\"...",
            "Searching for Condo in \"anywhere\"...",
        ]
    );
}

#[test]
fn test_favorite_toggles() {
    let (mut app, _) = create_test_site();
    let mut view = RecordingView::default();

    app.handle(UiEvent::FavoriteClicked(1), &mut view);
    assert!(app.is_favorite(1));
    assert_eq!(view.favorites.get(&1), Some(&true));

    app.handle(UiEvent::FavoriteClicked(1), &mut view);
    assert!(!app.is_favorite(1));
    assert_eq!(view.favorites.get(&1), Some(&false));

    app.handle(UiEvent::FavoriteClicked(9), &mut view);
    assert!(!view.favorites.contains_key(&9));
}

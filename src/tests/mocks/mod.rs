//! Test doubles for the page and the browser store.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use mockall::mock;

use crate::core::agents::ContactSummary;
use crate::core::cart::{CartRender, ToggleAppearance};
use crate::core::error::{Result, SiteError};
use crate::core::overlay::Overlay;
use crate::core::property::SelectedProperty;
use crate::core::storage::KeyValueStore;
use crate::core::view::{CardId, SiteView};

// ============================================================================
// Key-Value Store Mock
// ============================================================================

mock! {
    pub Store {}

    impl KeyValueStore for Store {
        fn get_item(&self, key: &str) -> Result<Option<String>>;
        fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    }
}

/// A store whose every read and write fails, like `localStorage` in a
/// locked-down browser profile.
pub fn unavailable_store() -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_get_item()
        .returning(|_| Err(SiteError::Storage("access denied".into())));
    store
        .expect_set_item()
        .returning(|_, _| Err(SiteError::Storage("quota exceeded".into())));
    store
}

// ============================================================================
// Recording View
// ============================================================================

/// Toggle button as last rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: String,
    pub has_class: bool,
}

/// `SiteView` that records what the app asked for. Elements are ids.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub tabs: HashMap<usize, bool>,
    pub favorites: HashMap<usize, bool>,
    pub cart: Option<CartRender>,
    pub cart_renders: usize,
    pub toggles: HashMap<CardId, ToggleButton>,
    pub listings_visible: HashMap<CardId, bool>,
    pub agents_visible: HashMap<usize, bool>,
    pub quick_view: Option<SelectedProperty>,
    pub contact: Option<ContactSummary>,
    pub contact_resets: usize,
    pub active_overlays: HashSet<Overlay>,
    pub focused: Option<String>,
    /// Elements no longer on the page; focusing them fails.
    pub detached: HashSet<String>,
    pub primary: HashMap<Overlay, String>,
    pub focusable: HashMap<Overlay, Vec<String>>,
    pub notifications: Vec<String>,
}

impl RecordingView {
    /// A view with the standard page controls.
    pub fn with_page_controls() -> Self {
        let mut view = Self::default();
        view.primary
            .insert(Overlay::CartPanel, "closeCartPanelBtn".to_string());
        view.primary
            .insert(Overlay::QuickView, "closeModalBtn".to_string());
        view.primary
            .insert(Overlay::AgentContact, "visitorName".to_string());
        view.focusable.insert(
            Overlay::AgentContact,
            ["closeAgentModal", "visitorName", "visitorEmail", "agentContactCancel", "send"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        view
    }

    pub fn focus_on(&mut self, id: &str) {
        self.focused = Some(id.to_string());
    }

    pub fn count(&self) -> usize {
        self.cart.as_ref().map(CartRender::count).unwrap_or(0)
    }

    pub fn label_of(&self, card: CardId) -> Option<&str> {
        self.toggles.get(&card).map(|t| t.label.as_str())
    }
}

impl SiteView for RecordingView {
    type Element = String;

    fn set_tab_selected(&mut self, index: usize, selected: bool) {
        self.tabs.insert(index, selected);
    }

    fn set_favorite(&mut self, index: usize, active: bool) {
        self.favorites.insert(index, active);
    }

    fn render_cart(&mut self, cart: &CartRender) {
        self.cart = Some(cart.clone());
        self.cart_renders += 1;
    }

    fn set_toggle(&mut self, card: CardId, appearance: &ToggleAppearance<'_>) {
        self.toggles.insert(
            card,
            ToggleButton {
                label: appearance.label.to_string(),
                has_class: appearance.is_selected(),
            },
        );
    }

    fn set_listing_visible(&mut self, card: CardId, visible: bool) {
        self.listings_visible.insert(card, visible);
    }

    fn set_agent_visible(&mut self, agent: usize, visible: bool) {
        self.agents_visible.insert(agent, visible);
    }

    fn render_quick_view(&mut self, record: &SelectedProperty) {
        self.quick_view = Some(record.clone());
    }

    fn render_contact(&mut self, summary: &ContactSummary) {
        self.contact = Some(summary.clone());
    }

    fn reset_contact_form(&mut self) {
        self.contact_resets += 1;
    }

    fn set_overlay_active(&mut self, overlay: Overlay, active: bool) {
        if active {
            self.active_overlays.insert(overlay);
        } else {
            self.active_overlays.remove(&overlay);
        }
    }

    fn active_element(&self) -> Option<String> {
        self.focused.clone()
    }

    fn primary_control(&self, overlay: Overlay) -> Option<String> {
        self.primary.get(&overlay).cloned()
    }

    fn focusable_controls(&self, overlay: Overlay) -> Vec<String> {
        self.focusable.get(&overlay).cloned().unwrap_or_default()
    }

    fn focus(&mut self, element: &String) -> Result<()> {
        if self.detached.contains(element) {
            return Err(SiteError::Focus(format!("{element} is detached")));
        }
        self.focused = Some(element.clone());
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

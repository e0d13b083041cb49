//! Page session state.
//!
//! `SiteApp` is built once when the page is bound and then fed `UiEvent`s.
//! Each `handle` call runs to completion: mutate, persist, then push the
//! result to the view. Nothing here fails outward; errors are logged and
//! the page keeps working.

use crate::config::SiteConfig;
use crate::core::agents::{self, AgentFilterCriteria, AgentProfile, ContactSummary};
use crate::core::cart::CartController;
use crate::core::filter::{self, FilterCriteria, ListingFacts};
use crate::core::overlay::{self, Overlay, OverlayController};
use crate::core::property::SelectedProperty;
use crate::core::storage::KeyValueStore;
use crate::core::view::{CardId, Key, Outcome, SiteView, UiEvent};

/// A listing card bound to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: CardId,
    pub record: SelectedProperty,
    /// Inside the `.cards` results container, so subject to the filter form.
    pub in_results: bool,
}

/// An agent card bound to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEntry {
    pub profile: AgentProfile,
    /// Inside the agent directory, so subject to the agent filter.
    pub in_directory: bool,
}

/// Everything `SiteApp` needs to know about the page at bind time.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub listings: Vec<Listing>,
    pub agents: Vec<AgentEntry>,
    pub tab_count: usize,
    pub favorite_count: usize,
}

pub struct SiteApp<S, E> {
    cart: CartController<S>,
    overlays: OverlayController<E>,
    listings: Vec<Listing>,
    agents: Vec<AgentEntry>,
    tab_count: usize,
    selected_tab: Option<usize>,
    favorites: Vec<bool>,
    /// Agent shown in the contact dialog.
    contact: Option<ContactSummary>,
}

impl<S, E> SiteApp<S, E>
where
    S: KeyValueStore,
    E: Clone + PartialEq,
{
    pub fn new(store: S, config: &SiteConfig, page: PageContent) -> Self {
        Self {
            cart: CartController::new(store, config.cart.clone()),
            overlays: OverlayController::new(),
            listings: page.listings,
            agents: page.agents,
            tab_count: page.tab_count,
            selected_tab: None,
            favorites: vec![false; page.favorite_count],
            contact: None,
        }
    }

    pub fn cart(&self) -> &CartController<S> {
        &self.cart
    }

    pub fn overlays(&self) -> &OverlayController<E> {
        &self.overlays
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn selected_tab(&self) -> Option<usize> {
        self.selected_tab
    }

    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.get(index).copied().unwrap_or(false)
    }

    /// Show the restored selection and normalize listing visibility with
    /// the filter form's current values.
    pub fn start<V>(&mut self, view: &mut V, filter_fields: Vec<(String, String)>)
    where
        V: SiteView<Element = E>,
    {
        log::info!(
            "[site:init] {} listings, {} agents, {} selected",
            self.listings.len(),
            self.agents.len(),
            self.cart.len()
        );
        self.render_cart(view);
        self.apply_filter(&FilterCriteria::from_fields(filter_fields), view);
    }

    pub fn handle<V>(&mut self, event: UiEvent<E>, view: &mut V) -> Outcome
    where
        V: SiteView<Element = E>,
    {
        match event {
            UiEvent::TabClicked(index) => {
                for tab in 0..self.tab_count {
                    view.set_tab_selected(tab, tab == index);
                }
                self.selected_tab = (index < self.tab_count).then_some(index);
                Outcome::Default
            }
            UiEvent::SearchClicked {
                location,
                property_type,
            } => {
                let location = location.trim();
                let location = if location.is_empty() { "anywhere" } else { location };
                view.notify(&format!("Searching for {property_type} in \"{location}\"..."));
                Outcome::Default
            }
            UiEvent::FavoriteClicked(index) => {
                if let Some(active) = self.favorites.get_mut(index) {
                    *active = !*active;
                    view.set_favorite(index, *active);
                }
                Outcome::Default
            }
            UiEvent::ToggleClicked(card) => {
                match self.listings.iter().find(|l| l.id == card) {
                    Some(listing) => {
                        let state = self.cart.toggle(listing.record.clone());
                        log::debug!("[cart] card {card} now {state:?}");
                    }
                    None => log::debug!("[cart] toggle for unknown card {card}"),
                }
                self.render_cart(view);
                Outcome::Default
            }
            UiEvent::RemoveClicked(index) => {
                if let Err(e) = self.cart.remove(index) {
                    log::warn!("[cart] ignoring remove: {e}");
                }
                self.render_cart(view);
                Outcome::Default
            }
            UiEvent::CartOpened { trigger } => {
                self.render_cart(view);
                self.open_overlay(Overlay::CartPanel, trigger, view);
                Outcome::PreventDefault
            }
            UiEvent::CartClosed => {
                self.close_overlay(Overlay::CartPanel, view);
                Outcome::Default
            }
            UiEvent::FilterChanged(fields) => {
                self.apply_filter(&FilterCriteria::from_fields(fields), view);
                Outcome::PreventDefault
            }
            UiEvent::AgentFilterChanged(criteria) => {
                self.apply_agent_filter(&criteria, view);
                Outcome::Default
            }
            UiEvent::QuickViewOpened { card, trigger } => {
                let record = self
                    .listings
                    .iter()
                    .find(|l| l.id == card)
                    .map(|l| l.record.clone());
                if let Some(record) = record {
                    view.render_quick_view(&record);
                    self.open_overlay(Overlay::QuickView, trigger, view);
                }
                Outcome::Default
            }
            UiEvent::QuickViewClosed => {
                self.close_overlay(Overlay::QuickView, view);
                Outcome::Default
            }
            UiEvent::ContactOpened {
                agent_name,
                trigger,
            } => {
                let summary =
                    agents::find_agent(self.agents.iter().map(|a| &a.profile), &agent_name)
                        .map(ContactSummary::for_agent);
                match summary {
                    Some(summary) => {
                        view.render_contact(&summary);
                        self.contact = Some(summary);
                        self.open_overlay(Overlay::AgentContact, trigger, view);
                    }
                    None => log::debug!("[agents] no card for '{agent_name}'"),
                }
                Outcome::Default
            }
            UiEvent::ContactClosed => {
                self.close_overlay(Overlay::AgentContact, view);
                Outcome::Default
            }
            UiEvent::ContactSubmitted {
                visitor_name,
                visitor_email,
            } => {
                let agent_name = self
                    .contact
                    .as_ref()
                    .map(|c| c.agent_name.as_str())
                    .unwrap_or("the agent");
                log::debug!("[agents] contact request from '{visitor_name}' for '{agent_name}'");
                view.notify(&agents::confirmation_message(agent_name, &visitor_email));
                view.reset_contact_form();
                self.close_overlay(Overlay::AgentContact, view);
                Outcome::PreventDefault
            }
            UiEvent::BackdropClicked(overlay) => {
                if self.overlays.is_active(overlay) {
                    self.close_overlay(overlay, view);
                }
                Outcome::Default
            }
            UiEvent::KeyDown { key, shift } => self.handle_key(key, shift, view),
        }
    }

    fn handle_key<V>(&mut self, key: Key, shift: bool, view: &mut V) -> Outcome
    where
        V: SiteView<Element = E>,
    {
        match key {
            Key::Escape => {
                if let Some(overlay) = self.overlays.escape_target() {
                    self.close_overlay(overlay, view);
                }
                Outcome::Default
            }
            Key::Tab => {
                let Some(trap) = self.overlays.focus_trap() else {
                    return Outcome::Default;
                };
                let controls = view.focusable_controls(trap);
                let current = view.active_element();
                match overlay::wrap_focus(&controls, current.as_ref(), shift) {
                    Some(target) => {
                        if let Err(e) = view.focus(target) {
                            log::debug!("[focus] trap wrap failed: {e}");
                        }
                        Outcome::PreventDefault
                    }
                    None => Outcome::Default,
                }
            }
            Key::Other => Outcome::Default,
        }
    }

    fn render_cart<V>(&self, view: &mut V)
    where
        V: SiteView<Element = E>,
    {
        view.render_cart(&self.cart.render());
        for listing in &self.listings {
            let state = self.cart.toggle_state(&listing.record.identity());
            view.set_toggle(listing.id, &self.cart.appearance(state));
        }
    }

    fn apply_filter<V>(&self, criteria: &FilterCriteria, view: &mut V)
    where
        V: SiteView<Element = E>,
    {
        for listing in self.listings.iter().filter(|l| l.in_results) {
            let facts = ListingFacts::from_record(&listing.record);
            view.set_listing_visible(listing.id, filter::matches(&facts, criteria));
        }
    }

    fn apply_agent_filter<V>(&self, criteria: &AgentFilterCriteria, view: &mut V)
    where
        V: SiteView<Element = E>,
    {
        for (index, agent) in self.agents.iter().enumerate() {
            if agent.in_directory {
                view.set_agent_visible(index, agents::matches(&agent.profile, criteria));
            }
        }
    }

    fn open_overlay<V>(&mut self, overlay: Overlay, trigger: Option<E>, view: &mut V)
    where
        V: SiteView<Element = E>,
    {
        let return_to = trigger.or_else(|| view.active_element());
        self.overlays.open(overlay, return_to);
        view.set_overlay_active(overlay, true);
        if let Some(control) = view.primary_control(overlay) {
            if let Err(e) = view.focus(&control) {
                log::debug!("[focus] could not focus {}: {e}", overlay.label());
            }
        }
    }

    fn close_overlay<V>(&mut self, overlay: Overlay, view: &mut V)
    where
        V: SiteView<Element = E>,
    {
        view.set_overlay_active(overlay, false);
        if let Some(Some(target)) = self.overlays.close(overlay) {
            if let Err(e) = view.focus(&target) {
                log::debug!("[focus] could not restore focus after {}: {e}", overlay.label());
            }
        }
    }
}

//! Reading the page.
//!
//! Element ids and selectors the site markup uses, plus the readers that turn
//! cards and forms into core values. Every lookup treats a missing element as
//! absent rather than an error.

use property_site::core::agents::{AgentFilterCriteria, AgentProfile};
use property_site::core::app::{AgentEntry, Listing, PageContent};
use property_site::core::overlay::Overlay;
use property_site::core::property::{self, ListingCard};
use property_site::core::view::CardId;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlImageElement};

pub const CARD: &str = ".card";
pub const RESULTS: &str = ".cards";
pub const SELECT_BTN: &str = ".select-btn";
pub const QUICK_VIEW_BTN: &str = ".quick-view-btn";
pub const FAVORITE_BTN: &str = ".favorite-btn";
pub const TAB: &str = ".tab";
pub const CONTACT_BTN: &str = ".contact-btn[data-agent]";
pub const REMOVE_BTN: &str = ".remove-cart-btn";
pub const FOCUSABLE: &str = "a[href], button:not([disabled]), textarea, input, select";

pub const CARD_ID_ATTR: &str = "data-card-id";

pub const CART_BTN: &str = "cartBtn";
pub const CART_PANEL: &str = "cartSidePanel";
pub const CLOSE_CART_BTN: &str = "closeCartPanelBtn";
pub const CART_COUNT: &str = "cartCount";
pub const CART_PROPERTIES: &str = "cartProperties";
pub const QUICK_VIEW_MODAL: &str = "quickViewModal";
pub const MODAL_DETAILS: &str = "modalDetails";
pub const CLOSE_MODAL_BTN: &str = "closeModalBtn";
pub const FILTER_FORM: &str = "propertyFilterForm";
pub const SEARCH_BTN: &str = "searchBtn";
pub const LOCATION: &str = "location";
pub const PROPERTY_TYPE: &str = "ptype";
pub const AGENTS_LIST: &str = "agentsList";
pub const AGENT_SEARCH: &str = "agentSearch";
pub const AGENT_LANG: &str = "agentLang";
pub const AGENT_SPECIALTY: &str = "agentSpecialty";
pub const AGENT_FILTER_BTN: &str = "agentFilterBtn";
pub const CONTACT_MODAL: &str = "agentContactModal";
pub const CLOSE_CONTACT_BTN: &str = "closeAgentModal";
pub const CONTACT_NAME: &str = "agentModalName";
pub const CONTACT_INFO: &str = "agentModalInfo";
pub const CONTACT_FORM: &str = "agentContactForm";
pub const CONTACT_CANCEL: &str = "agentContactCancel";
pub const VISITOR_NAME: &str = "visitorName";
pub const VISITOR_EMAIL: &str = "visitorEmail";
pub const SITE_CONFIG: &str = "siteConfig";

/// Root element id of each overlay.
pub fn overlay_id(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::AgentContact => CONTACT_MODAL,
        Overlay::QuickView => QUICK_VIEW_MODAL,
        Overlay::CartPanel => CART_PANEL,
    }
}

/// Control focused when the overlay opens.
pub fn primary_control_id(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::AgentContact => VISITOR_NAME,
        Overlay::QuickView => CLOSE_MODAL_BTN,
        Overlay::CartPanel => CLOSE_CART_BTN,
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// All matches of `selector` under `root`, in document order.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Vec<Element> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(document) = node.dyn_ref::<Document>() {
        document.query_selector_all(selector)
    } else if let Some(element) = node.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        log::debug!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// `value` of an input, select or textarea by id; empty when absent.
pub fn field_value(document: &Document, id: &str) -> String {
    by_id(document, id)
        .and_then(|el| js_sys::Reflect::get(&el, &"value".into()).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// `(name, value)` pairs of a form's text entries, in form order.
pub fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

pub fn card_id(element: &Element) -> Option<CardId> {
    element.get_attribute(CARD_ID_ATTR)?.parse().ok()
}

/// A listing card element read through `ListingCard`.
pub struct DomCard<'a>(pub &'a Element);

impl ListingCard for DomCard<'_> {
    fn image_src(&self) -> Option<String> {
        query(self.0, "img")?
            .dyn_into::<HtmlImageElement>()
            .ok()
            .map(|img| img.src())
    }

    fn price_text(&self) -> Option<String> {
        query(self.0, ".price")?.text_content()
    }

    fn meta_text(&self) -> Option<String> {
        query(self.0, ".meta")?.text_content()
    }

    fn badges_text(&self) -> Option<String> {
        query(self.0, ".badges")?.text_content()
    }

    fn detail_items(&self) -> Vec<(Option<String>, String)> {
        query_all(self.0, ".extra-details li")
            .into_iter()
            .map(|li| {
                (
                    li.get_attribute("data-label"),
                    li.text_content().unwrap_or_default(),
                )
            })
            .collect()
    }
}

pub fn agent_profile(card: &Element) -> AgentProfile {
    let attr = |name: &str| card.get_attribute(name).unwrap_or_default();
    AgentProfile {
        name: attr("data-name"),
        specialty: attr("data-specialty"),
        languages: attr("data-languages"),
        phone: attr("data-phone"),
        email: attr("data-email"),
    }
}

pub fn agent_criteria(document: &Document) -> AgentFilterCriteria {
    AgentFilterCriteria::new(
        field_value(document, AGENT_SEARCH),
        field_value(document, AGENT_LANG),
        field_value(document, AGENT_SPECIALTY),
    )
}

/// Cards and controls found when the page was bound.
#[derive(Debug, Clone, Default)]
pub struct PageElements {
    /// Every `.card`, indexed by `CardId`.
    pub cards: Vec<Element>,
    /// Toggle button paired with each card, by position.
    pub toggles: Vec<Option<Element>>,
    /// Cards carrying `data-name` plus every card in `#agentsList`, in
    /// document order.
    pub agent_cards: Vec<Element>,
    pub tabs: Vec<Element>,
    pub favorites: Vec<Element>,
}

/// Pair cards with toggle buttons by position and stamp both with the card
/// id, so later lookups survive DOM reordering.
pub fn bind_page(document: &Document) -> (PageElements, PageContent) {
    let cards = query_all(document, CARD);
    let buttons = query_all(document, SELECT_BTN);
    let results = document
        .query_selector(RESULTS)
        .ok()
        .flatten()
        .map(|container| query_all(&container, CARD))
        .unwrap_or_default();
    let directory = by_id(document, AGENTS_LIST)
        .map(|list| query_all(&list, CARD))
        .unwrap_or_default();

    let mut toggles = vec![None; cards.len()];
    for (id, button) in buttons.into_iter().enumerate() {
        if id < cards.len() {
            // Stamping only fails on a detached node; the pairing is still kept.
            let _ = button.set_attribute(CARD_ID_ATTR, &id.to_string());
            toggles[id] = Some(button);
        }
    }

    let listings = cards
        .iter()
        .enumerate()
        .map(|(id, card)| {
            let _ = card.set_attribute(CARD_ID_ATTR, &id.to_string());
            Listing {
                id,
                record: property::extract(&DomCard(card), Some(id)),
                in_results: results.contains(card),
            }
        })
        .collect();

    // Named cards anywhere serve contact lookup; every directory card is
    // subject to the agent filter, named or not.
    let agent_cards: Vec<Element> = cards
        .iter()
        .filter(|card| card.has_attribute("data-name") || directory.contains(card))
        .cloned()
        .collect();
    let agents = agent_cards
        .iter()
        .map(|card| AgentEntry {
            profile: agent_profile(card),
            in_directory: directory.contains(card),
        })
        .collect();

    let tabs = query_all(document, TAB);
    let favorites = query_all(document, FAVORITE_BTN);
    let content = PageContent {
        listings,
        agents,
        tab_count: tabs.len(),
        favorite_count: favorites.len(),
    };
    let elements = PageElements {
        cards,
        toggles,
        agent_cards,
        tabs,
        favorites,
    };
    (elements, content)
}

/// Debug log of which optional page sections exist.
pub fn log_diagnostics(document: &Document) {
    for id in [AGENTS_LIST, AGENT_SEARCH, CART_PANEL, QUICK_VIEW_MODAL] {
        log::debug!("[site:init] #{id} present: {}", by_id(document, id).is_some());
    }
}

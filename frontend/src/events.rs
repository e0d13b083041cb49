//! Listener wiring.
//!
//! Every DOM listener turns its native event into a `UiEvent` and hands it
//! to `Site::dispatch`. Listeners live for the whole page, so their closures
//! are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use property_site::core::app::SiteApp;
use property_site::core::overlay::Overlay;
use property_site::core::view::{Key, Outcome, UiEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, KeyboardEvent};

use crate::dom;
use crate::services::storage::js_error;
use crate::services::BrowserStore;
use crate::view::DomView;

/// App state and its view, shared by every listener.
pub struct Site {
    app: RefCell<SiteApp<BrowserStore, Element>>,
    view: RefCell<DomView>,
}

impl Site {
    pub fn new(app: SiteApp<BrowserStore, Element>, view: DomView) -> Rc<Self> {
        Rc::new(Self {
            app: RefCell::new(app),
            view: RefCell::new(view),
        })
    }

    pub fn start(&self, filter_fields: Vec<(String, String)>) {
        let (Ok(mut app), Ok(mut view)) = (self.app.try_borrow_mut(), self.view.try_borrow_mut())
        else {
            return;
        };
        app.start(&mut *view, filter_fields);
    }

    /// Run one event to completion. An event raised while another is still
    /// being handled is dropped.
    pub fn dispatch(&self, event: UiEvent<Element>) -> Outcome {
        let (Ok(mut app), Ok(mut view)) = (self.app.try_borrow_mut(), self.view.try_borrow_mut())
        else {
            log::warn!("[site] dropped re-entrant event {event:?}");
            return Outcome::Default;
        };
        app.handle(event, &mut *view)
    }
}

/// Attach `handler` for `event_type` on `target`. A `None` from the handler
/// leaves the native event alone.
fn listen<F>(site: &Rc<Site>, target: &EventTarget, event_type: &str, handler: F)
where
    F: Fn(&Event) -> Option<UiEvent<Element>> + 'static,
{
    let site = Rc::clone(site);
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if let Some(event) = handler(&e) {
            if site.dispatch(event) == Outcome::PreventDefault {
                e.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Err(e) = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref()) {
        log::debug!("[events] could not listen for {event_type}: {}", js_error(&e));
    }
    closure.forget();
}

fn listen_by_id<F>(site: &Rc<Site>, document: &Document, id: &str, event_type: &str, handler: F)
where
    F: Fn(&Event) -> Option<UiEvent<Element>> + 'static,
{
    if let Some(element) = dom::by_id(document, id) {
        listen(site, &element, event_type, handler);
    }
}

pub fn bind(site: &Rc<Site>, document: &Document) {
    bind_header(site, document);
    bind_cart(site, document);
    bind_listings(site, document);
    bind_agents(site, document);
    bind_global(site, document);
}

fn bind_header(site: &Rc<Site>, document: &Document) {
    for (index, tab) in dom::query_all(document, dom::TAB).into_iter().enumerate() {
        listen(site, &tab, "click", move |_| Some(UiEvent::TabClicked(index)));
    }

    let doc = document.clone();
    listen_by_id(site, document, dom::SEARCH_BTN, "click", move |_| {
        Some(UiEvent::SearchClicked {
            location: dom::field_value(&doc, dom::LOCATION),
            property_type: dom::field_value(&doc, dom::PROPERTY_TYPE),
        })
    });

    for (index, button) in dom::query_all(document, dom::FAVORITE_BTN).into_iter().enumerate() {
        listen(site, &button, "click", move |_| Some(UiEvent::FavoriteClicked(index)));
    }
}

fn bind_cart(site: &Rc<Site>, document: &Document) {
    for button in dom::query_all(document, dom::SELECT_BTN) {
        let Some(card) = dom::card_id(&button) else {
            continue;
        };
        listen(site, &button, "click", move |_| Some(UiEvent::ToggleClicked(card)));
    }

    if dom::by_id(document, dom::CART_PANEL).is_some() {
        listen_by_id(site, document, dom::CART_BTN, "click", |_| {
            Some(UiEvent::CartOpened { trigger: None })
        });
        listen_by_id(site, document, dom::CLOSE_CART_BTN, "click", |_| {
            Some(UiEvent::CartClosed)
        });
    }

    // Remove buttons are rebuilt on every render; one delegated listener
    // covers them all.
    listen_by_id(site, document, dom::CART_PROPERTIES, "click", |e| {
        let target = e.target()?.dyn_into::<Element>().ok()?;
        let button = target.closest(dom::REMOVE_BTN).ok()??;
        let index = button.get_attribute("data-idx")?.parse().ok()?;
        Some(UiEvent::RemoveClicked(index))
    });
}

fn bind_listings(site: &Rc<Site>, document: &Document) {
    if let Some(form) = dom::by_id(document, dom::FILTER_FORM)
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    {
        for event_type in ["submit", "input"] {
            let form_ref = form.clone();
            listen(site, &form, event_type, move |_| {
                Some(UiEvent::FilterChanged(dom::form_fields(&form_ref)))
            });
        }
    }

    if dom::by_id(document, dom::QUICK_VIEW_MODAL).is_some()
        && dom::by_id(document, dom::MODAL_DETAILS).is_some()
    {
        for button in dom::query_all(document, dom::QUICK_VIEW_BTN) {
            let trigger = button.clone();
            listen(site, &button, "click", move |_| {
                let card = trigger.closest(dom::CARD).ok()??;
                Some(UiEvent::QuickViewOpened {
                    card: dom::card_id(&card)?,
                    trigger: Some(trigger.clone()),
                })
            });
        }
    }
    listen_by_id(site, document, dom::CLOSE_MODAL_BTN, "click", |_| {
        Some(UiEvent::QuickViewClosed)
    });
}

fn bind_agents(site: &Rc<Site>, document: &Document) {
    if dom::by_id(document, dom::AGENTS_LIST).is_some() {
        let doc = document.clone();
        listen_by_id(site, document, dom::AGENT_FILTER_BTN, "click", move |_| {
            Some(UiEvent::AgentFilterChanged(dom::agent_criteria(&doc)))
        });
        let doc = document.clone();
        listen_by_id(site, document, dom::AGENT_SEARCH, "input", move |_| {
            Some(UiEvent::AgentFilterChanged(dom::agent_criteria(&doc)))
        });
    }

    let dialog_ready = [dom::CONTACT_MODAL, dom::CONTACT_NAME, dom::CONTACT_INFO]
        .iter()
        .all(|id| dom::by_id(document, id).is_some());
    if dialog_ready {
        for button in dom::query_all(document, dom::CONTACT_BTN) {
            let trigger = button.clone();
            listen(site, &button, "click", move |_| {
                Some(UiEvent::ContactOpened {
                    agent_name: trigger.get_attribute("data-agent")?,
                    trigger: Some(trigger.clone()),
                })
            });
        }
    }

    for id in [dom::CLOSE_CONTACT_BTN, dom::CONTACT_CANCEL] {
        listen_by_id(site, document, id, "click", |_| Some(UiEvent::ContactClosed));
    }

    let doc = document.clone();
    listen_by_id(site, document, dom::CONTACT_FORM, "submit", move |_| {
        Some(UiEvent::ContactSubmitted {
            visitor_name: dom::field_value(&doc, dom::VISITOR_NAME),
            visitor_email: dom::field_value(&doc, dom::VISITOR_EMAIL),
        })
    });
}

/// Backdrop clicks and the keyboard.
fn bind_global(site: &Rc<Site>, document: &Document) {
    if let Some(window) = web_sys::window() {
        let backdrops: Vec<(Element, Overlay)> =
            [Overlay::CartPanel, Overlay::QuickView, Overlay::AgentContact]
                .into_iter()
                .filter_map(|overlay| {
                    dom::by_id(document, dom::overlay_id(overlay)).map(|root| (root, overlay))
                })
                .collect();
        listen(site, &window, "click", move |e| {
            let target = e.target()?.dyn_into::<Element>().ok()?;
            backdrops
                .iter()
                .find(|(root, _)| *root == target)
                .map(|(_, overlay)| UiEvent::BackdropClicked(*overlay))
        });
    }

    listen(site, document, "keydown", |e| {
        let e = e.dyn_ref::<KeyboardEvent>()?;
        Some(UiEvent::KeyDown {
            key: Key::from_dom(&e.key()),
            shift: e.shift_key(),
        })
    });
}

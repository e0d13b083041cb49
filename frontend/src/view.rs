//! `SiteView` over the live DOM.
//!
//! Cart entries and quick-view content are built node by node with text
//! content, so card text is never reinterpreted as markup.

use property_site::core::agents::ContactSummary;
use property_site::core::cart::{CartRender, ToggleAppearance};
use property_site::core::overlay::Overlay;
use property_site::core::property::SelectedProperty;
use property_site::core::view::{CardId, SiteView};
use property_site::core::{Result, SiteError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::dom::{self, PageElements};
use crate::services::storage::js_error;

const ACTIVE_CLASS: &str = "active";
const CART_IMG_STYLE: &str = "width:100%;border-radius:1rem;margin-bottom:1rem;max-width:200px;";
const MODAL_IMG_STYLE: &str = "width:100%;border-radius:1rem;margin-bottom:1rem;";

pub struct DomView {
    document: Document,
    page: PageElements,
}

impl DomView {
    pub fn new(document: Document, page: PageElements) -> Self {
        Self { document, page }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        dom::by_id(&self.document, id)
    }

    fn create(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(element) => Some(element),
            Err(e) => {
                log::debug!("[view] create <{tag}> failed: {}", js_error(&e));
                None
            }
        }
    }

    fn text_node(&self, tag: &str, class: Option<&str>, text: &str) -> Option<Element> {
        let element = self.create(tag)?;
        if let Some(class) = class {
            element.set_class_name(class);
        }
        element.set_text_content(Some(text));
        Some(element)
    }

    fn image(&self, src: &str, style: &str) -> Option<Element> {
        let img = self.create("img")?;
        let _ = img.set_attribute("src", src);
        let _ = img.set_attribute("style", style);
        Some(img)
    }

    fn details_list(&self, record: &SelectedProperty) -> Option<Element> {
        let list = self.create("ul")?;
        list.set_class_name("modal-details-list");
        for detail in &record.details {
            let Some(item) = self.create("li") else { continue };
            let label = self.text_node(
                "span",
                Some("modal-details-label"),
                &format!("{}:", detail.label),
            );
            let value = self.text_node("span", Some("modal-details-value"), &detail.value);
            if let (Some(label), Some(value)) = (label, value) {
                append(&item, &label);
                let _ = item.append_with_str_1(" ");
                append(&item, &value);
            }
            append(&list, &item);
        }
        Some(list)
    }

    /// Image, price, meta, badges and details of a record, in that order.
    fn record_nodes(&self, record: &SelectedProperty, img_style: &str) -> Vec<Element> {
        [
            self.image(&record.img, img_style),
            self.text_node("h3", None, &record.price),
            self.text_node("div", Some("meta"), &record.meta),
            self.text_node("div", Some("badges"), &record.badges),
            self.details_list(record),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn cart_card(&self, index: usize, record: &SelectedProperty) -> Option<Element> {
        let card = self.create("div")?;
        card.set_class_name("cart-card");
        for node in self.record_nodes(record, CART_IMG_STYLE) {
            append(&card, &node);
        }
        let remove = self.text_node("button", Some("remove-cart-btn"), "Remove")?;
        let _ = remove.set_attribute("data-idx", &index.to_string());
        append(&card, &remove);
        Some(card)
    }
}

fn append(parent: &Element, child: &Element) {
    if let Err(e) = parent.append_child(child) {
        log::debug!("[view] append failed: {}", js_error(&e));
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if class.is_empty() {
        return;
    }
    let _ = element.class_list().toggle_with_force(class, on);
}

fn set_display(element: &Element, visible: bool) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();
        let _ = if visible {
            style.set_property("display", "")
        } else {
            style.set_property("display", "none")
        };
    }
}

impl SiteView for DomView {
    type Element = Element;

    fn set_tab_selected(&mut self, index: usize, selected: bool) {
        if let Some(tab) = self.page.tabs.get(index) {
            let _ = tab.set_attribute("aria-selected", if selected { "true" } else { "false" });
        }
    }

    fn set_favorite(&mut self, index: usize, active: bool) {
        if let Some(button) = self.page.favorites.get(index) {
            set_class(button, ACTIVE_CLASS, active);
        }
    }

    fn render_cart(&mut self, cart: &CartRender) {
        let (Some(count), Some(container)) = (
            self.by_id(dom::CART_COUNT),
            self.by_id(dom::CART_PROPERTIES),
        ) else {
            return;
        };
        count.set_text_content(Some(&cart.count().to_string()));
        container.set_inner_html("");
        match cart {
            CartRender::Empty { placeholder } => {
                if let Some(p) = self.text_node("p", None, placeholder) {
                    append(&container, &p);
                }
            }
            CartRender::Entries(entries) => {
                for entry in entries {
                    if let Some(card) = self.cart_card(entry.index, &entry.record) {
                        append(&container, &card);
                    }
                }
            }
        }
    }

    fn set_toggle(&mut self, card: CardId, appearance: &ToggleAppearance<'_>) {
        let Some(Some(button)) = self.page.toggles.get(card) else {
            return;
        };
        button.set_text_content(Some(appearance.label));
        set_class(button, appearance.class, appearance.is_selected());
    }

    fn set_listing_visible(&mut self, card: CardId, visible: bool) {
        if let Some(element) = self.page.cards.get(card) {
            set_display(element, visible);
        }
    }

    fn set_agent_visible(&mut self, agent: usize, visible: bool) {
        if let Some(element) = self.page.agent_cards.get(agent) {
            set_display(element, visible);
        }
    }

    fn render_quick_view(&mut self, record: &SelectedProperty) {
        let Some(container) = self.by_id(dom::MODAL_DETAILS) else {
            return;
        };
        container.set_inner_html("");
        for node in self.record_nodes(record, MODAL_IMG_STYLE) {
            append(&container, &node);
        }
    }

    fn render_contact(&mut self, summary: &ContactSummary) {
        if let Some(name) = self.by_id(dom::CONTACT_NAME) {
            name.set_text_content(Some(&summary.heading));
        }
        if let Some(info) = self.by_id(dom::CONTACT_INFO) {
            info.set_text_content(Some(&summary.info));
        }
    }

    fn reset_contact_form(&mut self) {
        if let Some(form) = self
            .by_id(dom::CONTACT_FORM)
            .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn set_overlay_active(&mut self, overlay: Overlay, active: bool) {
        if let Some(root) = self.by_id(dom::overlay_id(overlay)) {
            set_class(&root, ACTIVE_CLASS, active);
        }
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn primary_control(&self, overlay: Overlay) -> Option<Element> {
        self.by_id(dom::primary_control_id(overlay))
    }

    fn focusable_controls(&self, overlay: Overlay) -> Vec<Element> {
        self.by_id(dom::overlay_id(overlay))
            .map(|root| dom::query_all(&root, dom::FOCUSABLE))
            .unwrap_or_default()
    }

    fn focus(&mut self, element: &Element) -> Result<()> {
        if !element.is_connected() {
            return Err(SiteError::Focus("element is no longer in the page".into()));
        }
        let element = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| SiteError::Focus("element cannot take focus".into()))?;
        element
            .focus()
            .map_err(|e| SiteError::Focus(js_error(&e)))
    }

    fn notify(&mut self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::info!("[site] {message}");
        }
    }
}

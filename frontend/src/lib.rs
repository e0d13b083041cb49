//! Browser binding for the property listing pages.
//!
//! On load: read the optional `#siteConfig` TOML, start logging, bind the
//! cards and controls on the page, then hand every interaction to the core
//! `SiteApp`.

pub mod dom;
pub mod events;
pub mod services;
pub mod view;

use property_site::config::SiteConfig;
use property_site::core::SiteApp;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::events::Site;
use crate::services::BrowserStore;
use crate::view::DomView;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        web_sys::console::error_1(&"property-site: no document to bind".into());
        return;
    };

    // Log everything until the configured level is known, then narrow.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    let config_source = dom::by_id(&document, dom::SITE_CONFIG).and_then(|e| e.text_content());
    let config = SiteConfig::load(config_source.as_deref());
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("[site:init] {} v{}", property_site::NAME, property_site::VERSION);
    dom::log_diagnostics(&document);

    let store = BrowserStore::open();
    if !store.is_persistent() {
        log::info!("[site:init] selection will not survive a reload");
    }

    let (elements, content) = dom::bind_page(&document);
    let app = SiteApp::new(store, &config, content);
    let site = Site::new(app, DomView::new(document.clone(), elements));

    let filter_fields = dom::by_id(&document, dom::FILTER_FORM)
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
        .map(|form| dom::form_fields(&form))
        .unwrap_or_default();
    site.start(filter_fields);
    events::bind(&site, &document);
}

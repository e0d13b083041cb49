//! The page as seen by `SiteApp`.
//!
//! `UiEvent` names everything the page can report; `SiteView` is everything
//! the app can ask the page to show. The frontend crate implements the view
//! over the DOM, tests implement it with a recording double.

use crate::core::agents::{AgentFilterCriteria, ContactSummary};
use crate::core::cart::{CartRender, ToggleAppearance};
use crate::core::error::Result;
use crate::core::overlay::Overlay;
use crate::core::property::SelectedProperty;

/// Stable card handle, assigned once when the page is bound.
pub type CardId = usize;

/// Keys the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// Named UI events. `E` is the view's element handle.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<E> {
    TabClicked(usize),
    SearchClicked { location: String, property_type: String },
    FavoriteClicked(usize),

    ToggleClicked(CardId),
    RemoveClicked(usize),
    CartOpened { trigger: Option<E> },
    CartClosed,

    /// Filter form submitted or edited; the form's `(name, value)` pairs.
    FilterChanged(Vec<(String, String)>),
    AgentFilterChanged(AgentFilterCriteria),

    QuickViewOpened { card: CardId, trigger: Option<E> },
    QuickViewClosed,

    ContactOpened { agent_name: String, trigger: Option<E> },
    ContactClosed,
    ContactSubmitted { visitor_name: String, visitor_email: String },

    /// A click landed directly on an overlay's backdrop.
    BackdropClicked(Overlay),
    KeyDown { key: Key, shift: bool },
}

/// What the page should do with the native event afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Default,
    PreventDefault,
}

/// Rendering surface for `SiteApp`.
///
/// Every method must tolerate the element it targets being absent from the
/// page and do nothing in that case.
pub trait SiteView {
    type Element: Clone + PartialEq;

    fn set_tab_selected(&mut self, index: usize, selected: bool);
    fn set_favorite(&mut self, index: usize, active: bool);

    fn render_cart(&mut self, cart: &CartRender);
    fn set_toggle(&mut self, card: CardId, appearance: &ToggleAppearance<'_>);

    fn set_listing_visible(&mut self, card: CardId, visible: bool);
    fn set_agent_visible(&mut self, agent: usize, visible: bool);

    fn render_quick_view(&mut self, record: &SelectedProperty);
    fn render_contact(&mut self, summary: &ContactSummary);
    fn reset_contact_form(&mut self);

    fn set_overlay_active(&mut self, overlay: Overlay, active: bool);
    /// Element that currently has focus.
    fn active_element(&self) -> Option<Self::Element>;
    /// Control that receives focus when `overlay` opens.
    fn primary_control(&self, overlay: Overlay) -> Option<Self::Element>;
    /// Focusable controls inside `overlay`, in document order.
    fn focusable_controls(&self, overlay: Overlay) -> Vec<Self::Element>;
    fn focus(&mut self, element: &Self::Element) -> Result<()>;

    /// Blocking informational prompt.
    fn notify(&mut self, message: &str);
}

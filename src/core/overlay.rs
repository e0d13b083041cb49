//! Modal and side-panel state.
//!
//! Tracks which overlays are open and where focus returns when each closes.
//! `E` is the view's element handle; the controller only stores and
//! compares handles, it never touches the page.

/// The page's overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    AgentContact,
    QuickView,
    CartPanel,
}

impl Overlay {
    /// Order in which Escape looks for an open overlay.
    pub const ESCAPE_PRIORITY: [Overlay; 3] =
        [Overlay::AgentContact, Overlay::QuickView, Overlay::CartPanel];

    pub fn label(self) -> &'static str {
        match self {
            Overlay::AgentContact => "agent contact",
            Overlay::QuickView => "quick view",
            Overlay::CartPanel => "cart panel",
        }
    }

    /// Only the agent-contact dialog keeps Tab focus inside itself.
    pub fn traps_focus(self) -> bool {
        matches!(self, Overlay::AgentContact)
    }
}

/// Open overlays and their focus return targets.
#[derive(Debug, Clone)]
pub struct OverlayController<E> {
    open: Vec<(Overlay, Option<E>)>,
}

impl<E> Default for OverlayController<E> {
    fn default() -> Self {
        Self { open: Vec::new() }
    }
}

impl<E: Clone + PartialEq> OverlayController<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, overlay: Overlay) -> bool {
        self.open.iter().any(|(o, _)| *o == overlay)
    }

    /// Mark `overlay` open, remembering where focus should return.
    /// Re-opening an open overlay replaces its return target.
    pub fn open(&mut self, overlay: Overlay, return_to: Option<E>) {
        self.open.retain(|(o, _)| *o != overlay);
        self.open.push((overlay, return_to));
    }

    /// Mark `overlay` closed.
    ///
    /// Returns `None` if it was not open, otherwise the recorded return
    /// target (which itself may be absent).
    pub fn close(&mut self, overlay: Overlay) -> Option<Option<E>> {
        let pos = self.open.iter().position(|(o, _)| *o == overlay)?;
        Some(self.open.remove(pos).1)
    }

    /// The overlay Escape should close, if any.
    pub fn escape_target(&self) -> Option<Overlay> {
        Overlay::ESCAPE_PRIORITY
            .into_iter()
            .find(|o| self.is_active(*o))
    }

    /// The open overlay that traps Tab focus, if any.
    pub fn focus_trap(&self) -> Option<Overlay> {
        Overlay::ESCAPE_PRIORITY
            .into_iter()
            .find(|o| o.traps_focus() && self.is_active(*o))
    }
}

/// Where Tab should move focus inside a trapping overlay.
///
/// Returns the wrap-around target when focus sits on the last control
/// (Tab) or the first control (Shift+Tab); `None` lets the key through.
pub fn wrap_focus<'a, E: PartialEq>(
    focusable: &'a [E],
    current: Option<&E>,
    backwards: bool,
) -> Option<&'a E> {
    let first = focusable.first()?;
    let last = focusable.last()?;
    let current = current?;
    if backwards && current == first {
        Some(last)
    } else if !backwards && current == last {
        Some(first)
    } else {
        None
    }
}

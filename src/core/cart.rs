//! Selected-properties cart.
//!
//! Owns the selection list. Every mutation persists before returning, so a
//! caller that renders afterwards always shows what is stored.

use crate::config::CartConfig;
use crate::core::error::{Result, SiteError};
use crate::core::property::{PropertyIdentity, SelectedProperty};
use crate::core::storage::{KeyValueStore, SelectionStore};

/// Whether a card's toggle button shows as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Selected,
    Unselected,
}

/// Label and styling for one toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAppearance<'a> {
    pub state: ToggleState,
    pub label: &'a str,
    /// Class present only while selected.
    pub class: &'a str,
}

impl ToggleAppearance<'_> {
    pub fn is_selected(&self) -> bool {
        self.state == ToggleState::Selected
    }
}

/// One summary block in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Current position in the selection; carried by the remove control.
    pub index: usize,
    pub record: SelectedProperty,
}

/// What the cart panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartRender {
    Empty { placeholder: String },
    Entries(Vec<CartEntry>),
}

impl CartRender {
    /// Value for the cart count badge.
    pub fn count(&self) -> usize {
        match self {
            CartRender::Empty { .. } => 0,
            CartRender::Entries(entries) => entries.len(),
        }
    }
}

pub struct CartController<S> {
    selected: Vec<SelectedProperty>,
    store: SelectionStore<S>,
    config: CartConfig,
}

impl<S: KeyValueStore> CartController<S> {
    /// Create the controller, loading any persisted selection.
    pub fn new(store: S, config: CartConfig) -> Self {
        let store = SelectionStore::new(store, config.storage_key.clone());
        let selected = store.load();
        log::debug!("[cart] restored {} selected properties", selected.len());
        Self {
            selected,
            store,
            config,
        }
    }

    pub fn selected(&self) -> &[SelectedProperty] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, identity: &PropertyIdentity) -> bool {
        self.selected.iter().any(|p| p.is(identity))
    }

    /// Select the record, or unselect every entry sharing its identity.
    /// Returns the card's new state.
    pub fn toggle(&mut self, record: SelectedProperty) -> ToggleState {
        let identity = record.identity();
        let state = if self.contains(&identity) {
            self.selected.retain(|p| !p.is(&identity));
            ToggleState::Unselected
        } else {
            self.selected.push(record);
            ToggleState::Selected
        };
        self.store.save(&self.selected);
        state
    }

    /// Remove the entry at `index`.
    ///
    /// Out-of-range indices leave the selection and the store untouched.
    pub fn remove(&mut self, index: usize) -> Result<SelectedProperty> {
        if index >= self.selected.len() {
            return Err(SiteError::IndexOutOfBounds {
                index,
                len: self.selected.len(),
            });
        }
        let removed = self.selected.remove(index);
        self.store.save(&self.selected);
        Ok(removed)
    }

    /// Cart panel contents for the current selection.
    pub fn render(&self) -> CartRender {
        if self.selected.is_empty() {
            return CartRender::Empty {
                placeholder: self.config.empty_message.clone(),
            };
        }
        CartRender::Entries(
            self.selected
                .iter()
                .enumerate()
                .map(|(index, record)| CartEntry {
                    index,
                    record: record.clone(),
                })
                .collect(),
        )
    }

    pub fn toggle_state(&self, identity: &PropertyIdentity) -> ToggleState {
        if self.contains(identity) {
            ToggleState::Selected
        } else {
            ToggleState::Unselected
        }
    }

    pub fn appearance(&self, state: ToggleState) -> ToggleAppearance<'_> {
        let label = match state {
            ToggleState::Selected => &self.config.unselect_label,
            ToggleState::Unselected => &self.config.select_label,
        };
        ToggleAppearance {
            state,
            label,
            class: &self.config.selected_class,
        }
    }
}

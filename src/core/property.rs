//! Listing card records.
//!
//! A `SelectedProperty` is a snapshot of the visible fields of one listing
//! card. It is both the cart entry and the persisted format, so the JSON
//! field names are fixed (`img`, `price`, `meta`, `badges`, `details`,
//! `cardIdx`) and deserialization tolerates missing, extra and `null` fields.

use serde::{Deserialize, Deserializer, Serialize};

/// One labelled line of a card's detail list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl PropertyDetail {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A listing card's extracted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectedProperty {
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: String,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: Vec<PropertyDetail>,
    /// Position of the card within the listing set, `-1` when not found.
    #[serde(deserialize_with = "null_as_unknown_index")]
    pub card_idx: i64,
}

impl Default for SelectedProperty {
    fn default() -> Self {
        Self {
            img: String::new(),
            price: String::new(),
            meta: String::new(),
            badges: String::new(),
            details: Vec::new(),
            card_idx: -1,
        }
    }
}

/// Selection identity: the `(img, price)` pair.
///
/// Two distinct listings with the same image and price text collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyIdentity {
    pub img: String,
    pub price: String,
}

impl SelectedProperty {
    pub fn identity(&self) -> PropertyIdentity {
        PropertyIdentity {
            img: self.img.clone(),
            price: self.price.clone(),
        }
    }

    /// Whether this record has the given identity.
    pub fn is(&self, identity: &PropertyIdentity) -> bool {
        self.img == identity.img && self.price == identity.price
    }

    /// Value of the first detail with this label.
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

/// Read access to a listing card's visible fields.
///
/// Every accessor returns `None` when the sub-element is absent; the
/// extractor turns that into an empty value.
pub trait ListingCard {
    /// Source URL of the card image.
    fn image_src(&self) -> Option<String>;
    /// Text of the `.price` element.
    fn price_text(&self) -> Option<String>;
    /// Text of the `.meta` element.
    fn meta_text(&self) -> Option<String>;
    /// Text of the `.badges` element.
    fn badges_text(&self) -> Option<String>;
    /// `(data-label, text)` of each `.extra-details li`, in document order.
    fn detail_items(&self) -> Vec<(Option<String>, String)>;
}

/// Snapshot a card into a record.
///
/// `card_idx` is the card's position in the full listing set. It is
/// positional only and goes stale if the cards are reordered.
pub fn extract(card: &impl ListingCard, card_idx: Option<usize>) -> SelectedProperty {
    SelectedProperty {
        img: card.image_src().unwrap_or_default(),
        price: card.price_text().unwrap_or_default(),
        meta: card.meta_text().unwrap_or_default(),
        badges: card.badges_text().unwrap_or_default(),
        details: card
            .detail_items()
            .into_iter()
            .map(|(label, value)| PropertyDetail {
                label: label.unwrap_or_default(),
                value,
            })
            .collect(),
        card_idx: card_idx
            .and_then(|idx| i64::try_from(idx).ok())
            .unwrap_or(-1),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown_index<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(-1))
}

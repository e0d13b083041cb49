//! Listing filter.
//!
//! Criteria come from the filter form's populated fields; a card is visible
//! iff it passes every present criterion.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::property::SelectedProperty;

static BEDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+) Beds").expect("bed count pattern is valid"));

/// Populated fields of the listing filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    pub amenities: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FilterCriteria {
    /// Build from form `(name, value)` pairs. Empty values and unknown
    /// names are skipped; a repeated name keeps its last value.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::default();
        for (name, value) in fields {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            let slot = match name.as_ref() {
                "location" => &mut criteria.location,
                "type" => &mut criteria.property_type,
                "bedrooms" => &mut criteria.bedrooms,
                "amenities" => &mut criteria.amenities,
                "minPrice" => &mut criteria.min_price,
                "maxPrice" => &mut criteria.max_price,
                other => {
                    log::trace!("[filter] ignoring unknown field '{other}'");
                    continue;
                }
            };
            *slot = Some(value);
        }
        criteria
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The card fields the filter looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFacts {
    /// Digits of the price text, 0 when there are none, `u64::MAX` when
    /// they overflow.
    pub price: u64,
    /// `<N> Beds` from the meta text, 0 when absent.
    pub beds: u64,
    /// Lowercased detail values by label; later labels win.
    pub details: HashMap<String, String>,
}

impl ListingFacts {
    pub fn from_record(record: &SelectedProperty) -> Self {
        Self {
            price: parse_price(&record.price),
            beds: parse_beds(&record.meta),
            details: record
                .details
                .iter()
                .map(|d| (d.label.clone(), d.value.to_lowercase()))
                .collect(),
        }
    }

    fn detail(&self, label: &str) -> Option<&str> {
        self.details.get(label).map(String::as_str)
    }
}

/// Whether a card with these facts passes every present criterion.
pub fn matches(facts: &ListingFacts, criteria: &FilterCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !contains_lowercase(facts.detail("Location"), location) {
            return false;
        }
    }
    if let Some(property_type) = &criteria.property_type {
        if facts.detail("Type") != Some(property_type.to_lowercase().as_str()) {
            return false;
        }
    }
    if let Some(min_beds) = criteria.bedrooms.as_deref().and_then(parse_leading_int) {
        if i128::from(facts.beds) < i128::from(min_beds) {
            return false;
        }
    }
    if let Some(amenities) = &criteria.amenities {
        if !contains_lowercase(facts.detail("Amenities"), amenities) {
            return false;
        }
    }
    if let Some(min) = criteria.min_price.as_deref().and_then(parse_leading_int) {
        if i128::from(facts.price) < i128::from(min) {
            return false;
        }
    }
    if let Some(max) = criteria.max_price.as_deref().and_then(parse_leading_int) {
        if i128::from(facts.price) > i128::from(max) {
            return false;
        }
    }
    true
}

/// Visibility of each card, in order.
pub fn apply<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<bool>
where
    I: IntoIterator<Item = &'a SelectedProperty>,
{
    records
        .into_iter()
        .map(|record| matches(&ListingFacts::from_record(record), criteria))
        .collect()
}

fn contains_lowercase(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.contains(&needle.to_lowercase()))
}

/// Digits of `text` as a number; 0 when there are none.
pub fn parse_price(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    saturating_digits(&digits)
}

pub fn parse_beds(meta: &str) -> u64 {
    BEDS_PATTERN
        .captures(meta)
        .map(|caps| saturating_digits(&caps[1]))
        .unwrap_or(0)
}

/// A run of ASCII digits as `u64`, clamped to `u64::MAX`.
fn saturating_digits(digits: &str) -> u64 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Leading integer of a form value (`" 3+"` → 3). `None` when the value
/// does not start with a number.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end]
        .parse::<i64>()
        .ok()
        .map(|n| n * sign)
        .or(Some(if sign < 0 { i64::MIN } else { i64::MAX }))
}

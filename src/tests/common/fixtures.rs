//! Test Fixtures
//!
//! A small listings page (four cards, one outside the results grid) and an
//! agent directory, plus helpers to build a `SiteApp` over them.

#![allow(dead_code)]

use crate::config::SiteConfig;
use crate::core::agents::AgentProfile;
use crate::core::app::{AgentEntry, Listing, PageContent, SiteApp};
use crate::core::property::{PropertyDetail, SelectedProperty};
use crate::core::storage::MemoryStore;

// =============================================================================
// Listing Fixtures
// =============================================================================

/// Build a listing record.
pub fn create_listing(
    idx: usize,
    img: &str,
    price: &str,
    meta: &str,
    details: &[(&str, &str)],
) -> SelectedProperty {
    SelectedProperty {
        img: img.to_string(),
        price: price.to_string(),
        meta: meta.to_string(),
        badges: "For Sale".to_string(),
        details: details
            .iter()
            .map(|(label, value)| PropertyDetail::new(*label, *value))
            .collect(),
        card_idx: idx as i64,
    }
}

/// Four listing cards. Card 3 is a "featured" card outside `.cards`.
pub fn create_test_listings() -> Vec<Listing> {
    let records = [
        create_listing(
            0,
            "img/bungalow.jpg",
            "$450,000",
            "3 Beds • 2 Baths",
            &[("Location", "Austin, TX"), ("Type", "House"), ("Amenities", "Garage, Garden")],
        ),
        create_listing(
            1,
            "img/loft.jpg",
            "$1,200,000",
            "2 Beds • 2 Baths",
            &[("Location", "Denver, CO"), ("Type", "Condo"), ("Amenities", "Gym, Rooftop")],
        ),
        create_listing(
            2,
            "img/ranch.jpg",
            "$780,000",
            "5 Beds • 4 Baths",
            &[("Location", "Boise, ID"), ("Type", "House"), ("Amenities", "Pool")],
        ),
        create_listing(
            3,
            "img/featured.jpg",
            "$2,000,000",
            "6 Beds • 5 Baths",
            &[("Location", "Austin, TX"), ("Type", "Villa")],
        ),
    ];
    records
        .into_iter()
        .enumerate()
        .map(|(id, record)| Listing {
            id,
            record,
            in_results: id != 3,
        })
        .collect()
}

// =============================================================================
// Agent Fixtures
// =============================================================================

pub fn create_agent(name: &str, specialty: &str, languages: &str, phone: &str) -> AgentProfile {
    AgentProfile {
        name: name.to_string(),
        specialty: specialty.to_string(),
        languages: languages.to_string(),
        phone: phone.to_string(),
        email: format!("{}@realty.example", name.to_lowercase().replace(' ', ".")),
    }
}

pub fn create_test_agents() -> Vec<AgentEntry> {
    vec![
        AgentEntry {
            profile: create_agent("Maria Lopez", "Luxury", "English, Spanish", "555-0101"),
            in_directory: true,
        },
        AgentEntry {
            profile: create_agent("Sam Lee", "Commercial", "English, Korean", "555-0102"),
            in_directory: true,
        },
        AgentEntry {
            profile: create_agent("Ana Silva", "Rentals", "Portuguese", "555-0103"),
            in_directory: true,
        },
        // Featured agent in the page header, not part of the directory
        AgentEntry {
            profile: create_agent("Sam Lee", "Featured", "English", "555-0199"),
            in_directory: false,
        },
    ]
}

// =============================================================================
// Site Fixtures
// =============================================================================

pub fn create_test_page() -> PageContent {
    PageContent {
        listings: create_test_listings(),
        agents: create_test_agents(),
        tab_count: 3,
        favorite_count: 2,
    }
}

/// A site over a fresh in-memory store. The store handle shares entries
/// with the one inside the app.
pub fn create_test_site() -> (SiteApp<MemoryStore, String>, MemoryStore) {
    let store = MemoryStore::new();
    let app = SiteApp::new(store.clone(), &SiteConfig::default(), create_test_page());
    (app, store)
}

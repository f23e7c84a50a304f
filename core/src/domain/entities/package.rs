//! Tour package entity and its embedded sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A highlighted attraction inside a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// An inclusion or exclusion line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncludedItem {
    /// "included" or "excluded"
    pub kind: Option<String>,
    pub description: Option<String>,
}

/// One step of the package itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStep {
    pub title: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

/// A bookable tour package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub original_price: f64,
    pub discount_price: f64,
    pub message_description: String,
    pub duration: String,
    pub location: String,
    pub contact: String,
    pub description: String,
    pub top_attractions: Vec<Attraction>,
    pub included_excluded: Vec<IncludedItem>,
    pub itinerary: Vec<ItineraryStep>,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TourPackage {
    /// Builder-style constructor covering the required fields; optional
    /// sections default to empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        image: String,
        original_price: f64,
        discount_price: f64,
        duration: String,
        location: String,
        description: String,
        country: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            image,
            original_price,
            discount_price,
            message_description: String::new(),
            duration,
            location,
            contact: String::new(),
            description,
            top_attractions: Vec::new(),
            included_excluded: Vec::new(),
            itinerary: Vec::new(),
            country,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

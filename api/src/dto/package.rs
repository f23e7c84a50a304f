use serde::{Deserialize, Serialize};
use validator::Validate;

use tb_core::domain::entities::package::{Attraction, IncludedItem, ItineraryStep, TourPackage};

/// Request body for POST /api/v1/packages.
///
/// All fields are optional at the serde level so the handler can report
/// every missing required field by name in one response.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePackageRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub image: Option<String>,

    pub original_price: Option<f64>,
    pub discount_price: Option<f64>,

    pub message_description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub duration: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,

    pub contact: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[serde(default)]
    pub top_attractions: Vec<Attraction>,

    #[serde(default)]
    pub included_excluded: Vec<IncludedItem>,

    #[serde(default)]
    pub itinerary: Vec<ItineraryStep>,

    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
}

impl CreatePackageRequest {
    /// Names of required fields absent from the request
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.image.is_none() {
            missing.push("image");
        }
        if self.original_price.is_none() {
            missing.push("original_price");
        }
        if self.discount_price.is_none() {
            missing.push("discount_price");
        }
        if self.duration.is_none() {
            missing.push("duration");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.country.is_none() {
            missing.push("country");
        }
        missing
    }

    /// Convert into the domain entity; fails with the missing field names
    pub fn into_package(self) -> Result<TourPackage, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut package = TourPackage::new(
            self.name.unwrap_or_default(),
            self.image.unwrap_or_default(),
            self.original_price.unwrap_or_default(),
            self.discount_price.unwrap_or_default(),
            self.duration.unwrap_or_default(),
            self.location.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.country.unwrap_or_default(),
        );
        package.message_description = self.message_description.unwrap_or_default();
        package.contact = self.contact.unwrap_or_default();
        package.top_attractions = self.top_attractions;
        package.included_excluded = self.included_excluded;
        package.itinerary = self.itinerary;
        Ok(package)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: TourPackage,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageResponse {
    pub success: bool,
    pub data: TourPackage,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TourPackage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_lists_all_absent_requireds() {
        let request = CreatePackageRequest {
            name: Some("Golden Triangle".to_string()),
            ..CreatePackageRequest::default()
        };
        let missing = request.missing_fields();
        assert!(!missing.contains(&"name"));
        assert!(missing.contains(&"image"));
        assert!(missing.contains(&"original_price"));
        assert!(missing.contains(&"country"));
        assert_eq!(missing.len(), 7);
    }

    #[test]
    fn test_into_package_carries_optional_sections() {
        let request = CreatePackageRequest {
            name: Some("Golden Triangle".to_string()),
            image: Some("https://cdn.example.com/golden.jpg".to_string()),
            original_price: Some(499.0),
            discount_price: Some(399.0),
            duration: Some("5 days".to_string()),
            location: Some("Delhi".to_string()),
            description: Some("Delhi, Agra and Jaipur in five days".to_string()),
            country: Some("India".to_string()),
            contact: Some("+91 11 2345 6789".to_string()),
            top_attractions: vec![Attraction {
                name: Some("Taj Mahal".to_string()),
                ..Attraction::default()
            }],
            ..CreatePackageRequest::default()
        };

        let package = request.into_package().unwrap();
        assert_eq!(package.name, "Golden Triangle");
        assert_eq!(package.contact, "+91 11 2345 6789");
        assert_eq!(package.top_attractions.len(), 1);
        assert!(package.itinerary.is_empty());
    }

    #[test]
    fn test_into_package_rejects_incomplete_request() {
        let request = CreatePackageRequest {
            name: Some("Golden Triangle".to_string()),
            ..CreatePackageRequest::default()
        };
        let missing = request.into_package().unwrap_err();
        assert!(missing.contains(&"image"));
    }
}

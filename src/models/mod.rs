use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Land,
    Office,
    Warehouse,
    /// Propiedad horizontal (attached house)
    Ph,
    Studio,
}

impl PropertyType {
    /// Query-parameter value for this type
    pub fn as_param(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "APARTMENT",
            PropertyType::House => "HOUSE",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::Land => "LAND",
            PropertyType::Office => "OFFICE",
            PropertyType::Warehouse => "WAREHOUSE",
            PropertyType::Ph => "PH",
            PropertyType::Studio => "STUDIO",
        }
    }

    /// Case-insensitive lookup; anything outside the closed set is `None`
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "APARTMENT" => Some(PropertyType::Apartment),
            "HOUSE" => Some(PropertyType::House),
            "COMMERCIAL" => Some(PropertyType::Commercial),
            "LAND" => Some(PropertyType::Land),
            "OFFICE" => Some(PropertyType::Office),
            "WAREHOUSE" => Some(PropertyType::Warehouse),
            "PH" => Some(PropertyType::Ph),
            "STUDIO" => Some(PropertyType::Studio),
            _ => None,
        }
    }
}

/// Whether the listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_param(&self) -> &'static str {
        match self {
            ListingType::Sale => "SALE",
            ListingType::Rent => "RENT",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SALE" => Some(ListingType::Sale),
            "RENT" => Some(ListingType::Rent),
            _ => None,
        }
    }
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub province: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Core property data model, as served by the listing API (camelCase JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    #[serde(flatten)]
    pub location: Location,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default)]
    pub featured: bool,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// One page of search results. `count` is the total number of matching
/// listings, not the number of items in this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<Property>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_type_param_round_trip() {
        for t in [
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Commercial,
            PropertyType::Land,
            PropertyType::Office,
            PropertyType::Warehouse,
            PropertyType::Ph,
            PropertyType::Studio,
        ] {
            assert_eq!(PropertyType::from_param(t.as_param()), Some(t));
        }
    }

    #[test]
    fn property_type_rejects_unknown_values() {
        assert_eq!(PropertyType::from_param("BOGUS"), None);
        assert_eq!(PropertyType::from_param(""), None);
    }

    #[test]
    fn property_type_is_case_insensitive() {
        assert_eq!(
            PropertyType::from_param("apartment"),
            Some(PropertyType::Apartment)
        );
        assert_eq!(PropertyType::from_param(" ph "), Some(PropertyType::Ph));
    }

    #[test]
    fn result_set_decodes_api_response() {
        let body = json!({
            "items": [{
                "id": "prop-1",
                "title": "Casa en Posadas Centro",
                "description": "Casa de 3 dormitorios.",
                "price": 120000,
                "currency": "ARS",
                "city": "Posadas",
                "province": "Misiones",
                "address": "Av. Mitre 1234",
                "latitude": -27.3621,
                "longitude": -55.9008,
                "propertyType": "HOUSE",
                "listingType": "SALE",
                "featured": true,
                "bedrooms": 3,
                "bathrooms": 2,
                "area": 150.0,
                "amenities": ["Piscina", "Garage"],
                "images": [],
                "url": "https://example.com/prop-1",
                "createdAt": "2024-01-01T00:00:00Z",
                "postalCode": "3300"
            }],
            "count": 37
        });

        let set: ResultSet = serde_json::from_value(body).expect("valid response body");
        assert_eq!(set.count, 37);
        assert_eq!(set.items.len(), 1);

        let p = &set.items[0];
        assert_eq!(p.location.city, "Posadas");
        assert_eq!(p.property_type, PropertyType::House);
        assert_eq!(p.listing_type, ListingType::Sale);
        assert!(p.featured);
    }
}

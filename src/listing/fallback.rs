use chrono::Utc;
use tracing::info;

use crate::models::{ListingType, Location, Property, PropertyType, ResultSet};

/// Fixed sample listings shown when the live API is unreachable.
/// The set is clearly non-live: stable ids, no images, example URLs.
pub fn sample_result_set() -> ResultSet {
    info!("📋 Using sample Misiones listings, live data unavailable");

    let items = vec![
        Property {
            id: "sample-posadas-1".to_string(),
            title: "Casa moderna en Posadas Centro".to_string(),
            description: "Casa de 3 dormitorios en el centro de Posadas, con patio y parrilla."
                .to_string(),
            price: 120_000,
            currency: "ARS".to_string(),
            location: Location {
                city: "Posadas".to_string(),
                province: "Misiones".to_string(),
                address: "Av. Mitre 1234".to_string(),
                latitude: Some(-27.3621),
                longitude: Some(-55.9008),
            },
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            featured: true,
            bedrooms: 3,
            bathrooms: 2,
            area: 150.0,
            amenities: vec![
                "Piscina".to_string(),
                "Jardín".to_string(),
                "Parrilla".to_string(),
                "Garage".to_string(),
            ],
            images: vec![],
            url: "https://example.com/listings/sample-posadas-1".to_string(),
            created_at: Utc::now(),
        },
        Property {
            id: "sample-obera-2".to_string(),
            title: "Departamento céntrico en Oberá".to_string(),
            description: "Departamento de 2 dormitorios en el centro de Oberá, con balcón."
                .to_string(),
            price: 85_000,
            currency: "ARS".to_string(),
            location: Location {
                city: "Oberá".to_string(),
                province: "Misiones".to_string(),
                address: "San Martín 567".to_string(),
                latitude: Some(-27.4878),
                longitude: Some(-55.1199),
            },
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Rent,
            featured: false,
            bedrooms: 2,
            bathrooms: 1,
            area: 80.0,
            amenities: vec![
                "Portero".to_string(),
                "Ascensor".to_string(),
                "Balcón".to_string(),
            ],
            images: vec![],
            url: "https://example.com/listings/sample-obera-2".to_string(),
            created_at: Utc::now(),
        },
        Property {
            id: "sample-iguazu-3".to_string(),
            title: "Local comercial en Puerto Iguazú".to_string(),
            description: "Local comercial en zona turística, apto gastronomía.".to_string(),
            price: 200_000,
            currency: "ARS".to_string(),
            location: Location {
                city: "Puerto Iguazú".to_string(),
                province: "Misiones".to_string(),
                address: "Av. Brasil 890".to_string(),
                latitude: Some(-25.5948),
                longitude: Some(-54.5805),
            },
            property_type: PropertyType::Commercial,
            listing_type: ListingType::Rent,
            featured: true,
            bedrooms: 0,
            bathrooms: 2,
            area: 120.0,
            amenities: vec![
                "Aire acondicionado".to_string(),
                "Estacionamiento".to_string(),
            ],
            images: vec![],
            url: "https://example.com/listings/sample-iguazu-3".to_string(),
            created_at: Utc::now(),
        },
        Property {
            id: "sample-eldorado-4".to_string(),
            title: "Terreno en Eldorado".to_string(),
            description: "Terreno de 1000 m² sobre Ruta 12, apto vivienda familiar.".to_string(),
            price: 45_000,
            currency: "ARS".to_string(),
            location: Location {
                city: "Eldorado".to_string(),
                province: "Misiones".to_string(),
                address: "Ruta 12 Km 45".to_string(),
                latitude: Some(-26.4009),
                longitude: Some(-54.6156),
            },
            property_type: PropertyType::Land,
            listing_type: ListingType::Sale,
            featured: false,
            bedrooms: 0,
            bathrooms: 0,
            area: 1000.0,
            amenities: vec!["Luz".to_string(), "Agua".to_string()],
            images: vec![],
            url: "https://example.com/listings/sample-eldorado-4".to_string(),
            created_at: Utc::now(),
        },
    ];

    let count = items.len() as u64;
    ResultSet { items, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_is_never_empty() {
        let set = sample_result_set();
        assert!(!set.items.is_empty());
        assert_eq!(set.count, set.items.len() as u64);
    }

    #[test]
    fn sample_set_survives_json_round_trip() {
        let set = sample_result_set();
        let json = serde_json::to_string(&set).expect("serializable sample set");
        let back: ResultSet = serde_json::from_str(&json).expect("decodable sample set");
        assert_eq!(back.items.len(), set.items.len());
        assert_eq!(back.items[0].id, "sample-posadas-1");
    }
}

use url::form_urlencoded;

use crate::models::{ListingType, PropertyType};

/// Field the listing API can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
    Id,
    Bedrooms,
    Bathrooms,
    Area,
}

impl SortField {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
            SortField::Id => "id",
            SortField::Bedrooms => "bedrooms",
            SortField::Bathrooms => "bathrooms",
            SortField::Area => "area",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        let v = value.trim();
        if v.eq_ignore_ascii_case("createdAt") {
            Some(SortField::CreatedAt)
        } else if v.eq_ignore_ascii_case("price") {
            Some(SortField::Price)
        } else if v.eq_ignore_ascii_case("id") {
            Some(SortField::Id)
        } else if v.eq_ignore_ascii_case("bedrooms") {
            Some(SortField::Bedrooms)
        } else if v.eq_ignore_ascii_case("bathrooms") {
            Some(SortField::Bathrooms)
        } else if v.eq_ignore_ascii_case("area") {
            Some(SortField::Area)
        } else {
            None
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Search constraints for a listing query
///
/// Every field is optional; an empty filter means "no constraint", not
/// "zero results". No ordering is enforced between `price_min` and
/// `price_max`; the data store owns that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Exact city match
    pub city: Option<String>,
    /// Exact province match
    pub province: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    /// Minimum price (ARS)
    pub price_min: Option<f64>,
    /// Maximum price (ARS)
    pub price_max: Option<f64>,
    /// At least this many bedrooms
    pub bedrooms_min: Option<u32>,
    /// At least this many bathrooms
    pub bathrooms_min: Option<u32>,
    /// Minimum surface in square meters
    pub min_area: Option<f64>,
    /// Maximum surface in square meters
    pub max_area: Option<f64>,
    /// Opaque delimited amenity token string, passed through as-is
    pub amenities: Option<String>,
    /// Only featured listings
    pub featured: Option<bool>,
    pub order_by: Option<SortField>,
    pub order: Option<SortOrder>,
    /// Page size, already clamped to [1, 50] by the parser
    pub limit: Option<u32>,
    /// Row offset into the full result set
    pub offset: Option<u32>,
}

impl PropertyFilter {
    /// Number of constraints the filter actually carries
    pub fn active_constraints(&self) -> usize {
        self.to_query_pairs().len()
    }

    /// Canonical query pairs for the listing endpoint. Only defined
    /// fields are emitted, so the output re-parses to an equal filter.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("city", city.to_string()));
        }
        if let Some(province) = self.province.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("province", province.to_string()));
        }
        if let Some(t) = self.property_type {
            pairs.push(("propertyType", t.as_param().to_string()));
        }
        if let Some(t) = self.listing_type {
            pairs.push(("listingType", t.as_param().to_string()));
        }
        if let Some(n) = self.price_min {
            pairs.push(("priceMin", n.to_string()));
        }
        if let Some(n) = self.price_max {
            pairs.push(("priceMax", n.to_string()));
        }
        if let Some(n) = self.bedrooms_min {
            pairs.push(("bedroomsMin", n.to_string()));
        }
        if let Some(n) = self.bathrooms_min {
            pairs.push(("bathroomsMin", n.to_string()));
        }
        if let Some(n) = self.min_area {
            pairs.push(("minArea", n.to_string()));
        }
        if let Some(n) = self.max_area {
            pairs.push(("maxArea", n.to_string()));
        }
        if let Some(a) = self.amenities.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("amenities", a.to_string()));
        }
        if let Some(f) = self.featured {
            pairs.push(("featured", f.to_string()));
        }
        if let Some(field) = self.order_by {
            pairs.push(("orderBy", field.as_param().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_param().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }

    /// Percent-encoded canonical query string
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parse_query;

    #[test]
    fn empty_filter_serializes_to_nothing() {
        let filter = PropertyFilter::default();
        assert!(filter.to_query_pairs().is_empty());
        assert_eq!(filter.to_query_string(), "");
        assert_eq!(filter.active_constraints(), 0);
    }

    #[test]
    fn empty_strings_are_not_serialized() {
        let filter = PropertyFilter {
            city: Some(String::new()),
            amenities: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.to_query_pairs().is_empty());
    }

    #[test]
    fn query_string_round_trips_through_parser() {
        let filter = PropertyFilter {
            city: Some("Puerto Iguazú".to_string()),
            province: Some("Misiones".to_string()),
            property_type: Some(PropertyType::Apartment),
            listing_type: Some(ListingType::Rent),
            price_min: Some(50_000.0),
            price_max: Some(200_000.0),
            bedrooms_min: Some(2),
            bathrooms_min: Some(1),
            min_area: Some(40.0),
            max_area: Some(120.5),
            amenities: Some("Piscina,Garage".to_string()),
            featured: Some(true),
            order_by: Some(SortField::Price),
            order: Some(SortOrder::Desc),
            limit: Some(12),
            offset: Some(24),
        };

        let parsed = parse_query(&filter.to_query_string());
        assert_eq!(parsed.filter, filter);
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn sort_params_round_trip() {
        for field in [
            SortField::CreatedAt,
            SortField::Price,
            SortField::Id,
            SortField::Bedrooms,
            SortField::Bathrooms,
            SortField::Area,
        ] {
            assert_eq!(SortField::from_param(field.as_param()), Some(field));
        }
        assert_eq!(SortOrder::from_param("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_param("upwards"), None);
    }
}

use url::form_urlencoded;

use crate::models::{ListingType, PropertyType};
use crate::pagination::MAX_PAGE_SIZE;

use super::types::{PropertyFilter, SortField, SortOrder};

/// Keys the parser understands, canonical names plus legacy aliases.
/// Anything else in the query string is reported as ignored.
const KNOWN_KEYS: &[&str] = &[
    "city",
    "province",
    "propertyType",
    "listingType",
    "priceMin",
    "minPrice",
    "priceMax",
    "maxPrice",
    "bedroomsMin",
    "bedrooms",
    "bathroomsMin",
    "bathrooms",
    "minArea",
    "maxArea",
    "amenities",
    "featured",
    "orderBy",
    "sortBy",
    "order",
    "sortOrder",
    "limit",
    "offset",
];

/// Outcome of parsing a query string: the filter that survived, and the
/// keys that were dropped (unknown keys, unparseable numbers, values
/// outside a closed enum set). A bad parameter never fails the search.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFilter {
    pub filter: PropertyFilter,
    pub ignored: Vec<String>,
}

/// Parse a raw query string (with or without a leading `?`).
pub fn parse_query(query: &str) -> ParsedFilter {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    parse_pairs(&pairs)
}

/// Parse already-decoded key/value pairs.
///
/// For aliased fields the canonical key wins when both are present.
/// The first non-empty occurrence of a key is used; empty values count
/// as absent (a cleared form field, not garbage).
pub fn parse_pairs(pairs: &[(String, String)]) -> ParsedFilter {
    let mut filter = PropertyFilter::default();
    let mut ignored = Vec::new();

    for (key, _) in pairs {
        if !KNOWN_KEYS.contains(&key.as_str()) && !ignored.contains(key) {
            ignored.push(key.clone());
        }
    }

    if let Some((_, v)) = lookup(pairs, "city", None) {
        filter.city = Some(v.to_string());
    }
    if let Some((_, v)) = lookup(pairs, "province", None) {
        filter.province = Some(v.to_string());
    }
    if let Some((key, v)) = lookup(pairs, "propertyType", None) {
        match PropertyType::from_param(v) {
            Some(t) => filter.property_type = Some(t),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "listingType", None) {
        match ListingType::from_param(v) {
            Some(t) => filter.listing_type = Some(t),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "priceMin", Some("minPrice")) {
        match non_negative_f64(v) {
            Some(n) => filter.price_min = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "priceMax", Some("maxPrice")) {
        match non_negative_f64(v) {
            Some(n) => filter.price_max = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "bedroomsMin", Some("bedrooms")) {
        match count_u32(v) {
            Some(n) => filter.bedrooms_min = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "bathroomsMin", Some("bathrooms")) {
        match count_u32(v) {
            Some(n) => filter.bathrooms_min = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "minArea", None) {
        match non_negative_f64(v) {
            Some(n) => filter.min_area = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "maxArea", None) {
        match non_negative_f64(v) {
            Some(n) => filter.max_area = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((_, v)) = lookup(pairs, "amenities", None) {
        filter.amenities = Some(v.to_string());
    }
    if let Some((key, v)) = lookup(pairs, "featured", None) {
        match boolean(v) {
            Some(b) => filter.featured = Some(b),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "orderBy", Some("sortBy")) {
        match SortField::from_param(v) {
            Some(f) => filter.order_by = Some(f),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "order", Some("sortOrder")) {
        match SortOrder::from_param(v) {
            Some(o) => filter.order = Some(o),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "limit", None) {
        match clamped_limit(v) {
            Some(n) => filter.limit = Some(n),
            None => ignored.push(key.to_string()),
        }
    }
    if let Some((key, v)) = lookup(pairs, "offset", None) {
        match clamped_offset(v) {
            Some(n) => filter.offset = Some(n),
            None => ignored.push(key.to_string()),
        }
    }

    ParsedFilter { filter, ignored }
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<(&'a str, &'a str)> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(k, v)| (k.as_str(), v.as_str()))
}

fn lookup<'a>(
    pairs: &'a [(String, String)],
    canonical: &str,
    alias: Option<&str>,
) -> Option<(&'a str, &'a str)> {
    first(pairs, canonical).or_else(|| alias.and_then(|a| first(pairs, a)))
}

fn non_negative_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

fn count_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn boolean(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn clamped_limit(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|n| n.clamp(1, MAX_PAGE_SIZE as i64) as u32)
}

fn clamped_offset(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|n| n.clamp(0, u32::MAX as i64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_input_yields_unconstrained_filter() {
        let parsed = parse_query("");
        assert_eq!(parsed.filter, PropertyFilter::default());
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn parses_a_typical_listing_query() {
        let parsed =
            parse_query("city=Posadas&priceMin=50000&priceMax=200000&limit=5&offset=10");
        assert_eq!(parsed.filter.city.as_deref(), Some("Posadas"));
        assert_eq!(parsed.filter.price_min, Some(50_000.0));
        assert_eq!(parsed.filter.price_max, Some(200_000.0));
        assert_eq!(parsed.filter.limit, Some(5));
        assert_eq!(parsed.filter.offset, Some(10));
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn accepts_a_leading_question_mark() {
        let parsed = parse_query("?city=Posadas");
        assert_eq!(parsed.filter.city.as_deref(), Some("Posadas"));
    }

    #[test]
    fn legacy_aliases_map_to_canonical_fields() {
        let legacy = parse_pairs(&pairs(&[
            ("minPrice", "100"),
            ("maxPrice", "900"),
            ("bedrooms", "2"),
            ("bathrooms", "1"),
            ("sortBy", "price"),
            ("sortOrder", "asc"),
        ]));
        let canonical = parse_pairs(&pairs(&[
            ("priceMin", "100"),
            ("priceMax", "900"),
            ("bedroomsMin", "2"),
            ("bathroomsMin", "1"),
            ("orderBy", "price"),
            ("order", "asc"),
        ]));
        assert_eq!(legacy.filter, canonical.filter);
        assert!(legacy.ignored.is_empty());
    }

    #[test]
    fn canonical_key_wins_over_alias() {
        let parsed = parse_pairs(&pairs(&[("minPrice", "200"), ("priceMin", "100")]));
        assert_eq!(parsed.filter.price_min, Some(100.0));
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn unknown_enum_values_are_dropped_and_reported() {
        let parsed = parse_pairs(&pairs(&[("propertyType", "BOGUS")]));
        assert_eq!(parsed.filter.property_type, None);
        assert_eq!(parsed.ignored, vec!["propertyType".to_string()]);
    }

    #[test]
    fn unparseable_numbers_are_dropped_and_reported() {
        let parsed = parse_pairs(&pairs(&[
            ("priceMin", "cheap"),
            ("bedroomsMin", "2.5"),
            ("city", "Posadas"),
        ]));
        assert_eq!(parsed.filter.price_min, None);
        assert_eq!(parsed.filter.bedrooms_min, None);
        assert_eq!(parsed.filter.city.as_deref(), Some("Posadas"));
        assert!(parsed.ignored.contains(&"priceMin".to_string()));
        assert!(parsed.ignored.contains(&"bedroomsMin".to_string()));
        assert_eq!(parsed.ignored.len(), 2);
    }

    #[test]
    fn negative_prices_are_rejected() {
        let parsed = parse_pairs(&pairs(&[("priceMin", "-5")]));
        assert_eq!(parsed.filter.price_min, None);
        assert_eq!(parsed.ignored, vec!["priceMin".to_string()]);
    }

    #[test]
    fn limit_and_offset_are_clamped_not_rejected() {
        let parsed = parse_pairs(&pairs(&[("limit", "999"), ("offset", "-5")]));
        assert_eq!(parsed.filter.limit, Some(50));
        assert_eq!(parsed.filter.offset, Some(0));
        assert!(parsed.ignored.is_empty());

        let parsed = parse_pairs(&pairs(&[("limit", "0")]));
        assert_eq!(parsed.filter.limit, Some(1));
    }

    #[test]
    fn unknown_keys_are_reported_once() {
        let parsed = parse_pairs(&pairs(&[
            ("utm_source", "mail"),
            ("utm_source", "mail"),
            ("city", "Oberá"),
        ]));
        assert_eq!(parsed.ignored, vec!["utm_source".to_string()]);
        assert_eq!(parsed.filter.city.as_deref(), Some("Oberá"));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let parsed = parse_pairs(&pairs(&[("city", ""), ("priceMin", "")]));
        assert_eq!(parsed.filter, PropertyFilter::default());
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn empty_canonical_falls_through_to_alias() {
        let parsed = parse_pairs(&pairs(&[("priceMin", ""), ("minPrice", "300")]));
        assert_eq!(parsed.filter.price_min, Some(300.0));
    }

    #[test]
    fn sort_params_tolerate_case() {
        let parsed = parse_pairs(&pairs(&[("orderBy", "CREATEDAT"), ("order", "DESC")]));
        assert_eq!(parsed.filter.order_by, Some(SortField::CreatedAt));
        assert_eq!(parsed.filter.order, Some(SortOrder::Desc));
    }

    #[test]
    fn featured_accepts_booleans_only() {
        let parsed = parse_pairs(&pairs(&[("featured", "true")]));
        assert_eq!(parsed.filter.featured, Some(true));

        let parsed = parse_pairs(&pairs(&[("featured", "yes")]));
        assert_eq!(parsed.filter.featured, None);
        assert_eq!(parsed.ignored, vec!["featured".to_string()]);
    }
}

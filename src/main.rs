mod config;
mod filter;
mod listing;
mod models;
mod pagination;

use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use filter::{parse_query, PropertyFilter};
use listing::{HttpListingSource, SearchOutcome, SearchSession};
use models::ResultSet;
use pagination::{PageInfo, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Arrienda Search - Misiones property listings");
    info!("===============================================");
    info!("");

    // The whole search state arrives as one query string, e.g.
    // "city=Posadas&priceMin=50000&limit=12"
    let raw_query = env::args().nth(1).unwrap_or_default();
    let parsed = parse_query(&raw_query);
    for key in &parsed.ignored {
        warn!("Ignoring unusable search parameter `{key}`");
    }

    let mut search_filter = parsed.filter;
    let config = Config::load();
    if search_filter.limit.is_none() {
        search_filter.limit = Some(config.default_limit.clamp(1, MAX_PAGE_SIZE));
    }

    let source = Arc::new(HttpListingSource::new(&config)?);
    info!(
        "Searching {} with {} filter(s)...",
        source.endpoint(),
        search_filter.active_constraints()
    );
    info!("");

    let session = SearchSession::new(source);
    session.set_filter(search_filter);

    let results = match session.search().await {
        SearchOutcome::Live(set) => set,
        SearchOutcome::Degraded { sample, error } => {
            warn!("Live search failed: {error}");
            warn!("Showing sample listings instead, retry when the API is reachable");
            sample
        }
        SearchOutcome::Superseded => {
            info!("Search superseded before completion");
            return Ok(());
        }
    };

    display(&results, &session.filter());

    // Save results for later inspection
    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved {} listings to search_results.json", results.items.len());

    Ok(())
}

fn display(results: &ResultSet, search_filter: &PropertyFilter) {
    info!(
        "\n✅ Showing {} of {} matching listings\n",
        results.items.len(),
        results.count
    );

    for (i, property) in results.items.iter().enumerate() {
        println!(
            "{}. {} ({} {})",
            i + 1,
            property.title,
            property.price,
            property.currency
        );
        println!(
            "   {}, {}, {}",
            property.location.address, property.location.city, property.location.province
        );
        println!(
            "   {} dorm., {} baños, {} m²",
            property.bedrooms, property.bathrooms, property.area
        );
        if !property.amenities.is_empty() {
            println!("   {}", property.amenities.join(", "));
        }
        println!("   {}", property.url);
        println!();
    }

    let limit = search_filter.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = search_filter.offset.unwrap_or(0);
    let page = PageInfo::compute(limit, offset, results.count);
    if page.total_pages > 0 {
        println!(
            "Página {} de {} ({} propiedades en total)",
            page.current_page, page.total_pages, results.count
        );
    } else {
        println!("Sin resultados para la búsqueda");
    }
}

use stay_scout::api::{CityDirectoryClient, ReviewClient, SearchClient};
use stay_scout::config::Config;
use stay_scout::models::{Amenity, SearchCriteria};
use stay_scout::session::SearchSession;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Stay Scout - listing search client");
    info!("=====================================");

    let config = Config::from_env();
    info!("Backend: {}", config.api_base_url);

    let directory = CityDirectoryClient::new(&config.api_base_url)?;
    let mut session = SearchSession::new(SearchClient::new(&config.api_base_url)?);

    session.initialize(&directory).await?;
    info!("Cities available: {}", session.cities().join(", "));

    let city = session
        .cities()
        .first()
        .cloned()
        .unwrap_or_else(|| "Paris".to_string());

    let criteria = SearchCriteria {
        city: city.clone(),
        price_min: Some(50.0),
        price_max: Some(200.0),
        bedrooms: Some(2),
        amenities: vec![Amenity::WiFi, Amenity::Kitchen],
        ..Default::default()
    };

    info!("Searching {} for listings between 50 and 200...", city);
    session.submit(&criteria).await?;

    let Some(results) = session.results() else {
        return Ok(());
    };

    info!("✅ Found {} listings\n", results.len());

    for (i, listing) in results.listings().iter().enumerate() {
        let name = listing
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("(unnamed)");
        println!("{}. {}", i + 1, name);
        if let Some(price) = listing.get("price") {
            println!("   Price: {}", price);
        }
        if let Some(hood) = listing
            .get("neighbourhood_cleansed")
            .and_then(|v| v.as_str())
        {
            println!("   Neighborhood: {}", hood);
        }
        println!();
    }

    // Pull reviews for the first listing, if any
    let first_id = results.listings().first().and_then(|l| l.get("id")).map(|v| match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    });

    if let Some(listing_id) = first_id {
        let reviews = ReviewClient::new(&config.api_base_url)?
            .get_reviews(&listing_id, &city)
            .await?;
        info!("💬 {} reviews for listing {}", reviews.len(), listing_id);

        for review in reviews.iter().take(5) {
            let who = review
                .get("reviewer_name")
                .and_then(|v| v.as_str())
                .unwrap_or("anonymous");
            let comment = review
                .get("comments")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            println!("   {}: {}", who, comment);
        }
    }

    Ok(())
}

use axum::http::{HeaderValue, Method};
use axum::Router;
use easytrip::config::Config;
use easytrip::db::{load_destinations_from_path, DestinationRepository, InMemoryDestinationRepository};
use easytrip::services::recommender::Recommender;
use easytrip::services::travel::TravelEstimator;
use easytrip::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easytrip=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting EasyTrip API server");
    tracing::info!(
        cruise_speed_kmh = config.pricing.cruise_speed_kmh,
        overhead_hours = config.pricing.overhead_hours,
        "Configuration loaded successfully"
    );

    // Reference data is loaded once and never mutated
    tracing::info!("Loading destinations from {}", config.data_path.display());
    let destinations = load_destinations_from_path(&config.data_path)?;
    let repo: Arc<dyn DestinationRepository> =
        Arc::new(InMemoryDestinationRepository::new(destinations));

    let recommender = Recommender::new(repo, TravelEstimator::new(config.pricing.clone()));
    let state = Arc::new(AppState { recommender });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(easytrip::routes::create_router(state))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    tracing::info!(origins = ?config.cors_origins, "CORS restricted to configured origins");
    layer.allow_origin(origins)
}

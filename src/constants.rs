//! Stable application-wide constants.
//!
//! Values here are classification thresholds, bucket bounds and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Pricing coefficients that are worth tuning per deployment live in
//! [`PricingConfig`](crate::config::PricingConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";
/// Default location of the destination dataset. Overridden by `TRAVEL_DATA_PATH`.
pub const DEFAULT_DATA_PATH: &str = "data/travel.csv";
/// Origins allowed by CORS when `CORS_ORIGINS` is absent (local dev server).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

// --- Flight & ticket estimation defaults ---

/// Average cruising speed used to turn great-circle distance into flight time.
pub const DEFAULT_CRUISE_SPEED_KMH: f64 = 900.0;
/// Fixed boarding/taxi overhead added to every flight. Also the flight time
/// reported when origin and destination coincide.
pub const DEFAULT_FLIGHT_OVERHEAD_HOURS: f64 = 1.0;
/// Flat part of the ticket price estimate.
pub const DEFAULT_TICKET_BASE_FARE: f64 = 50.0;
/// Ticket price per kilometre flown.
pub const DEFAULT_TICKET_PER_KM_RATE: f64 = 0.12;
/// Ticket price per hour in the air.
pub const DEFAULT_TICKET_PER_HOUR_RATE: f64 = 40.0;

// --- Quartile classification ---

/// Number of buckets for ticket price and final cost levels.
pub const COST_LEVEL_BUCKETS: usize = 4;

// --- Seasonal temperature thresholds (°C, lower bound inclusive) ---

/// Below this mean the season is Cold (code 0).
pub const TEMP_MILD_MIN_C: f64 = 15.0;
/// Mild (1) up to this mean, Warm (2) from here.
pub const TEMP_WARM_MIN_C: f64 = 20.0;
/// Hot (3) from this mean upward.
pub const TEMP_HOT_MIN_C: f64 = 25.0;

// --- Distance buckets (flight hours, lower bound inclusive) ---

/// Upper bounds of distance buckets 0..=3; bucket 4 is everything from 8h.
pub const DISTANCE_BUCKET_UPPER_HOURS: [f64; 4] = [2.0, 4.0, 6.0, 8.0];

// --- Activity matching ---

/// An activity counts as a match only when its rating is strictly above this.
pub const ACTIVITY_MATCH_MIN_RATING: f64 = 3.0;

// --- Client ---

/// Results shown per page by the presenter.
pub const RESULTS_PAGE_SIZE: usize = 10;
/// Default timeout for one recommendation request, in seconds.
pub const DEFAULT_CLIENT_TIMEOUT_SECONDS: u64 = 15;
/// Server the `recommend` binary talks to when `--server` is not given.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

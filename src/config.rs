use crate::constants::*;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    /// Allowed CORS origins. `["*"]` allows any origin.
    pub cors_origins: Vec<String>,
    pub pricing: PricingConfig,
}

/// Coefficients for the flight time and ticket price estimates.
///
/// Flight hours are `distance_km / cruise_speed_kmh + overhead_hours`, the
/// ticket price is `base_fare + per_km_rate * km + per_hour_rate * hours`.
/// Both are monotonic and continuous in distance for any positive values.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub cruise_speed_kmh: f64,
    pub overhead_hours: f64,
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_hour_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
            overhead_hours: DEFAULT_FLIGHT_OVERHEAD_HOURS,
            base_fare: DEFAULT_TICKET_BASE_FARE,
            per_km_rate: DEFAULT_TICKET_PER_KM_RATE,
            per_hour_rate: DEFAULT_TICKET_PER_HOUR_RATE,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            cruise_speed_kmh: env::var("FLIGHT_CRUISE_SPEED_KMH")
                .unwrap_or_else(|_| defaults.cruise_speed_kmh.to_string())
                .parse()
                .map_err(|_| "Invalid FLIGHT_CRUISE_SPEED_KMH")?,

            overhead_hours: env::var("FLIGHT_OVERHEAD_HOURS")
                .unwrap_or_else(|_| defaults.overhead_hours.to_string())
                .parse()
                .map_err(|_| "Invalid FLIGHT_OVERHEAD_HOURS")?,

            base_fare: env::var("TICKET_BASE_FARE")
                .unwrap_or_else(|_| defaults.base_fare.to_string())
                .parse()
                .map_err(|_| "Invalid TICKET_BASE_FARE")?,

            per_km_rate: env::var("TICKET_PER_KM_RATE")
                .unwrap_or_else(|_| defaults.per_km_rate.to_string())
                .parse()
                .map_err(|_| "Invalid TICKET_PER_KM_RATE")?,

            per_hour_rate: env::var("TICKET_PER_HOUR_RATE")
                .unwrap_or_else(|_| defaults.per_hour_rate.to_string())
                .parse()
                .map_err(|_| "Invalid TICKET_PER_HOUR_RATE")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.cruise_speed_kmh.is_finite() && self.cruise_speed_kmh > 0.0) {
            return Err("FLIGHT_CRUISE_SPEED_KMH must be a positive number".to_string());
        }
        if !(self.overhead_hours.is_finite() && self.overhead_hours > 0.0) {
            return Err("FLIGHT_OVERHEAD_HOURS must be a positive number".to_string());
        }
        for (name, value) in [
            ("TICKET_BASE_FARE", self.base_fare),
            ("TICKET_PER_KM_RATE", self.per_km_rate),
            ("TICKET_PER_HOUR_RATE", self.per_hour_rate),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be a non-negative number", name));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            data_path: env::var("TRAVEL_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
                .into(),
            cors_origins,
            pricing: PricingConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// Library exports for testing and reusability

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::recommender::Recommender;

// App state for sharing across the application
pub struct AppState {
    pub recommender: Recommender,
}

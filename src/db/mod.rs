mod csv_loader;
pub mod destination_repository;

pub use csv_loader::{load_destinations, load_destinations_from_path};
pub use destination_repository::{DestinationRepository, InMemoryDestinationRepository};

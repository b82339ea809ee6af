use crate::error::Result;
use crate::models::Destination;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only source of reference destinations.
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Every destination, in dataset order.
    async fn all(&self) -> Result<Arc<[Destination]>>;

    async fn count(&self) -> Result<usize>;
}

/// Destinations held in memory for the lifetime of the process.
pub struct InMemoryDestinationRepository {
    destinations: Arc<[Destination]>,
}

impl InMemoryDestinationRepository {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations: destinations.into(),
        }
    }
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationRepository {
    async fn all(&self) -> Result<Arc<[Destination]>> {
        Ok(self.destinations.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.destinations.len())
    }
}

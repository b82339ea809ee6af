mod filter;
mod pricing;

use crate::db::DestinationRepository;
use crate::error::Result;
use crate::models::{FilterCriteria, Recommendation};
use crate::services::travel::TravelEstimator;
use std::sync::Arc;
use std::time::Instant;

pub use filter::matches;
pub use pricing::{price_destinations, PricedDestination};

/// Computes origin-dependent costs for the whole dataset and keeps the
/// destinations that satisfy every supplied criterion.
///
/// Stateless per request: the only shared data is the immutable dataset, so
/// concurrent calls need no coordination.
pub struct Recommender {
    repo: Arc<dyn DestinationRepository>,
    estimator: TravelEstimator,
}

impl Recommender {
    pub fn new(repo: Arc<dyn DestinationRepository>, estimator: TravelEstimator) -> Self {
        Self { repo, estimator }
    }

    pub fn repository(&self) -> &Arc<dyn DestinationRepository> {
        &self.repo
    }

    /// Matching destinations in dataset order.
    pub async fn recommend(&self, criteria: &FilterCriteria) -> Result<Vec<Recommendation>> {
        let start = Instant::now();
        let destinations = self.repo.all().await?;

        let priced = price_destinations(&self.estimator, &destinations, &criteria.origin);
        let results: Vec<Recommendation> = priced
            .iter()
            .filter(|p| matches(p, criteria))
            .map(PricedDestination::to_recommendation)
            .collect();

        tracing::debug!(
            total = destinations.len(),
            matched = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Filtered {} of {} destinations",
            results.len(),
            destinations.len()
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryDestinationRepository;
    use crate::models::{
        Activity, ActivityRatings, BudgetLevel, Coordinates, CountryScope, Destination,
        MonthlyTemperatures, Origin,
    };

    fn recommender(destinations: Vec<Destination>) -> Recommender {
        Recommender::new(
            Arc::new(InMemoryDestinationRepository::new(destinations)),
            TravelEstimator::default(),
        )
    }

    fn dest(id: usize, city: &str, country: &str, lat: f64, lng: f64, beach: f64) -> Destination {
        Destination::new(
            id,
            city,
            country,
            Coordinates::new(lat, lng).unwrap(),
            Some(BudgetLevel::MID_RANGE),
            MonthlyTemperatures::new([Some(18.0); 12]),
            ActivityRatings::default().with(Activity::Beach, beach),
        )
    }

    fn from_seoul() -> FilterCriteria {
        FilterCriteria::unconstrained(Origin {
            city: "Seoul".to_string(),
            country: "Korea, Republic of".to_string(),
            coordinates: Coordinates::new(37.5665, 126.978).unwrap(),
        })
    }

    #[tokio::test]
    async fn keeps_dataset_order() {
        let r = recommender(vec![
            dest(0, "Paris", "France", 48.8566, 2.3522, 1.0),
            dest(1, "Busan", "Korea, Republic of", 35.1796, 129.0756, 5.0),
            dest(2, "Tokyo", "Japan", 35.6762, 139.6503, 2.0),
        ]);
        let results = r.recommend(&from_seoul()).await.unwrap();
        let ids: Vec<usize> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn domestic_only() {
        let r = recommender(vec![
            dest(0, "Paris", "France", 48.8566, 2.3522, 1.0),
            dest(1, "Busan", "Korea, Republic of", 35.1796, 129.0756, 5.0),
        ]);
        let mut criteria = from_seoul();
        criteria.country = Some(CountryScope::Domestic);
        let results = r.recommend(&criteria).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Busan");
        assert_eq!(results[0].domestic_intl, CountryScope::Domestic);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let r = recommender(vec![dest(0, "Paris", "France", 48.8566, 2.3522, 1.0)]);
        let mut criteria = from_seoul();
        criteria.preferences = vec![Activity::Beach];
        assert!(r.recommend(&criteria).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_dataset_yields_nothing() {
        let r = recommender(vec![]);
        assert!(r.recommend(&from_seoul()).await.unwrap().is_empty());
    }
}

use crate::constants::COST_LEVEL_BUCKETS;
use crate::models::recommendation::round2;
use crate::models::{
    CostLevel, CountryScope, Destination, DistanceBucket, Origin, Recommendation, Season,
};
use crate::services::quartile::quantile_buckets;
use crate::services::travel::{TravelEstimate, TravelEstimator};

/// A destination with every origin-dependent field attached.
#[derive(Debug, Clone)]
pub struct PricedDestination<'a> {
    pub destination: &'a Destination,
    pub travel: TravelEstimate,
    pub ticket_price_level: CostLevel,
    pub final_cost_sum: u8,
    pub final_cost_level: CostLevel,
    pub scope: CountryScope,
}

impl PricedDestination<'_> {
    pub fn distance_bucket(&self) -> DistanceBucket {
        DistanceBucket::from_flight_hours(self.travel.flight_hours)
    }

    pub fn to_recommendation(&self) -> Recommendation {
        let d = self.destination;
        Recommendation {
            id: d.id,
            city: d.city.clone(),
            country: d.country.clone(),
            distance_km: round2(self.travel.distance_km),
            flight_hours: round2(self.travel.flight_hours),
            ticket_price: round2(self.travel.ticket_price),
            ticket_price_level: self.ticket_price_level,
            budget_level: d.budget_level.map(|b| b.value()),
            final_cost_sum: self.final_cost_sum,
            final_cost_level: self.final_cost_level,
            mar_may: d.season_code(Season::MarMay),
            jun_aug: d.season_code(Season::JunAug),
            sep_nov: d.season_code(Season::SepNov),
            dec_feb: d.season_code(Season::DecFeb),
            domestic_intl: self.scope,
        }
    }
}

/// Attach travel estimates and cost tiers to every destination.
///
/// Quartile boundaries are taken over the full slice, never over a filtered
/// subset, so a destination's tier does not depend on the other criteria.
pub fn price_destinations<'a>(
    estimator: &TravelEstimator,
    destinations: &'a [Destination],
    origin: &Origin,
) -> Vec<PricedDestination<'a>> {
    let travel: Vec<TravelEstimate> = destinations
        .iter()
        .map(|d| estimator.estimate(&origin.coordinates, &d.coordinates))
        .collect();

    let prices: Vec<f64> = travel.iter().map(|t| t.ticket_price).collect();
    let ticket_levels = quantile_buckets(&prices, COST_LEVEL_BUCKETS);

    // Unknown budget tiers count as 0.
    let sums: Vec<u8> = destinations
        .iter()
        .zip(&ticket_levels)
        .map(|(d, &level)| d.budget_level.map_or(0, |b| b.value()) + level as u8)
        .collect();
    let sum_values: Vec<f64> = sums.iter().map(|&s| f64::from(s)).collect();
    let final_levels = quantile_buckets(&sum_values, COST_LEVEL_BUCKETS);

    destinations
        .iter()
        .zip(travel)
        .zip(ticket_levels.into_iter().zip(sums).zip(final_levels))
        .map(|((destination, travel), ((ticket_level, sum), final_level))| {
            let scope = if destination.is_domestic_for(&origin.country) {
                CountryScope::Domestic
            } else {
                CountryScope::International
            };
            PricedDestination {
                destination,
                travel,
                ticket_price_level: CostLevel::from_bucket(ticket_level),
                final_cost_sum: sum,
                final_cost_level: CostLevel::from_bucket(final_level),
                scope,
            }
        })
        .collect()
}

use crate::config::PricingConfig;
use crate::models::Coordinates;

/// Origin-relative travel figures for one destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub flight_hours: f64,
    pub ticket_price: f64,
}

/// Turns great-circle distance into flight time and an estimated fare.
#[derive(Debug, Clone)]
pub struct TravelEstimator {
    pricing: PricingConfig,
}

impl TravelEstimator {
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Cruise time plus a fixed overhead; equals the overhead at zero distance.
    pub fn flight_hours(&self, distance_km: f64) -> f64 {
        distance_km.max(0.0) / self.pricing.cruise_speed_kmh + self.pricing.overhead_hours
    }

    pub fn ticket_price(&self, distance_km: f64, flight_hours: f64) -> f64 {
        self.pricing.base_fare
            + self.pricing.per_km_rate * distance_km
            + self.pricing.per_hour_rate * flight_hours
    }

    pub fn estimate(&self, origin: &Coordinates, destination: &Coordinates) -> TravelEstimate {
        let distance_km = origin.distance_to(destination);
        let flight_hours = self.flight_hours(distance_km);
        TravelEstimate {
            distance_km,
            flight_hours,
            ticket_price: self.ticket_price(distance_km, flight_hours),
        }
    }
}

impl Default for TravelEstimator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_place_costs_only_the_overhead() {
        let estimator = TravelEstimator::default();
        let seoul = Coordinates::new(37.5665, 126.978).unwrap();
        let est = estimator.estimate(&seoul, &seoul);
        assert_eq!(est.distance_km, 0.0);
        assert_eq!(est.flight_hours, estimator.pricing().overhead_hours);
        // 50 base + 40 * 1h
        assert!((est.ticket_price - 90.0).abs() < 1e-9);
    }

    #[test]
    fn flight_hours_follow_cruise_speed() {
        let estimator = TravelEstimator::default();
        assert!((estimator.flight_hours(900.0) - 2.0).abs() < 1e-12);
        assert!((estimator.flight_hours(4500.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn estimates_grow_with_distance() {
        let estimator = TravelEstimator::default();
        let mut last = estimator.ticket_price(0.0, estimator.flight_hours(0.0));
        let mut last_hours = estimator.flight_hours(0.0);
        for km in (100..20_000).step_by(250) {
            let km = km as f64;
            let hours = estimator.flight_hours(km);
            let price = estimator.ticket_price(km, hours);
            assert!(hours > last_hours);
            assert!(price > last);
            last = price;
            last_hours = hours;
        }
    }

    #[test]
    fn custom_pricing_is_used() {
        let estimator = TravelEstimator::new(PricingConfig {
            cruise_speed_kmh: 500.0,
            overhead_hours: 0.5,
            base_fare: 10.0,
            per_km_rate: 1.0,
            per_hour_rate: 0.0,
        });
        assert!((estimator.flight_hours(1000.0) - 2.5).abs() < 1e-12);
        assert!((estimator.ticket_price(1000.0, 2.5) - 1010.0).abs() < 1e-9);
    }
}

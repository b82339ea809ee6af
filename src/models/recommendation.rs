use crate::models::{ClimateCode, CountryScope, Season};
use serde::{Deserialize, Serialize};

/// Quartile-ranked cost tier: 0 Low, 1 Mid-Low, 2 Mid-High, 3 High.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CostLevel(u8);

impl CostLevel {
    pub fn new(level: u8) -> Option<Self> {
        (level <= 3).then_some(CostLevel(level))
    }

    /// Build from a quartile bucket index, saturating at the top tier.
    pub fn from_bucket(bucket: usize) -> Self {
        CostLevel(bucket.min(3) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// One matching destination as returned by `/recommend`.
///
/// Field names are the wire contract, including one field per season label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: usize,
    pub city: String,
    pub country: String,
    pub distance_km: f64,
    pub flight_hours: f64,
    pub ticket_price: f64,
    pub ticket_price_level: CostLevel,
    /// Absent when the dataset tier was unknown.
    pub budget_level: Option<u8>,
    pub final_cost_sum: u8,
    pub final_cost_level: CostLevel,
    #[serde(rename = "Mar-May")]
    pub mar_may: ClimateCode,
    #[serde(rename = "Jun-Aug")]
    pub jun_aug: ClimateCode,
    #[serde(rename = "Sep-Nov")]
    pub sep_nov: ClimateCode,
    #[serde(rename = "Dec-Feb")]
    pub dec_feb: ClimateCode,
    pub domestic_intl: CountryScope,
}

impl Recommendation {
    pub fn season_code(&self, season: Season) -> ClimateCode {
        match season {
            Season::MarMay => self.mar_may,
            Season::JunAug => self.jun_aug,
            Season::SepNov => self.sep_nov,
            Season::DecFeb => self.dec_feb,
        }
    }
}

/// Round to two decimals for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

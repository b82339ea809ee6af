use crate::constants::{TEMP_HOT_MIN_C, TEMP_MILD_MIN_C, TEMP_WARM_MIN_C};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed three-month window, named by its months rather than by a
/// hemisphere-dependent season name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    #[serde(rename = "Mar-May")]
    MarMay,
    #[serde(rename = "Jun-Aug")]
    JunAug,
    #[serde(rename = "Sep-Nov")]
    SepNov,
    #[serde(rename = "Dec-Feb")]
    DecFeb,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::MarMay,
        Season::JunAug,
        Season::SepNov,
        Season::DecFeb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Season::MarMay => "Mar-May",
            Season::JunAug => "Jun-Aug",
            Season::SepNov => "Sep-Nov",
            Season::DecFeb => "Dec-Feb",
        }
    }

    /// Calendar months (1-12) making up this season.
    pub fn months(&self) -> [u32; 3] {
        match self {
            Season::MarMay => [3, 4, 5],
            Season::JunAug => [6, 7, 8],
            Season::SepNov => [9, 10, 11],
            Season::DecFeb => [12, 1, 2],
        }
    }

    /// Position in [`Season::ALL`], used to index per-season arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .iter()
            .find(|season| season.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Invalid season: '{}'", s))
    }
}

/// Ordinal climate class of a season's mean temperature: 0 Cold, 1 Mild,
/// 2 Warm, 3 Hot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ClimateCode(u8);

impl ClimateCode {
    pub const COLD: ClimateCode = ClimateCode(0);
    pub const MILD: ClimateCode = ClimateCode(1);
    pub const WARM: ClimateCode = ClimateCode(2);
    pub const HOT: ClimateCode = ClimateCode(3);

    pub fn new(code: u8) -> Option<Self> {
        (code <= 3).then_some(ClimateCode(code))
    }

    /// Classify a mean temperature in °C. Each lower bound is inclusive.
    /// Non-finite input falls back to Cold.
    pub fn from_celsius(temp: f64) -> Self {
        if !temp.is_finite() || temp < TEMP_MILD_MIN_C {
            ClimateCode::COLD
        } else if temp < TEMP_WARM_MIN_C {
            ClimateCode::MILD
        } else if temp < TEMP_HOT_MIN_C {
            ClimateCode::WARM
        } else {
            ClimateCode::HOT
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Monthly mean temperatures, index 0 = January.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTemperatures([Option<f64>; 12]);

impl MonthlyTemperatures {
    pub fn new(months: [Option<f64>; 12]) -> Self {
        Self(months)
    }

    pub fn set(&mut self, month: u32, avg_celsius: f64) {
        if (1..=12).contains(&month) {
            self.0[(month - 1) as usize] = Some(avg_celsius);
        }
    }

    pub fn get(&self, month: u32) -> Option<f64> {
        if (1..=12).contains(&month) {
            self.0[(month - 1) as usize]
        } else {
            None
        }
    }

    /// Mean over the season's months that have data, or `None` when none do.
    pub fn season_mean(&self, season: Season) -> Option<f64> {
        let present: Vec<f64> = season
            .months()
            .iter()
            .filter_map(|&month| self.get(month))
            .collect();
        if present.is_empty() {
            return None;
        }
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }

    /// Climate code for the season. A season with no data at all is Cold.
    pub fn season_code(&self, season: Season) -> ClimateCode {
        self.season_mean(season)
            .map(ClimateCode::from_celsius)
            .unwrap_or(ClimateCode::COLD)
    }
}

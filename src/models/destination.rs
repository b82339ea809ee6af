use crate::constants::ACTIVITY_MATCH_MIN_RATING;
use crate::models::{ClimateCode, Coordinates, MonthlyTemperatures, Season};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Culture,
    Adventure,
    Nature,
    Beach,
    Nightlife,
    Cuisine,
    Wellness,
    Urban,
    Seclusion,
}

impl Activity {
    pub const ALL: [Activity; 9] = [
        Activity::Culture,
        Activity::Adventure,
        Activity::Nature,
        Activity::Beach,
        Activity::Nightlife,
        Activity::Cuisine,
        Activity::Wellness,
        Activity::Urban,
        Activity::Seclusion,
    ];

    /// Dataset column holding this activity's rating.
    pub fn column(&self) -> &'static str {
        match self {
            Activity::Beach => "beaches",
            other => other.key(),
        }
    }

    /// Key accepted in request `PREFERENCES`.
    pub fn key(&self) -> &'static str {
        match self {
            Activity::Culture => "culture",
            Activity::Adventure => "adventure",
            Activity::Nature => "nature",
            Activity::Beach => "beach",
            Activity::Nightlife => "nightlife",
            Activity::Cuisine => "cuisine",
            Activity::Wellness => "wellness",
            Activity::Urban => "urban",
            Activity::Seclusion => "seclusion",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "culture" => Ok(Activity::Culture),
            "adventure" => Ok(Activity::Adventure),
            "nature" => Ok(Activity::Nature),
            "beach" | "beaches" => Ok(Activity::Beach),
            "nightlife" => Ok(Activity::Nightlife),
            "cuisine" => Ok(Activity::Cuisine),
            "wellness" => Ok(Activity::Wellness),
            "urban" => Ok(Activity::Urban),
            "seclusion" => Ok(Activity::Seclusion),
            _ => Err(format!("Invalid activity: '{}'", s)),
        }
    }
}

/// Per-activity ratings of a destination (roughly 0-5).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityRatings([f64; 9]);

impl ActivityRatings {
    pub fn with(mut self, activity: Activity, rating: f64) -> Self {
        self.set(activity, rating);
        self
    }

    pub fn set(&mut self, activity: Activity, rating: f64) {
        self.0[activity.index()] = rating;
    }

    pub fn get(&self, activity: Activity) -> f64 {
        self.0[activity.index()]
    }

    /// True when the activity is rated strictly above the match threshold.
    pub fn is_strong(&self, activity: Activity) -> bool {
        self.get(activity) > ACTIVITY_MATCH_MIN_RATING
    }
}

/// Static budget tier of a destination: 0 Budget, 1 Mid-range, 2 Luxury.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BudgetLevel(u8);

impl BudgetLevel {
    pub const BUDGET: BudgetLevel = BudgetLevel(0);
    pub const MID_RANGE: BudgetLevel = BudgetLevel(1);
    pub const LUXURY: BudgetLevel = BudgetLevel(2);

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Budget" => Ok(BudgetLevel::BUDGET),
            "Mid-range" => Ok(BudgetLevel::MID_RANGE),
            "Luxury" => Ok(BudgetLevel::LUXURY),
            _ => Err(format!("Invalid budget level: '{}'", s)),
        }
    }
}

/// One row of reference data. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: usize,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
    /// `None` when the dataset carried an unknown tier.
    pub budget_level: Option<BudgetLevel>,
    pub temperatures: MonthlyTemperatures,
    pub activities: ActivityRatings,
    /// Climate code per season, indexed by [`Season::index`].
    pub season_codes: [ClimateCode; 4],
}

impl Destination {
    pub fn new(
        id: usize,
        city: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
        budget_level: Option<BudgetLevel>,
        temperatures: MonthlyTemperatures,
        activities: ActivityRatings,
    ) -> Self {
        let season_codes = Season::ALL.map(|season| temperatures.season_code(season));
        Destination {
            id,
            city: city.into(),
            country: country.into(),
            coordinates,
            budget_level,
            temperatures,
            activities,
            season_codes,
        }
    }

    pub fn season_code(&self, season: Season) -> ClimateCode {
        self.season_codes[season.index()]
    }

    pub fn is_domestic_for(&self, user_country: &str) -> bool {
        self.country.trim().to_lowercase() == user_country.trim().to_lowercase()
    }
}

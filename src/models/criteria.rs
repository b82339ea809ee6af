use crate::error::{AppError, Result};
use crate::models::{Activity, ClimateCode, Coordinates, CostLevel, DistanceBucket, Season};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Wire form of a `/recommend` request body. Codes are kept as plain
/// integers here so out-of-range values can be reported as validation
/// failures rather than JSON errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_location: UserLocation,
    #[serde(rename = "VACATION_TIME", default, deserialize_with = "null_as_default")]
    pub vacation_time: Vec<String>,
    #[serde(rename = "CLIMATE", default, deserialize_with = "null_as_default")]
    pub climate: Vec<i64>,
    #[serde(rename = "BUDGET", default, deserialize_with = "null_as_default")]
    pub budget: Vec<i64>,
    #[serde(rename = "PREFERENCES", default, deserialize_with = "null_as_default")]
    pub preferences: Vec<String>,
    #[serde(rename = "COUNTRY", default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(rename = "DISTANCE", default, deserialize_with = "null_as_default")]
    pub distance: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CountryScope {
    Domestic,
    International,
}

impl CountryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryScope::Domestic => "domestic",
            CountryScope::International => "international",
        }
    }
}

impl fmt::Display for CountryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domestic" => Ok(CountryScope::Domestic),
            "international" => Ok(CountryScope::International),
            _ => Err(format!("Invalid country scope: '{}'", s)),
        }
    }
}

/// Where the traveller departs from.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

/// Season and climate selections only constrain results together.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonClimate {
    pub seasons: BTreeSet<Season>,
    pub climates: BTreeSet<ClimateCode>,
}

/// Validated filter criteria for one request. Empty sets impose no constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub origin: Origin,
    pub season_climate: Option<SeasonClimate>,
    pub budget: BTreeSet<CostLevel>,
    pub preferences: Vec<Activity>,
    pub country: Option<CountryScope>,
    pub distance: BTreeSet<DistanceBucket>,
}

impl FilterCriteria {
    /// Criteria that let every destination through.
    pub fn unconstrained(origin: Origin) -> Self {
        FilterCriteria {
            origin,
            season_climate: None,
            budget: BTreeSet::new(),
            preferences: Vec::new(),
            country: None,
            distance: BTreeSet::new(),
        }
    }
}

impl RecommendRequest {
    /// Validate the payload and turn it into typed criteria.
    ///
    /// Missing or out-of-range coordinates are a bad request; codes outside
    /// their domains fail validation. Unknown activity keys are ignored.
    pub fn into_criteria(self) -> Result<FilterCriteria> {
        let seasons = self
            .vacation_time
            .iter()
            .map(|label| label.parse::<Season>())
            .collect::<std::result::Result<BTreeSet<_>, _>>()
            .map_err(|_| {
                let mut labels: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();
                labels.sort_unstable();
                AppError::Validation(format!("VACATION_TIME must be in {:?}", labels))
            })?;

        let climates = parse_codes(&self.climate, ClimateCode::new)
            .ok_or_else(|| validation("CLIMATE", "[0,1,2,3]"))?;
        let budget =
            parse_codes(&self.budget, CostLevel::new).ok_or_else(|| validation("BUDGET", "[0,1,2,3]"))?;
        let distance = parse_codes(&self.distance, DistanceBucket::new)
            .ok_or_else(|| validation("DISTANCE", "[0,1,2,3,4]"))?;

        let (lat, lng) = match (self.user_location.latitude, self.user_location.longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                return Err(AppError::InvalidRequest(
                    "user_location.latitude and user_location.longitude are required".to_string(),
                ))
            }
        };
        let coordinates = Coordinates::new(lat, lng).map_err(AppError::InvalidRequest)?;

        let mut preferences = Vec::new();
        for key in &self.preferences {
            match key.parse::<Activity>() {
                Ok(activity) if !preferences.contains(&activity) => preferences.push(activity),
                Ok(_) => {}
                Err(_) => tracing::debug!(preference = %key, "Ignoring unknown activity preference"),
            }
        }

        let season_climate = if seasons.is_empty() || climates.is_empty() {
            None
        } else {
            Some(SeasonClimate { seasons, climates })
        };

        Ok(FilterCriteria {
            origin: Origin {
                city: self.user_location.city.trim().to_string(),
                country: self.user_location.country.trim().to_string(),
                coordinates,
            },
            season_climate,
            budget,
            preferences,
            country: self.country.parse().ok(),
            distance,
        })
    }
}

fn parse_codes<T: Ord>(raw: &[i64], make: impl Fn(u8) -> Option<T>) -> Option<BTreeSet<T>> {
    raw.iter()
        .map(|&code| u8::try_from(code).ok().and_then(&make))
        .collect()
}

fn validation(field: &str, allowed: &str) -> AppError {
    AppError::Validation(format!("{} must be integers among {}.", field, allowed))
}

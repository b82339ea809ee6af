use super::ClientError;
use crate::models::{
    Activity, ClimateCode, Coordinates, CostLevel, CountryScope, DistanceBucket, RecommendRequest,
    Season, UserLocation,
};

/// Everything the filter form collects, as one immutable value.
///
/// Each `with_*` call returns a new form; [`FilterForm::to_request`] is the
/// only place a request payload is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub city: String,
    pub country: String,
    pub origin: Coordinates,
    pub seasons: Vec<Season>,
    pub climates: Vec<ClimateCode>,
    pub budgets: Vec<CostLevel>,
    pub preferences: Vec<Activity>,
    pub scope: Option<CountryScope>,
    pub distances: Vec<DistanceBucket>,
}

impl FilterForm {
    pub fn new(city: impl Into<String>, country: impl Into<String>, origin: Coordinates) -> Self {
        FilterForm {
            city: city.into(),
            country: country.into(),
            origin,
            seasons: Vec::new(),
            climates: Vec::new(),
            budgets: Vec::new(),
            preferences: Vec::new(),
            scope: None,
            distances: Vec::new(),
        }
    }

    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = dedup(seasons);
        self
    }

    pub fn with_climates(mut self, climates: impl IntoIterator<Item = ClimateCode>) -> Self {
        self.climates = dedup(climates);
        self
    }

    pub fn with_budgets(mut self, budgets: impl IntoIterator<Item = CostLevel>) -> Self {
        self.budgets = dedup(budgets);
        self
    }

    pub fn with_preferences(mut self, preferences: impl IntoIterator<Item = Activity>) -> Self {
        self.preferences = dedup(preferences);
        self
    }

    pub fn with_scope(mut self, scope: Option<CountryScope>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_distances(mut self, distances: impl IntoIterator<Item = DistanceBucket>) -> Self {
        self.distances = dedup(distances);
        self
    }

    pub fn to_request(&self) -> RecommendRequest {
        RecommendRequest {
            user_location: UserLocation {
                city: self.city.clone(),
                country: self.country.clone(),
                latitude: Some(self.origin.lat),
                longitude: Some(self.origin.lng),
            },
            vacation_time: self.seasons.iter().map(|s| s.label().to_string()).collect(),
            climate: self.climates.iter().map(|c| i64::from(c.value())).collect(),
            budget: self.budgets.iter().map(|b| i64::from(b.value())).collect(),
            preferences: self.preferences.iter().map(|a| a.key().to_string()).collect(),
            country: self
                .scope
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            distance: self.distances.iter().map(|d| i64::from(d.value())).collect(),
        }
    }
}

fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Validate coordinates reported by a location provider or typed by hand.
pub fn parse_coordinates(lat: &str, lng: &str) -> Result<Coordinates, ClientError> {
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| ClientError::Geolocation(format!("latitude '{}' is not a number", lat)))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| ClientError::Geolocation(format!("longitude '{}' is not a number", lng)))?;
    Coordinates::new(lat, lng).map_err(ClientError::Geolocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seoul() -> Coordinates {
        Coordinates::new(37.5665, 126.978).unwrap()
    }

    #[test]
    fn empty_form_builds_unconstrained_request() {
        let req = FilterForm::new("Seoul", "Korea, Republic of", seoul()).to_request();
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["user_location"]["latitude"], json!(37.5665));
        assert_eq!(value["VACATION_TIME"], json!([]));
        assert_eq!(value["COUNTRY"], json!(""));
        assert_eq!(value["DISTANCE"], json!([]));
    }

    #[test]
    fn selections_serialize_to_wire_codes() {
        let form = FilterForm::new("Seoul", "Korea, Republic of", seoul())
            .with_seasons([Season::DecFeb, Season::DecFeb])
            .with_climates([ClimateCode::COLD])
            .with_budgets(CostLevel::new(1))
            .with_preferences([Activity::Beach, Activity::Culture])
            .with_scope(Some(CountryScope::Domestic))
            .with_distances(DistanceBucket::new(4));
        let value = serde_json::to_value(form.to_request()).unwrap();

        assert_eq!(value["VACATION_TIME"], json!(["Dec-Feb"]));
        assert_eq!(value["CLIMATE"], json!([0]));
        assert_eq!(value["BUDGET"], json!([1]));
        assert_eq!(value["PREFERENCES"], json!(["beach", "culture"]));
        assert_eq!(value["COUNTRY"], json!("domestic"));
        assert_eq!(value["DISTANCE"], json!([4]));
    }

    #[test]
    fn form_round_trips_through_server_validation() {
        let form = FilterForm::new("Seoul", "Korea, Republic of", seoul())
            .with_seasons([Season::JunAug])
            .with_climates([ClimateCode::HOT]);
        let criteria = form.to_request().into_criteria().unwrap();
        assert!(criteria.season_climate.is_some());
        assert_eq!(criteria.origin.coordinates, seoul());
    }

    #[test]
    fn builder_leaves_original_untouched() {
        let base = FilterForm::new("Seoul", "Korea, Republic of", seoul());
        let narrowed = base.clone().with_scope(Some(CountryScope::International));
        assert_eq!(base.scope, None);
        assert_eq!(narrowed.scope, Some(CountryScope::International));
    }

    #[test]
    fn bad_coordinates_are_reported() {
        assert!(parse_coordinates(" 37.5 ", "127.0").is_ok());
        let err = parse_coordinates("north", "127.0").unwrap_err();
        assert!(matches!(err, ClientError::Geolocation(_)));
        assert!(err.to_string().contains("north"));
        assert!(matches!(
            parse_coordinates("95", "0"),
            Err(ClientError::Geolocation(_))
        ));
    }
}

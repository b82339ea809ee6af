use crate::error::{AppError, Result};
use crate::models::{Activity, CountryScope, Recommendation, RecommendRequest, Season};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// POST /recommend
/// Filter the destination set against the submitted criteria
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>> {
    let Json(request) = payload.map_err(AppError::from)?;
    let criteria = request.into_criteria()?;

    tracing::info!(
        lat = criteria.origin.coordinates.lat,
        lng = criteria.origin.coordinates.lng,
        country = %criteria.origin.country,
        budget = criteria.budget.len(),
        distance = criteria.distance.len(),
        preferences = criteria.preferences.len(),
        climate = criteria.season_climate.is_some(),
        "Recommend request from ({:.4}, {:.4}) {}",
        criteria.origin.coordinates.lat,
        criteria.origin.coordinates.lng,
        criteria.origin.country
    );

    let results = state.recommender.recommend(&criteria).await?;

    tracing::info!(matched = results.len(), "Returning {} destinations", results.len());

    Ok(Json(results))
}

/// GET /recommend
/// Describe the accepted request body
pub async fn recommend_schema() -> Json<Value> {
    let seasons: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();
    let preferences: Vec<&str> = Activity::ALL.iter().map(|a| a.key()).collect();
    let country = format!(
        "{}|{}",
        CountryScope::Domestic.as_str(),
        CountryScope::International.as_str()
    );

    Json(json!({
        "hint": "POST JSON to this endpoint.",
        "schema": {
            "user_location": {
                "city": "",
                "country": "",
                "latitude": 0,
                "longitude": 0
            },
            "VACATION_TIME": seasons,
            "CLIMATE": [0, 1, 2, 3],
            "BUDGET": [0, 1, 2, 3],
            "PREFERENCES": preferences,
            "COUNTRY": country,
            "DISTANCE": [0, 1, 2, 3, 4]
        }
    }))
}

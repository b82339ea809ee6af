use super::pricing::PricedDestination;
use crate::models::{FilterCriteria, SeasonClimate};

/// Conjunctive across criterion groups, disjunctive within each group.
/// An empty group lets everything through.
pub fn matches(priced: &PricedDestination<'_>, criteria: &FilterCriteria) -> bool {
    matches_country(priced, criteria)
        && matches_distance(priced, criteria)
        && matches_budget(priced, criteria)
        && criteria
            .season_climate
            .as_ref()
            .map_or(true, |sc| matches_climate(priced, sc))
        && matches_preferences(priced, criteria)
}

fn matches_country(priced: &PricedDestination<'_>, criteria: &FilterCriteria) -> bool {
    criteria.country.map_or(true, |scope| priced.scope == scope)
}

fn matches_distance(priced: &PricedDestination<'_>, criteria: &FilterCriteria) -> bool {
    criteria.distance.is_empty() || criteria.distance.contains(&priced.distance_bucket())
}

fn matches_budget(priced: &PricedDestination<'_>, criteria: &FilterCriteria) -> bool {
    criteria.budget.is_empty() || criteria.budget.contains(&priced.final_cost_level)
}

/// Any selected season whose code is among the selected climates.
fn matches_climate(priced: &PricedDestination<'_>, sc: &SeasonClimate) -> bool {
    sc.seasons
        .iter()
        .any(|&season| sc.climates.contains(&priced.destination.season_code(season)))
}

/// At least one preferred activity rated strongly.
fn matches_preferences(priced: &PricedDestination<'_>, criteria: &FilterCriteria) -> bool {
    criteria.preferences.is_empty()
        || criteria
            .preferences
            .iter()
            .any(|&activity| priced.destination.activities.is_strong(activity))
}

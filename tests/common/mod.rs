use easytrip::db::{DestinationRepository, InMemoryDestinationRepository};
use easytrip::models::{
    Activity, ActivityRatings, BudgetLevel, Coordinates, Destination, MonthlyTemperatures,
};
use easytrip::services::recommender::Recommender;
use easytrip::services::travel::TravelEstimator;
use easytrip::AppState;
use std::sync::Arc;

pub const SEOUL_LAT: f64 = 37.5665;
pub const SEOUL_LNG: f64 = 126.978;
pub const KOREA: &str = "Korea, Republic of";

fn destination(
    id: usize,
    city: &str,
    country: &str,
    (lat, lng): (f64, f64),
    budget: BudgetLevel,
    temps: [f64; 12],
    strong: &[Activity],
) -> Destination {
    let activities = strong
        .iter()
        .fold(ActivityRatings::default().with(Activity::Culture, 2.0), |r, &a| {
            r.with(a, 5.0)
        });
    Destination::new(
        id,
        city,
        country,
        Coordinates::new(lat, lng).unwrap(),
        Some(budget),
        MonthlyTemperatures::new(temps.map(Some)),
        activities,
    )
}

/// Six destinations with distinct flight times from Seoul.
#[allow(dead_code)]
pub fn fixture_destinations() -> Vec<Destination> {
    vec![
        destination(
            0,
            "Busan",
            KOREA,
            (35.1796, 129.0756),
            BudgetLevel::MID_RANGE,
            [3.0, 5.0, 9.0, 14.0, 18.0, 21.0, 25.0, 26.0, 22.0, 17.0, 11.0, 5.0],
            &[Activity::Beach, Activity::Cuisine],
        ),
        destination(
            1,
            "Jeju",
            KOREA,
            (33.4996, 126.5312),
            BudgetLevel::MID_RANGE,
            [6.0, 7.0, 10.0, 14.0, 18.0, 22.0, 26.0, 27.0, 23.0, 18.0, 13.0, 8.0],
            &[Activity::Nature, Activity::Beach],
        ),
        destination(
            2,
            "Tokyo",
            "Japan",
            (35.6762, 139.6503),
            BudgetLevel::LUXURY,
            [6.0, 7.0, 10.0, 15.0, 19.0, 22.0, 26.0, 27.0, 24.0, 18.0, 13.0, 8.0],
            &[Activity::Urban, Activity::Nightlife],
        ),
        destination(
            3,
            "Bangkok",
            "Thailand",
            (13.7563, 100.5018),
            BudgetLevel::BUDGET,
            [27.0, 28.0, 30.0, 31.0, 30.0, 29.0, 29.0, 29.0, 28.0, 28.0, 27.0, 26.0],
            &[Activity::Nightlife, Activity::Cuisine],
        ),
        destination(
            4,
            "Paris",
            "France",
            (48.8566, 2.3522),
            BudgetLevel::LUXURY,
            [5.0, 6.0, 9.0, 12.0, 16.0, 19.0, 21.0, 21.0, 17.0, 13.0, 8.0, 5.0],
            &[Activity::Culture],
        ),
        destination(
            5,
            "Reykjavik",
            "Iceland",
            (64.1466, -21.9426),
            BudgetLevel::LUXURY,
            [0.0, 0.0, 1.0, 3.0, 7.0, 10.0, 12.0, 11.0, 8.0, 5.0, 2.0, 0.0],
            &[Activity::Seclusion, Activity::Nature],
        ),
    ]
}

/// Application state over the fixture dataset.
#[allow(dead_code)]
pub fn test_state() -> Arc<AppState> {
    let repo: Arc<dyn DestinationRepository> =
        Arc::new(InMemoryDestinationRepository::new(fixture_destinations()));
    Arc::new(AppState {
        recommender: Recommender::new(repo, TravelEstimator::default()),
    })
}

#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    easytrip::routes::create_router(test_state())
}

/// Serve `app` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub mod coordinates;
pub mod criteria;
pub mod destination;
pub mod distance;
pub mod recommendation;
pub mod season;

pub use coordinates::Coordinates;
pub use criteria::{
    CountryScope, FilterCriteria, Origin, RecommendRequest, SeasonClimate, UserLocation,
};
pub use destination::{Activity, ActivityRatings, BudgetLevel, Destination};
pub use distance::DistanceBucket;
pub use recommendation::{CostLevel, Recommendation};
pub use season::{ClimateCode, MonthlyTemperatures, Season};

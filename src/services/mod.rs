pub mod quartile;
pub mod recommender;
pub mod travel;

//! Client side of the recommendation exchange: the filter form, the HTTP
//! client that submits it, and paging/rendering of the results.

mod error;
pub mod form;
pub mod http;
pub mod labels;
pub mod pagination;
pub mod presenter;

pub use error::ClientError;
pub use form::{parse_coordinates, FilterForm};
pub use http::RecommendClient;
pub use pagination::Paginator;
pub use presenter::ResultsPresenter;

//! Mock shuttle search.
//!
//! There is no real timetable behind the service: a search produces a
//! handful of synthetic offers with randomized times and prices. The random
//! source is injected so callers (and tests) control it.

mod error;
mod generator;
mod pricing;
mod types;

pub use error::SearchError;
pub use generator::{MAX_RESULTS, generate_results};
pub use pricing::{
    RESERVED_SURCHARGE_MAX, SHARED_SURCHARGE_MAX, draw_surcharge, quote, reserved_vehicle_price,
};
pub use types::{BookingMode, MAX_PASSENGERS, SearchParams, SearchResult};

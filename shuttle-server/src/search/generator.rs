//! Synthetic offer generation.

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::catalog;

use super::pricing::{draw_surcharge, quote};
use super::types::{SearchParams, SearchResult};

/// Largest number of offers a single search can return.
pub const MAX_RESULTS: usize = 3;

/// First possible departure hour.
const FIRST_DEPARTURE_HOUR: u32 = 8;

/// Last possible departure hour.
const LAST_DEPARTURE_HOUR: u32 = 17;

/// Journey length bounds in whole hours.
const MIN_TRAVEL_HOURS: u32 = 2;
const MAX_TRAVEL_HOURS: u32 = 4;

/// Generate between zero and `MAX_RESULTS` offers for a search.
///
/// Returns an empty list when the origin, destination or shuttle type id
/// is not in the catalog.
pub fn generate_results<R: Rng + ?Sized>(params: &SearchParams, rng: &mut R) -> Vec<SearchResult> {
    let (Some(from), Some(to), Some(shuttle)) = (
        catalog::location(&params.leaving_from),
        catalog::location(&params.going_to),
        catalog::shuttle_type(&params.shuttle_type),
    ) else {
        debug!(
            from = %params.leaving_from,
            to = %params.going_to,
            shuttle_type = %params.shuttle_type,
            "search references unknown ids, no offers"
        );
        return Vec::new();
    };

    let count = rng.gen_range(0..=MAX_RESULTS);
    let stamp = Utc::now().timestamp_millis();

    (0..count)
        .map(|i| {
            let departure_hour = rng.gen_range(FIRST_DEPARTURE_HOUR..=LAST_DEPARTURE_HOUR);
            let departure_half = rng.gen_bool(0.5);
            let arrival_hour =
                departure_hour + rng.gen_range(MIN_TRAVEL_HOURS..=MAX_TRAVEL_HOURS);
            let arrival_half = rng.gen_bool(0.5);

            let surcharge = draw_surcharge(params.booking_type, rng);
            let price = quote(shuttle, params.booking_type, params.passengers, surcharge);

            SearchResult {
                id: format!("result-{stamp}-{i}"),
                from_id: from.id.to_string(),
                to_id: to.id.to_string(),
                from_name: from.name.to_string(),
                to_name: to.name.to_string(),
                shuttle_type_id: shuttle.id.to_string(),
                shuttle_type_name: shuttle.name.to_string(),
                journey_date: params.journey_date,
                departure_time: clock(departure_hour, departure_half),
                arrival_time: clock(arrival_hour, arrival_half),
                price,
                passengers: params.passengers,
                booking_type: params.booking_type,
                return_date: params.return_date,
            }
        })
        .collect()
}

/// Format an hour and half-hour flag as "HH:MM", wrapping past midnight.
fn clock(hour: u32, half: bool) -> String {
    let minutes = if half { "30" } else { "00" };
    format!("{:02}:{minutes}", hour % 24)
}

//! Search request and offer types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// Largest group a single booking can carry.
pub const MAX_PASSENGERS: u32 = 12;

/// How the vehicle is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    /// Seats are sold individually; price scales per passenger.
    Shared,
    /// The whole vehicle is hired; price is per vehicle.
    Reserved,
}

impl BookingMode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingMode::Shared => "shared",
            BookingMode::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for BookingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user searched for.
///
/// Location and shuttle type ids are kept as submitted; they are resolved
/// against the catalog only when results are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Origin location id
    pub leaving_from: String,

    /// Destination location id
    pub going_to: String,

    /// Outbound travel date
    pub journey_date: NaiveDate,

    /// Number of travellers
    pub passengers: u32,

    /// Shuttle type id
    pub shuttle_type: String,

    /// Shared seat or reserved vehicle
    pub booking_type: BookingMode,

    /// Optional return date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
}

impl SearchParams {
    /// Check the parameters are internally consistent.
    ///
    /// Ids that don't exist in the catalog are not an error here; they
    /// simply produce no offers.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.passengers == 0 || self.passengers > MAX_PASSENGERS {
            return Err(SearchError::InvalidPassengers {
                count: self.passengers,
                max: MAX_PASSENGERS,
            });
        }

        if self.leaving_from == self.going_to {
            return Err(SearchError::SameOriginAndDestination);
        }

        match self.return_date {
            Some(return_date) if return_date < self.journey_date => {
                Err(SearchError::ReturnBeforeJourney {
                    journey_date: self.journey_date,
                    return_date,
                })
            }
            _ => Ok(()),
        }
    }
}

/// A synthetic shuttle offer.
///
/// Created only by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Unique within a result set (e.g. "result-1718000000000-0")
    pub id: String,

    pub from_id: String,
    pub to_id: String,
    pub from_name: String,
    pub to_name: String,
    pub shuttle_type_id: String,
    pub shuttle_type_name: String,
    pub journey_date: NaiveDate,

    /// Departure time, "HH:MM"
    pub departure_time: String,

    /// Arrival time, "HH:MM"
    pub arrival_time: String,

    /// Total price in rupees
    pub price: u32,

    pub passengers: u32,
    pub booking_type: BookingMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
}

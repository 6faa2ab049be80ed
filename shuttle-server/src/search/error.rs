//! Search validation errors.

use chrono::NaiveDate;

/// Reasons a set of search parameters is rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Passenger count outside the bookable range
    #[error("passenger count must be between 1 and {max}, got {count}")]
    InvalidPassengers { count: u32, max: u32 },

    /// Origin and destination are the same place
    #[error("origin and destination must differ")]
    SameOriginAndDestination,

    /// Return leg is dated before the outbound leg
    #[error("return date {return_date} is before journey date {journey_date}")]
    ReturnBeforeJourney {
        journey_date: NaiveDate,
        return_date: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::InvalidPassengers { count: 0, max: 12 };
        assert_eq!(
            err.to_string(),
            "passenger count must be between 1 and 12, got 0"
        );

        let err = SearchError::SameOriginAndDestination;
        assert_eq!(err.to_string(), "origin and destination must differ");

        let err = SearchError::ReturnBeforeJourney {
            journey_date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "return date 2025-05-09 is before journey date 2025-05-10"
        );
    }
}

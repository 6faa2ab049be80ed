//! Vehicle classes and their tariffs.

use serde::Serialize;

/// A class of vehicle with its pricing parameters.
///
/// Shared bookings pay `seat_price` per passenger. Reserved bookings pay
/// `vehicle_price` for the whole vehicle, raised by half when the group is
/// larger than `group_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShuttleType {
    /// Stable identifier (e.g. "sedan")
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Base price per seat for shared bookings
    #[serde(skip)]
    pub seat_price: u32,

    /// Base price per vehicle for reserved bookings
    #[serde(skip)]
    pub vehicle_price: u32,

    /// Passenger count above which a reserved vehicle costs 1.5x
    #[serde(skip)]
    pub group_threshold: u32,
}

/// Every shuttle type on offer.
pub static SHUTTLE_TYPES: &[ShuttleType] = &[
    ShuttleType {
        id: "sedan",
        name: "Sedan",
        seat_price: 500,
        vehicle_price: 2000,
        group_threshold: 4,
    },
    ShuttleType {
        id: "muv",
        name: "MUV",
        seat_price: 700,
        vehicle_price: 2500,
        group_threshold: 6,
    },
    ShuttleType {
        id: "suv",
        name: "SUV",
        seat_price: 800,
        vehicle_price: 3000,
        group_threshold: 6,
    },
];

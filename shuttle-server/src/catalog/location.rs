//! Pickup and drop-off locations.

use serde::Serialize;

/// A place the shuttle network serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Stable identifier used in search requests (e.g. "manali")
    pub id: &'static str,

    /// Display name
    pub name: &'static str,
}

/// Every location the network serves.
pub static LOCATIONS: &[Location] = &[
    Location { id: "delhi", name: "Delhi" },
    Location { id: "chandigarh", name: "Chandigarh" },
    Location { id: "shimla", name: "Shimla" },
    Location { id: "manali", name: "Manali" },
    Location { id: "kasol", name: "Kasol" },
    Location { id: "dharamshala", name: "Dharamshala" },
    Location { id: "dehradun", name: "Dehradun" },
    Location { id: "mussoorie", name: "Mussoorie" },
    Location { id: "rishikesh", name: "Rishikesh" },
    Location { id: "leh", name: "Leh" },
];

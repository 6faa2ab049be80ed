//! Static reference data for the shuttle network.
//!
//! Two small fixed tables, locations and shuttle types, consulted by id
//! throughout the booking flow. Lookups are linear scans; the tables are
//! a handful of entries each.

mod location;
mod shuttle_type;

pub use location::{LOCATIONS, Location};
pub use shuttle_type::{SHUTTLE_TYPES, ShuttleType};

/// Look up a location by its id.
pub fn location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

/// Look up a location by display name, ignoring case and surrounding whitespace.
pub fn location_by_name(name: &str) -> Option<&'static Location> {
    let name = name.trim();
    LOCATIONS.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

/// Look up a shuttle type by its id.
pub fn shuttle_type(id: &str) -> Option<&'static ShuttleType> {
    SHUTTLE_TYPES.iter().find(|s| s.id == id)
}

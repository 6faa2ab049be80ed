//! Fare calculation.
//!
//! The formula is split from the random draw: `quote` is a pure function of
//! the vehicle, the mode, the group size and a surcharge, and
//! `draw_surcharge` supplies the surcharge from a caller-owned RNG.

use rand::Rng;

use crate::catalog::ShuttleType;

use super::types::BookingMode;

/// Exclusive upper bound of the per-seat surcharge on shared bookings.
pub const SHARED_SURCHARGE_MAX: u32 = 100;

/// Exclusive upper bound of the per-vehicle surcharge on reserved bookings.
pub const RESERVED_SURCHARGE_MAX: u32 = 500;

/// Price a booking.
///
/// Shared: `(seat_price + surcharge) * passengers`.
/// Reserved: `reserved_vehicle_price + surcharge`, independent of group size
/// beyond the oversized-group uplift.
pub fn quote(shuttle: &ShuttleType, mode: BookingMode, passengers: u32, surcharge: u32) -> u32 {
    match mode {
        BookingMode::Shared => (shuttle.seat_price + surcharge) * passengers,
        BookingMode::Reserved => reserved_vehicle_price(shuttle, passengers) + surcharge,
    }
}

/// Vehicle hire price before surcharge: 1.5x base when the group exceeds
/// the vehicle's threshold.
pub fn reserved_vehicle_price(shuttle: &ShuttleType, passengers: u32) -> u32 {
    if passengers > shuttle.group_threshold {
        shuttle.vehicle_price * 3 / 2
    } else {
        shuttle.vehicle_price
    }
}

/// Draw a surcharge for the given mode, uniform in `[0, max)`.
pub fn draw_surcharge<R: Rng + ?Sized>(mode: BookingMode, rng: &mut R) -> u32 {
    match mode {
        BookingMode::Shared => rng.gen_range(0..SHARED_SURCHARGE_MAX),
        BookingMode::Reserved => rng.gen_range(0..RESERVED_SURCHARGE_MAX),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::SHUTTLE_TYPES;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        /// Shared fares are linear in passenger count for a fixed surcharge
        #[test]
        fn shared_scales_linearly(
            idx in 0..SHUTTLE_TYPES.len(),
            surcharge in 0..SHARED_SURCHARGE_MAX,
            passengers in 1u32..=12,
        ) {
            let shuttle = &SHUTTLE_TYPES[idx];
            let single = quote(shuttle, BookingMode::Shared, 1, surcharge);
            prop_assert_eq!(
                quote(shuttle, BookingMode::Shared, passengers, surcharge),
                single * passengers
            );
        }

        /// Reserved sedan for an oversized group is base * 1.5 plus surcharge
        #[test]
        fn reserved_sedan_oversized(
            passengers in 5u32..=12,
            surcharge in 0..RESERVED_SURCHARGE_MAX,
        ) {
            let sedan = SHUTTLE_TYPES.iter().find(|s| s.id == "sedan").unwrap();
            prop_assert_eq!(
                quote(sedan, BookingMode::Reserved, passengers, surcharge),
                3000 + surcharge
            );
        }

        /// Surcharges stay inside their bounds
        #[test]
        fn surcharge_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert!(draw_surcharge(BookingMode::Shared, &mut rng) < SHARED_SURCHARGE_MAX);
            prop_assert!(draw_surcharge(BookingMode::Reserved, &mut rng) < RESERVED_SURCHARGE_MAX);
        }
    }
}

//! Hard-coded sample records standing in for a real data source.

use crate::{canvas::*, id::*, spot::*};

#[rustfmt::skip]
static SAMPLE_SPOTS: [ParkingSpot; 5] = [
    ParkingSpot {
        id           : SpotId::new("1"),
        city         : "London",
        pos          : CanvasPos::new_unchecked(62.0, 30.0),
        availability : Availability::Available,
        price        : "£2.50/hr",
        spot_type    : SpotType::Street,
        time_limit   : Some("2hrs max"),
    },
    ParkingSpot {
        id           : SpotId::new("2"),
        city         : "Paris",
        pos          : CanvasPos::new_unchecked(66.0, 42.0),
        availability : Availability::Limited,
        price        : "€3.20/hr",
        spot_type    : SpotType::Garage,
        time_limit   : None,
    },
    ParkingSpot {
        id           : SpotId::new("3"),
        city         : "Berlin",
        pos          : CanvasPos::new_unchecked(76.0, 28.0),
        availability : Availability::Available,
        price        : "€2.00/hr",
        spot_type    : SpotType::Lot,
        time_limit   : None,
    },
    ParkingSpot {
        id           : SpotId::new("4"),
        city         : "New York",
        pos          : CanvasPos::new_unchecked(28.0, 38.0),
        availability : Availability::Full,
        price        : "$4.50/hr",
        spot_type    : SpotType::Street,
        time_limit   : None,
    },
    ParkingSpot {
        id           : SpotId::new("5"),
        city         : "Los Angeles",
        pos          : CanvasPos::new_unchecked(10.0, 55.0),
        availability : Availability::Available,
        price        : "$3.25/hr",
        spot_type    : SpotType::Garage,
        time_limit   : None,
    },
];

/// The immutable set of sample spots.
pub fn sample_spots() -> &'static [ParkingSpot] {
    &SAMPLE_SPOTS
}

pub fn find_sample_spot(id: &str) -> Option<&'static ParkingSpot> {
    SAMPLE_SPOTS.iter().find(|spot| spot.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_ids_are_unique_and_valid() {
        let ids: HashSet<_> = sample_spots().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), sample_spots().len());
        assert!(ids.iter().all(SpotId::is_valid));
    }

    #[test]
    fn sample_positions_are_on_canvas() {
        assert!(sample_spots().iter().all(|s| s.pos.is_valid()));
    }

    #[test]
    fn find_spot_by_id() {
        let spot = find_sample_spot("4").unwrap();
        assert_eq!(spot.city, "New York");
        assert_eq!(spot.availability, Availability::Full);
        assert!(find_sample_spot("42").is_none());
    }
}

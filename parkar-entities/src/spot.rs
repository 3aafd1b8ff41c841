use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{canvas::*, id::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, Display, IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Availability {
    Available,
    Limited,
    Full,
}

impl Availability {
    /// Only spots that are not full could be reserved.
    pub const fn is_reservable(self) -> bool {
        !matches!(self, Self::Full)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, Display, IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SpotType {
    Street,
    Garage,
    Lot,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingSpot {
    pub id           : SpotId,
    pub city         : &'static str,
    pub pos          : CanvasPos,
    pub availability : Availability,
    pub price        : &'static str,
    pub spot_type    : SpotType,
    pub time_limit   : Option<&'static str>,
}

impl ParkingSpot {
    pub const fn is_reservable(&self) -> bool {
        self.availability.is_reservable()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn availability_from_str() {
        assert_eq!(
            Availability::from_str("available").unwrap(),
            Availability::Available
        );
        assert_eq!(
            Availability::from_str("LIMITED").unwrap(),
            Availability::Limited
        );
        assert_eq!(Availability::from_str("Full").unwrap(), Availability::Full);
        assert!(Availability::from_str("unknown").is_err());
    }

    #[test]
    fn availability_display_roundtrip() {
        for a in Availability::iter() {
            assert_eq!(Availability::from_str(&a.to_string()).unwrap(), a);
        }
    }

    #[test]
    fn spot_type_from_str() {
        assert_eq!(SpotType::from_str("street").unwrap(), SpotType::Street);
        assert_eq!(SpotType::from_str("Garage").unwrap(), SpotType::Garage);
        assert_eq!(SpotType::from_str("lot").unwrap(), SpotType::Lot);
        assert!(SpotType::from_str("parkhaus").is_err());
        assert_eq!(SpotType::Garage.to_string(), "garage");
    }

    #[test]
    fn only_full_spots_are_not_reservable() {
        let reservable: Vec<_> = Availability::iter()
            .filter(|a| a.is_reservable())
            .collect();
        assert_eq!(
            reservable,
            vec![Availability::Available, Availability::Limited]
        );
    }
}

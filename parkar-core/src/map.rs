use crate::{entities::*, Error, Result};

/// A map that shows a fixed set of markers
/// and reports the current selection and zoom.
pub trait MarkerMap {
    fn markers(&self) -> &[ParkingSpot];
    fn selected_spot(&self) -> Option<&ParkingSpot>;
    fn zoom(&self) -> ZoomFactor;
}

/// Decorative map over the static sample set.
///
/// The state is local to a single map component and
/// is lost on reload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockMap {
    spots: &'static [ParkingSpot],
    selected: Option<SpotId>,
    zoom: ZoomFactor,
}

impl Default for MockMap {
    fn default() -> Self {
        Self::new(sample_spots())
    }
}

impl MockMap {
    pub fn new(spots: &'static [ParkingSpot]) -> Self {
        debug_assert!(spots
            .iter()
            .all(|spot| spot.id.is_valid() && spot.pos.is_valid()));
        Self {
            spots,
            selected: None,
            zoom: ZoomFactor::default(),
        }
    }

    fn find_spot(&self, id: &str) -> Option<&'static ParkingSpot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    pub fn select_spot(&mut self, id: &str) -> Result<()> {
        let spot = self
            .find_spot(id)
            .ok_or_else(|| Error::UnknownSpot(id.to_owned()))?;
        log::debug!("Select parking spot {} in {}", spot.id, spot.city);
        self.selected = Some(spot.id);
        Ok(())
    }

    pub fn dismiss(&mut self) {
        if let Some(id) = self.selected.take() {
            log::debug!("Dismiss parking spot {id}");
        }
    }

    pub const fn selected_id(&self) -> Option<SpotId> {
        self.selected
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
        debug_assert!(self.zoom.is_valid());
        log::debug!("Zoom in: {}", self.zoom.value());
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
        debug_assert!(self.zoom.is_valid());
        log::debug!("Zoom out: {}", self.zoom.value());
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom.can_zoom_in()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom.can_zoom_out()
    }

    /// CSS transform that scales the markers according to the zoom factor.
    pub fn marker_scale(&self) -> String {
        format!("scale({})", self.zoom.value())
    }

    /// Request a reservation of the given spot.
    ///
    /// There is no booking backend, so an accepted request
    /// does not change any state.
    pub fn reserve(&self, id: &str) -> Result<()> {
        let spot = self
            .find_spot(id)
            .ok_or_else(|| Error::UnknownSpot(id.to_owned()))?;
        if !spot.is_reservable() {
            return Err(Error::SpotFull(id.to_owned()));
        }
        log::info!(
            "Reservation requested for parking spot {} in {} ({})",
            spot.id,
            spot.city,
            spot.price
        );
        Ok(())
    }
}

impl MarkerMap for MockMap {
    fn markers(&self) -> &[ParkingSpot] {
        self.spots
    }

    fn selected_spot(&self) -> Option<&ParkingSpot> {
        self.selected
            .and_then(|id| self.find_spot(id.as_str()))
    }

    fn zoom(&self) -> ZoomFactor {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let map = MockMap::default();
        assert!(map.selected_spot().is_none());
        assert_eq!(map.zoom(), ZoomFactor::default());
        assert_eq!(map.markers().len(), 5);
    }

    #[test]
    fn select_and_dismiss_every_spot() {
        let mut map = MockMap::default();
        for spot in sample_spots() {
            map.select_spot(spot.id.as_str()).unwrap();
            assert_eq!(map.selected_spot(), Some(spot));
            map.dismiss();
            assert!(map.selected_spot().is_none());
        }
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut map = MockMap::default();
        map.select_spot("1").unwrap();
        map.select_spot("3").unwrap();
        assert_eq!(map.selected_id(), Some(SpotId::new("3")));
    }

    #[test]
    fn select_unknown_spot() {
        let mut map = MockMap::default();
        map.select_spot("2").unwrap();
        assert_eq!(
            map.select_spot("99"),
            Err(Error::UnknownSpot("99".to_string()))
        );
        assert_eq!(map.selected_id(), Some(SpotId::new("2")));
    }

    #[test]
    fn dismiss_without_selection() {
        let mut map = MockMap::default();
        map.dismiss();
        assert!(map.selected_spot().is_none());
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut map = MockMap::default();
        for _ in 0..10 {
            map.zoom_in();
        }
        assert_eq!(map.zoom().value(), 2.0);
        assert!(!map.can_zoom_in());
        assert!(map.can_zoom_out());
        for _ in 0..20 {
            map.zoom_out();
            assert!(map.zoom().is_valid());
        }
        assert_eq!(map.zoom().value(), 0.5);
        assert!(!map.can_zoom_out());
    }

    #[test]
    fn zoom_does_not_touch_markers() {
        let mut map = MockMap::default();
        map.select_spot("5").unwrap();
        let markers = map.markers().to_vec();
        map.zoom_in();
        map.zoom_in();
        assert_eq!(map.markers(), markers.as_slice());
        assert_eq!(map.selected_id(), Some(SpotId::new("5")));
        assert_eq!(map.marker_scale(), "scale(1.4)");
    }

    #[test]
    fn reserve_available_and_limited_spots() {
        let map = MockMap::default();
        assert!(map.reserve("1").is_ok());
        assert!(map.reserve("2").is_ok());
        assert_eq!(map, MockMap::default());
    }

    #[test]
    fn refuse_reservation_of_full_spots() {
        let map = MockMap::default();
        for spot in sample_spots()
            .iter()
            .filter(|s| s.availability == Availability::Full)
        {
            assert!(!spot.is_reservable());
            assert_eq!(
                map.reserve(spot.id.as_str()),
                Err(Error::SpotFull(spot.id.to_string()))
            );
        }
    }

    #[test]
    fn reserve_unknown_spot() {
        let map = MockMap::default();
        assert_eq!(
            map.reserve("0"),
            Err(Error::UnknownSpot("0".to_string()))
        );
    }
}

/// Display scale of the map markers.
///
/// The factor only affects the rendered size of the markers,
/// never their position or which markers are shown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub const fn min() -> Self {
        Self(0.5)
    }

    pub const fn max() -> Self {
        Self(2.0)
    }

    pub const fn step() -> f64 {
        0.2
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self(round_to_tenth(self.0 + Self::step())).clamp()
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(round_to_tenth(self.0 - Self::step())).clamp()
    }

    pub fn can_zoom_in(self) -> bool {
        self < Self::max()
    }

    pub fn can_zoom_out(self) -> bool {
        self > Self::min()
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

// Repeated steps of 0.2 must not accumulate floating point noise.
fn round_to_tenth(val: f64) -> f64 {
    (val * 10.0).round() / 10.0
}

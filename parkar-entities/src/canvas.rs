use thiserror::Error;

/// Position on the decorative map canvas.
///
/// Both axes are percentage offsets from the top left corner,
/// i.e. they are not geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CanvasPos {
    x: f64,
    y: f64,
}

#[derive(Debug, Error)]
#[error("Canvas position out of range: ({x}, {y})")]
pub struct InvalidCanvasPos {
    pub x: f64,
    pub y: f64,
}

impl CanvasPos {
    pub const fn min() -> f64 {
        0.0
    }

    pub const fn max() -> f64 {
        100.0
    }

    pub const fn new_unchecked(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> f64 {
        self.x
    }

    pub const fn y(self) -> f64 {
        self.y
    }

    pub fn is_valid(self) -> bool {
        let range = Self::min()..=Self::max();
        range.contains(&self.x) && range.contains(&self.y)
    }
}

impl TryFrom<(f64, f64)> for CanvasPos {
    type Error = InvalidCanvasPos;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        let pos = Self::new_unchecked(x, y);
        if !pos.is_valid() {
            return Err(InvalidCanvasPos { x, y });
        }
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_positions_within_canvas() {
        assert!(CanvasPos::try_from((0.0, 100.0)).is_ok());
        assert!(CanvasPos::try_from((42.5, 7.0)).is_ok());
    }

    #[test]
    fn reject_positions_outside_canvas() {
        assert!(CanvasPos::try_from((-0.1, 50.0)).is_err());
        assert!(CanvasPos::try_from((50.0, 100.1)).is_err());
        assert!(CanvasPos::try_from((f64::NAN, 50.0)).is_err());
    }
}

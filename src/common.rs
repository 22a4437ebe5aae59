use super::error::GeometryError;

pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_PREFIX: &str = "/grid-sequencer";

pub const GRID_WIDTH: usize = 16;
pub const GRID_HEIGHT: usize = 8;

/// Rows at the bottom of the grid that never hold steps: one spare, one transport.
pub const RESERVED_ROWS: usize = 2;

pub const PLAYHEAD: u8 = 15;
pub const STEP: u8 = 11;
pub const EMPTY: u8 = 0;

pub fn to_1d(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Dimensions of the surface the sequencer is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
}

/// Which part of the layout a key landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Step { row: usize, column: usize },
    Spare,
    Transport(usize),
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl Geometry {
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        if width == 0 {
            return Err(GeometryError::ZeroWidth);
        }
        if height < RESERVED_ROWS {
            return Err(GeometryError::TooFewRows { height });
        }
        Ok(Self { width, height })
    }

    /// Accepts the signed size a device reports.
    pub fn from_size((width, height): (i32, i32)) -> Result<Self, GeometryError> {
        if width <= 0 {
            return Err(GeometryError::ZeroWidth);
        }
        Self::new(width as usize, height.max(0) as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn sequencer_rows(&self) -> usize {
        self.height - RESERVED_ROWS
    }

    pub fn spare_row(&self) -> usize {
        self.height - 2
    }

    pub fn transport_row(&self) -> usize {
        self.height - 1
    }

    pub fn hit(&self, x: usize, y: usize) -> Option<Region> {
        if x >= self.width || y >= self.height {
            None
        } else if y < self.sequencer_rows() {
            Some(Region::Step { row: y, column: x })
        } else if y == self.transport_row() {
            Some(Region::Transport(x))
        } else {
            Some(Region::Spare)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(Geometry::new(0, 8), Err(GeometryError::ZeroWidth));
        assert_eq!(
            Geometry::new(16, 1),
            Err(GeometryError::TooFewRows { height: 1 })
        );
        assert_eq!(Geometry::from_size((-4, 8)), Err(GeometryError::ZeroWidth));
        assert!(Geometry::from_size((16, -1)).is_err());
    }

    #[test]
    fn two_rows_leave_only_transport() {
        let geometry = Geometry::new(8, 2).unwrap();
        assert_eq!(geometry.sequencer_rows(), 0);
        assert_eq!(geometry.hit(3, 0), Some(Region::Spare));
        assert_eq!(geometry.hit(3, 1), Some(Region::Transport(3)));
    }

    #[test]
    fn hit_classifies_default_layout() {
        let geometry = Geometry::default();
        assert_eq!(geometry.sequencer_rows(), 6);
        assert_eq!(geometry.spare_row(), 6);
        assert_eq!(geometry.transport_row(), 7);
        assert_eq!(geometry.hit(5, 2), Some(Region::Step { row: 2, column: 5 }));
        assert_eq!(geometry.hit(0, 6), Some(Region::Spare));
        assert_eq!(geometry.hit(15, 7), Some(Region::Transport(15)));
        assert_eq!(geometry.hit(16, 0), None);
        assert_eq!(geometry.hit(0, 8), None);
    }

    #[test]
    fn to_1d_is_row_major() {
        assert_eq!(to_1d(3, 2, GRID_WIDTH), 35);
    }
}

use strum_macros::{Display, EnumIter, FromRepr};

/// 16-point compass rose, clockwise from north.
///
/// The discriminant is the compass rank used by the fine-grained
/// (freestanding) codec; wall-mounted blocks only ever use the cardinal
/// subset.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
pub enum Direction {
    N = 0,
    NNE = 1,
    NE = 2,
    ENE = 3,
    E = 4,
    ESE = 5,
    SE = 6,
    SSE = 7,
    S = 8,
    SSW = 9,
    SW = 10,
    WSW = 11,
    W = 12,
    WNW = 13,
    NW = 14,
    NNW = 15,
}

impl Direction {
    pub fn is_cardinal(&self) -> bool {
        matches!(self, Self::N | Self::E | Self::S | Self::W)
    }

    /// Rank on the compass rose, 0 (north) through 15 (NNW), clockwise.
    pub fn compass_index(self) -> u8 {
        self as u8
    }

    pub fn from_compass_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Rotates by `steps` compass points (22.5 degrees each), clockwise for
    /// positive steps, wrapping around the rose.
    pub fn rotated(self, steps: i8) -> Self {
        let index = (self as i16 + steps as i16).rem_euclid(16) as u8;
        Self::from_repr(index).unwrap()
    }

    pub fn opposite(self) -> Self {
        self.rotated(8)
    }
}

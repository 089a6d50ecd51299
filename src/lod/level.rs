use crate::error::WaterfallError;

/// Number of members in the fixed level set (1, 2, 4, ..., 128).
pub const NUM_LEVEL_SLOTS: usize = 8;

/// Power-of-two downsampling factor: one stored column per `level` rows.
///
/// The set is closed and never extended at runtime; a factor outside it is
/// rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    /// One column per row.
    pub const FINEST: Level = Level(1);
    /// One column per 128 rows.
    pub const COARSEST: Level = Level(128);
    /// The full fixed level set, finest first.
    pub const ALL: [Level; NUM_LEVEL_SLOTS] = [
        Level(1),
        Level(2),
        Level(4),
        Level(8),
        Level(16),
        Level(32),
        Level(64),
        Level(128),
    ];

    pub fn new(raw: u32) -> Result<Self, WaterfallError> {
        if raw.is_power_of_two() && raw <= Self::COARSEST.0 {
            Ok(Level(raw))
        } else {
            Err(WaterfallError::UnknownLevel(raw))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Index into a fixed per-level arena: log2 of the factor.
    pub fn slot_index(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// Coarsest level whose native row spacing is still finer than roughly
    /// one display pixel. Thresholds step at powers of two; a NaN density
    /// falls through every comparison and lands on the coarsest level.
    pub fn for_pixel_density(pixels_per_row: f64) -> Level {
        if pixels_per_row > 2.0 {
            Level(1)
        } else if pixels_per_row > 1.0 {
            Level(2)
        } else if pixels_per_row > 0.5 {
            Level(4)
        } else if pixels_per_row > 0.25 {
            Level(8)
        } else if pixels_per_row > 0.125 {
            Level(16)
        } else if pixels_per_row > 0.0625 {
            Level(32)
        } else if pixels_per_row > 0.03125 {
            Level(64)
        } else {
            Level(128)
        }
    }
}

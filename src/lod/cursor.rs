use super::level::Level;

/// Physical column pair for one write: the front column in the circular
/// half of the buffer and its duplicate in the upper half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSlot {
    pub front: usize,
    pub mirror: usize,
}

/// Write position over the shared half-width column domain.
///
/// All per-level index arithmetic lives here: the logical position is
/// translated to physical columns in one place and range-checked against
/// the level's capacity, instead of re-deriving `col / level` at each
/// write site.
#[derive(Clone, Copy, Debug)]
pub struct ColumnCursor {
    col: usize,
    half_width: usize,
}

impl ColumnCursor {
    pub fn new(half_width: usize) -> Self {
        Self { col: 0, half_width }
    }

    /// Logical position in `[0, half_width)`.
    pub fn position(&self) -> usize {
        self.col
    }

    /// Where the most recent write landed, in `level`'s own column units.
    pub fn offset(&self, level: Level) -> usize {
        self.col / level.get() as usize
    }

    /// Columns of history a level keeps before overwriting.
    pub fn half_columns(&self, level: Level) -> usize {
        self.half_width / level.get() as usize
    }

    /// Physical front/mirror columns for a write at the current position.
    pub fn slot(&self, level: Level) -> ColumnSlot {
        let half = self.half_columns(level);
        let front = self.offset(level);
        assert!(
            front < half,
            "write column {front} out of range for level {} (half {half})",
            level.get(),
        );
        ColumnSlot {
            front,
            mirror: front + half,
        }
    }

    pub fn advance(&mut self) {
        self.col = (self.col + 1) % self.half_width;
    }

    pub fn reset(&mut self, half_width: usize) {
        self.col = 0;
        self.half_width = half_width;
    }
}

use tracing::debug;

use super::buffer::LevelBuffer;
use super::cursor::ColumnCursor;
use super::level::{Level, NUM_LEVEL_SLOTS};
use crate::data_types::{Sample, WaterfallConfig};
use crate::error::WaterfallError;

/// The multi-resolution cache: one circular buffer per configured level,
/// all fed from a shared write cursor.
///
/// Level `L` consumes a slot every `L` ingested rows, keeping the most
/// recent row of each window: decimation, never averaging, which would
/// visibly change the output. Slots are overwritten in circular order
/// once a level's half-width of history is full; nothing is ever
/// individually evicted.
#[derive(Debug)]
pub struct LevelBufferSet<S: Sample> {
    config: WaterfallConfig,
    levels: Vec<Level>,
    slots: [Option<LevelBuffer<S>>; NUM_LEVEL_SLOTS],
    cursor: ColumnCursor,
    update_count: u64,
}

impl<S: Sample> LevelBufferSet<S> {
    pub fn new(config: WaterfallConfig) -> Result<Self, WaterfallError> {
        config.validate()?;
        let levels = config.level_set()?;
        let mut set = Self {
            cursor: ColumnCursor::new(config.half_width),
            config,
            levels,
            slots: Default::default(),
            update_count: 0,
        };
        set.allocate();
        Ok(set)
    }

    fn allocate(&mut self) {
        self.slots = Default::default();
        for &level in &self.levels {
            self.slots[level.slot_index()] = Some(LevelBuffer::new(
                level,
                self.config.sample_width,
                self.config.half_width,
            ));
        }
    }

    /// Fold one row into every level whose cadence has arrived.
    pub fn ingest(&mut self, row: &[S]) {
        self.ingest_with(row, false);
    }

    /// A row whose length differs from the configured sample width triggers
    /// a full reset to the new width before the row is processed. This is
    /// the resize-and-continue policy, not an error path.
    pub fn ingest_with(&mut self, row: &[S], clear_prev: bool) {
        if row.len() != self.config.sample_width || clear_prev {
            self.config.sample_width = row.len();
            self.reset();
            debug!(sample_width = row.len(), "waterfall buffers reset");
        }
        self.update_count += 1;
        for buffer in self.slots.iter_mut().flatten() {
            let level = buffer.level();
            if self.update_count % u64::from(level.get()) == 0 {
                buffer.write(self.cursor.slot(level), row);
            }
        }
        self.cursor.advance();
    }

    /// Reallocate every buffer zero-filled at the current configured width
    /// and rewind the cursor. Idempotent; safe to call at any time.
    pub fn reset(&mut self) {
        self.allocate();
        self.cursor.reset(self.config.half_width);
        self.update_count = 0;
    }

    /// Buffer for `level`. Asking for an unconfigured level is a
    /// programming error on the caller's side, surfaced as a hard failure
    /// rather than a silent fallback.
    pub fn buffer(&self, level: Level) -> Result<&LevelBuffer<S>, WaterfallError> {
        self.slots[level.slot_index()]
            .as_ref()
            .ok_or(WaterfallError::LevelNotConfigured(level.get()))
    }

    /// Configured levels, finest first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn cursor(&self) -> &ColumnCursor {
        &self.cursor
    }
}

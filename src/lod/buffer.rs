use bytemuck::Zeroable;
use ndarray::{aview1, s, Array2, ArrayView2};

use super::cursor::ColumnSlot;
use super::level::Level;
use crate::data_types::Sample;

/// Rolling downsampled history for a single level.
///
/// Shape is `(sample_width, 2 * half_columns)`. The column space is
/// logically circular over the first half, and every write is duplicated
/// at `front + half_columns`, so any contiguous window of up to
/// `half_columns` columns can be sliced without modular arithmetic.
#[derive(Clone, Debug)]
pub struct LevelBuffer<S: Sample> {
    level: Level,
    data: Array2<S>,
    half_columns: usize,
}

impl<S: Sample> LevelBuffer<S> {
    pub fn new(level: Level, sample_width: usize, half_width: usize) -> Self {
        let half_columns = half_width / level.get() as usize;
        Self {
            level,
            data: Array2::from_elem((sample_width, half_columns * 2), S::zeroed()),
            half_columns,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn half_columns(&self) -> usize {
        self.half_columns
    }

    pub fn sample_width(&self) -> usize {
        self.data.nrows()
    }

    /// Write one row at the slot's front column and its mirror. The row
    /// length must match the sample width; the cache resets on mismatch
    /// before any write reaches a buffer.
    pub fn write(&mut self, slot: ColumnSlot, row: &[S]) {
        let row = aview1(row);
        self.data.column_mut(slot.front).assign(&row);
        self.data.column_mut(slot.mirror).assign(&row);
    }

    /// Contiguous sub-rectangle; the sampler guarantees in-range bounds.
    pub fn slice(
        &self,
        x: std::ops::Range<usize>,
        y: std::ops::Range<usize>,
    ) -> ArrayView2<'_, S> {
        self.data.slice(s![x.start..x.end, y.start..y.end])
    }

    pub fn view(&self) -> ArrayView2<'_, S> {
        self.data.view()
    }
}

use tracing::trace;

use crate::data_types::{RenderImage, RenderResult, Sample, Viewport};
use crate::error::WaterfallError;
use crate::lod::{Level, LevelBufferSet};

/// Translates a viewport plus a pixel-density hint into the right level
/// and the right rectangular slice of that level's buffer, independently
/// of any GUI infrastructure to facilitate testing.
pub struct ViewportSampler;

impl ViewportSampler {
    /// Coarsest level still giving at least roughly one native row per
    /// display pixel; non-increasing in `pixels_per_row`.
    pub fn select_level(pixels_per_row: f64) -> Level {
        Level::for_pixel_density(pixels_per_row)
    }

    /// Maps an ideal level onto a configured set: the coarsest configured
    /// level not coarser than `ideal`, or the finest configured one when
    /// everything configured is coarser than the ideal.
    pub fn clamp_level(levels: &[Level], ideal: Level) -> Level {
        let mut chosen = None;
        // Finest first, so the last match is the coarsest eligible level.
        for &level in levels {
            if level <= ideal {
                chosen = Some(level);
            }
        }
        chosen
            .or_else(|| levels.first().copied())
            .unwrap_or(Level::FINEST)
    }

    /// Slice the level's buffer down to the viewport.
    ///
    /// Only the most recently written half of the circular column space is
    /// eligible (both slice bounds are clamped to
    /// `[col_offset, col_offset + half_columns)`), so the returned array
    /// is always contiguous and wraparound-free. A viewport that misses
    /// the cached data entirely yields `RenderResult::Empty`; only an
    /// unconfigured level is an error.
    pub fn render<S: Sample>(
        set: &LevelBufferSet<S>,
        level: Level,
        viewport: &Viewport,
    ) -> Result<RenderResult<S>, WaterfallError> {
        let buffer = set.buffer(level)?;
        let cursor = set.cursor();
        let factor = f64::from(level.get());
        let col_offset = cursor.offset(level);
        let half = cursor.half_columns(level);

        let x_start = viewport.x_min.max(0.0) as usize;
        let x_end = (viewport.x_max + 1.0)
            .min(set.config().sample_width as f64)
            .max(0.0) as usize;

        let y_lo = col_offset as f64 + viewport.y_min / factor;
        let y_hi = col_offset as f64 + viewport.y_max / factor + 1.0;
        let y_start = y_lo.max(col_offset as f64) as usize;
        let y_end = y_hi.min((col_offset + half) as f64).max(0.0) as usize;

        if x_start >= x_end || y_start >= y_end {
            trace!(level = level.get(), "viewport outside cached data");
            return Ok(RenderResult::Empty);
        }

        let data = buffer.slice(x_start..x_end, y_start..y_end).to_owned();
        Ok(RenderResult::Image(RenderImage {
            data,
            x_offset: x_start,
            y_offset: viewport.y_min.floor().max(0.0) as u64,
            row_scale: level.get(),
        }))
    }
}

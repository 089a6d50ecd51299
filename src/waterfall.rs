use tracing::trace;

use crate::data_types::{RenderResult, Sample, Viewport, WaterfallConfig};
use crate::error::WaterfallError;
use crate::lod::{Level, LevelBufferSet};
use crate::sampler::ViewportSampler;
use crate::sink::WaterfallSink;

/// Host-facing coordinator: owns the cache, the current viewport and the
/// active level, and pushes finished slices into the shell's sink.
///
/// Every method is synchronous and non-blocking. The shell calls
/// `view_changed` directly whenever its own viewport moves; there is no
/// callback registration and no internal event loop.
#[derive(Debug)]
pub struct Waterfall<S: Sample> {
    cache: LevelBufferSet<S>,
    viewport: Viewport,
    active_level: Level,
}

impl<S: Sample> Waterfall<S> {
    pub fn new(config: WaterfallConfig) -> Result<Self, WaterfallError> {
        let cache = LevelBufferSet::new(config)?;
        let active_level = ViewportSampler::clamp_level(cache.levels(), Level::FINEST);
        let config = cache.config();
        let viewport = Viewport::new(
            0.0,
            (config.sample_width - 1) as f64,
            0.0,
            (config.half_width - 1) as f64,
        );
        Ok(Self {
            cache,
            viewport,
            active_level,
        })
    }

    /// Ingest one row and redraw through the sink.
    pub fn push_row(
        &mut self,
        row: &[S],
        sink: &mut dyn WaterfallSink<S>,
    ) -> Result<(), WaterfallError> {
        self.push_row_with(row, false, sink)
    }

    /// As `push_row`, with an explicit request to discard all history
    /// before the row is processed.
    pub fn push_row_with(
        &mut self,
        row: &[S],
        clear_prev: bool,
        sink: &mut dyn WaterfallSink<S>,
    ) -> Result<(), WaterfallError> {
        self.cache.ingest_with(row, clear_prev);
        self.redraw(sink)
    }

    /// Synchronous viewport-change notification from the shell.
    /// Recomputes the active level from the display density, then redraws.
    pub fn view_changed(
        &mut self,
        viewport: Viewport,
        view_height_px: f64,
        sink: &mut dyn WaterfallSink<S>,
    ) -> Result<(), WaterfallError> {
        let ideal = ViewportSampler::select_level(viewport.pixels_per_row(view_height_px));
        let level = ViewportSampler::clamp_level(self.cache.levels(), ideal);
        if level != self.active_level {
            trace!(
                from = self.active_level.get(),
                to = level.get(),
                "active level changed"
            );
        }
        self.active_level = level;
        self.viewport = viewport;
        self.redraw(sink)
    }

    /// Render the current viewport at the active level; an image goes to
    /// `draw`, an empty outcome clears the display.
    pub fn redraw(&self, sink: &mut dyn WaterfallSink<S>) -> Result<(), WaterfallError> {
        match ViewportSampler::render(&self.cache, self.active_level, &self.viewport)? {
            RenderResult::Image(image) => sink.draw(&image),
            RenderResult::Empty => sink.clear(),
        }
        Ok(())
    }

    /// Discard all history, keeping the current configuration.
    pub fn reset(&mut self) {
        self.cache.reset();
    }

    pub fn active_level(&self) -> Level {
        self.active_level
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cache(&self) -> &LevelBufferSet<S> {
        &self.cache
    }
}

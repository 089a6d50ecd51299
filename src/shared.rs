use std::sync::Arc;

use parking_lot::RwLock;

use crate::data_types::{Sample, Viewport, WaterfallConfig};
use crate::error::WaterfallError;
use crate::sink::WaterfallSink;
use crate::waterfall::Waterfall;

/// Serialization adapter for hosts that drive ingest and viewport changes
/// from different threads (an acquisition timer and a UI thread, say).
///
/// The cache itself holds no locks and assumes exclusive access per call;
/// every helper below takes the lock for the full duration of the
/// operation, which is exactly the single-writer discipline the cache
/// requires.
#[derive(Clone)]
pub struct SharedWaterfall<S: Sample> {
    inner: Arc<RwLock<Waterfall<S>>>,
}

impl<S: Sample> SharedWaterfall<S> {
    pub fn new(config: WaterfallConfig) -> Result<Self, WaterfallError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(Waterfall::new(config)?)),
        })
    }

    pub fn push_row(
        &self,
        row: &[S],
        sink: &mut dyn WaterfallSink<S>,
    ) -> Result<(), WaterfallError> {
        self.inner.write().push_row(row, sink)
    }

    pub fn view_changed(
        &self,
        viewport: Viewport,
        view_height_px: f64,
        sink: &mut dyn WaterfallSink<S>,
    ) -> Result<(), WaterfallError> {
        self.inner.write().view_changed(viewport, view_height_px, sink)
    }

    pub fn redraw(&self, sink: &mut dyn WaterfallSink<S>) -> Result<(), WaterfallError> {
        self.inner.read().redraw(sink)
    }

    /// Exclusive access for anything not covered by the helpers.
    pub fn with<R>(&self, f: impl FnOnce(&mut Waterfall<S>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

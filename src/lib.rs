//! Multi-resolution ring-buffer cache for streaming waterfall displays.
//!
//! Rows arrive continuously; each one is folded into a set of
//! power-of-two-downsampled circular buffers so the viewer can zoom out
//! arbitrarily far without rendering cost or memory growing with elapsed
//! time. The GUI shell stays outside this crate: it feeds rows in and gets
//! finished 2-D arrays back through a narrow sink trait, calling in
//! synchronously whenever its viewport moves.

pub mod data_types;
pub mod error;
pub mod lod;
pub mod sampler;
pub mod shared;
pub mod sink;
pub mod waterfall;

pub use data_types::{RenderImage, RenderResult, Sample, Viewport, WaterfallConfig};
pub use error::WaterfallError;
pub use lod::{Level, LevelBuffer, LevelBufferSet};
pub use sampler::ViewportSampler;
pub use shared::SharedWaterfall;
pub use sink::{LatestImageSink, WaterfallSink};
pub use waterfall::Waterfall;

use crate::data_types::{RenderImage, Sample};

/// Seam between the cache and the GUI shell: the shell implements this to
/// receive finished arrays and blank-outs.
pub trait WaterfallSink<S: Sample>: Send + Sync {
    /// Present a freshly sliced image.
    fn draw(&mut self, image: &RenderImage<S>);

    /// The current viewport holds no data; blank the display.
    fn clear(&mut self);
}

/// Sink retaining only the most recent image, for shells that repaint from
/// a cached frame. Also serves as the test double.
#[derive(Default)]
pub struct LatestImageSink<S: Sample> {
    image: Option<RenderImage<S>>,
}

impl<S: Sample> LatestImageSink<S> {
    pub fn new() -> Self {
        Self { image: None }
    }

    pub fn image(&self) -> Option<&RenderImage<S>> {
        self.image.as_ref()
    }

    pub fn take(&mut self) -> Option<RenderImage<S>> {
        self.image.take()
    }
}

impl<S: Sample> WaterfallSink<S> for LatestImageSink<S> {
    fn draw(&mut self, image: &RenderImage<S>) {
        self.image = Some(image.clone());
    }

    fn clear(&mut self) {
        self.image = None;
    }
}

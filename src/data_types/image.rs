use ndarray::Array2;

use super::sample::Sample;

/// Rectangular slice of one level buffer, ready for the rendering sink.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderImage<S: Sample> {
    /// Shape `(samples, columns)`.
    pub data: Array2<S>,
    /// Sample index of the first row of `data`.
    pub x_offset: usize,
    /// Finest-resolution column index where the first column of `data`
    /// should be placed.
    pub y_offset: u64,
    /// Native rows represented by each column of `data`.
    pub row_scale: u32,
}

/// Outcome of a render: either an image with placement metadata, or an
/// explicit signal that the viewport holds no data and the display should
/// be cleared.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderResult<S: Sample> {
    Image(RenderImage<S>),
    Empty,
}

impl<S: Sample> RenderResult<S> {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderResult::Empty)
    }

    pub fn image(&self) -> Option<&RenderImage<S>> {
        match self {
            RenderResult::Image(image) => Some(image),
            RenderResult::Empty => None,
        }
    }
}

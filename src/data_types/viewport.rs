use serde::{Deserialize, Serialize};

/// Data-space view rectangle: x is the sample index within a row, y is the
/// column index at the finest resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Display density hint: pixels available per native row, given the
    /// widget height covering this viewport.
    pub fn pixels_per_row(&self, view_height_px: f64) -> f64 {
        view_height_px / self.height()
    }
}

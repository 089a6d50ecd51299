pub mod config;
pub mod image;
pub mod sample;
pub mod viewport;

pub use config::*;
pub use image::*;
pub use sample::*;
pub use viewport::*;

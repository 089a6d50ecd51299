use thiserror::Error;

/// Invariant violations surfaced at the fallible seams (construction,
/// level lookup). Expected streaming conditions (a row arriving with a new
/// width, a viewport that misses the data) are handled internally and
/// never reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaterfallError {
    #[error("sample width must be non-zero")]
    ZeroSampleWidth,

    #[error("half width must be non-zero")]
    ZeroHalfWidth,

    #[error("at least one downsampling level is required")]
    NoLevels,

    #[error("{0} is not a supported downsampling level")]
    UnknownLevel(u32),

    #[error("half width {half_width} is not divisible by level {level}")]
    MisalignedHalfWidth { half_width: usize, level: u32 },

    #[error("level {0} is not part of this cache's configuration")]
    LevelNotConfigured(u32),
}

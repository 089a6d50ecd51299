use serde::{Deserialize, Serialize};

use crate::error::WaterfallError;
use crate::lod::Level;

/// Construction-time configuration of the cache.
///
/// `half_width` must be divisible by the coarsest configured level so that
/// every level's half of the column space is an exact number of columns;
/// anything else would let a write index alias into the mirrored half.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterfallConfig {
    /// Samples per row (the vertical extent of the rendered image).
    pub sample_width: usize,
    /// Columns of history retained at level 1. Each level buffer is
    /// allocated at twice this, divided by its factor.
    pub half_width: usize,
    /// Downsampling factors to maintain, each a power of two in `1..=128`.
    pub levels: Vec<u32>,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            sample_width: 1024,
            half_width: 8192,
            levels: Level::ALL.iter().map(|l| l.get()).collect(),
        }
    }
}

impl WaterfallConfig {
    pub fn new(sample_width: usize, half_width: usize) -> Self {
        Self {
            sample_width,
            half_width,
            ..Default::default()
        }
    }

    /// The configured levels, parsed, deduplicated and sorted finest first.
    pub fn level_set(&self) -> Result<Vec<Level>, WaterfallError> {
        if self.levels.is_empty() {
            return Err(WaterfallError::NoLevels);
        }
        let mut set: Vec<Level> = Vec::with_capacity(self.levels.len());
        for &raw in &self.levels {
            let level = Level::new(raw)?;
            if !set.contains(&level) {
                set.push(level);
            }
        }
        set.sort();
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), WaterfallError> {
        if self.sample_width == 0 {
            return Err(WaterfallError::ZeroSampleWidth);
        }
        if self.half_width == 0 {
            return Err(WaterfallError::ZeroHalfWidth);
        }
        let set = self.level_set()?;
        // Divisibility by the coarsest level covers every finer power of two.
        let coarsest = set[set.len() - 1];
        if self.half_width % coarsest.get() as usize != 0 {
            return Err(WaterfallError::MisalignedHalfWidth {
                half_width: self.half_width,
                level: coarsest.get(),
            });
        }
        Ok(())
    }
}

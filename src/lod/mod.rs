pub mod buffer;
pub mod cursor;
pub mod level;
pub mod set;

pub use buffer::LevelBuffer;
pub use cursor::{ColumnCursor, ColumnSlot};
pub use level::{Level, NUM_LEVEL_SLOTS};
pub use set::LevelBufferSet;

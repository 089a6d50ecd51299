use bytemuck::Pod;

/// Element type stored in the level buffers.
///
/// `Pod` gives cheap copies and zero-filled allocation; the remaining
/// bounds let buffers be compared in tests and shared across threads by
/// the host.
pub trait Sample: Pod + Default + PartialEq + Send + Sync {}

impl<T: Pod + Default + PartialEq + Send + Sync> Sample for T {}

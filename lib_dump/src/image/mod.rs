pub mod compositor;
pub mod decoder;
pub mod format;

pub use compositor::{compose, CompositeOptions};
pub use decoder::decode;

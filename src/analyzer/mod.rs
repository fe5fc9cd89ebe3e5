pub mod axis;
pub mod sampler;

pub use axis::*;
pub use sampler::*;

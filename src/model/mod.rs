pub mod diet;
pub mod metric;
pub mod observation;

pub use diet::*;
pub use metric::*;
pub use observation::*;

mod classifier;
mod select;

pub use classifier::{classify, Neighbor};
pub use select::quickselect;

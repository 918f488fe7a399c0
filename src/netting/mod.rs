pub mod cycle;
pub mod reduce;

pub use cycle::{find_cycle, find_group_cycle, frontier};
pub use reduce::{reduce, reduce_group};

mod edges;
mod order;
mod resolve;

pub use edges::dependency_edges;
pub use order::{format_cycle, sort, sort_with_universe, CycleError, Pair};
pub use resolve::sort_applications;

mod aggregator;
mod budget;

pub use aggregator::*;
pub use budget::*;

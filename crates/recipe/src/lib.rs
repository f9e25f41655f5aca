mod book;
mod cache;
mod fallback;

pub use book::*;
pub use cache::*;
pub use fallback::*;

mod model;
mod mutation;
mod root;
mod snapshot;
mod validation;

pub use model::*;
pub use mutation::*;
pub use root::*;
pub use snapshot::*;
pub use validation::*;

mod command;
mod flight;
pub mod gateway;
pub mod mealplan;
pub mod recipe;
mod settings;
pub mod shopping;
pub mod user;

pub use command::*;
pub use flight::*;
pub use gateway::Gateway;
pub use settings::*;

pub mod config;
pub mod gateway;
pub mod observability;
pub mod session;

pub use config::Config;
pub use gateway::{CompletionBackend, CompletionRequest, PromptGateway, extract_json};
pub use session::{DayRegeneration, PlanSession};

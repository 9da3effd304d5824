pub mod arguments;
pub mod cache;
pub mod config;
pub mod engine;
pub mod errors; // Structured error handling
pub mod logger;
pub mod metrics;
pub mod orchestrator;
pub mod store;
pub mod webserver;

pub use errors::{ClassifierError, ClassifierResult};

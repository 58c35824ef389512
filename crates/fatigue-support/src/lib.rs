pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod models;
pub mod store;
pub mod summary;

pub use context::ChatContext;
pub use error::{FatigueError, Result};
pub use store::{InMemoryPersonnelStore, PersonnelRepository};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::ticketmaster::TicketmasterClient;
pub use crate::config::FinderConfig;
pub use crate::core::engine::{ConcertEngine, RunSummary};
pub use crate::core::formatter::OutputFormat;
pub use crate::domain::model::{Concert, ConcertCollection, SearchOutcome, SearchQuery};
pub use crate::utils::error::{ConcertError, Result};

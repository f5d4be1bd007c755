pub mod engine;
pub mod enricher;
pub mod finder;
pub mod formatter;

pub use crate::domain::model::{Concert, ConcertCollection, SearchOutcome, SearchQuery};
pub use crate::domain::ports::{ConcertSource, ConfigProvider};
pub use crate::utils::error::Result;

use crate::domain::model::{ConcertCollection, SearchOutcome, SearchQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn discovery_endpoint(&self) -> &str;
    fn availability_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn availability_batch_size(&self) -> usize;
}

/// 演唱會資料來源：搜尋活動並補上票務狀態
#[async_trait]
pub trait ConcertSource: Send + Sync {
    async fn find_concerts(&self, query: &SearchQuery) -> Result<SearchOutcome>;

    async fn find_ticket_availability(
        &self,
        concerts: ConcertCollection,
    ) -> Result<ConcertCollection>;
}

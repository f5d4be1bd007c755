use crate::domain::model::{ConcertCollection, EnrichSummary};
use serde::Deserialize;
use std::collections::HashSet;

/// Inventory Status API 回應陣列中的一筆
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityStatus {
    pub event_id: String,
    pub status: String,
    pub resale_status: Option<String>,
}

/// 將 event id 依批次大小切成逗號分隔的清單
pub fn batch_ids(concerts: &ConcertCollection, batch_size: usize) -> Vec<String> {
    let ids: Vec<&str> = concerts.ids().collect();
    ids.chunks(batch_size.max(1))
        .map(|chunk| chunk.join(","))
        .collect()
}

/// 將票務狀態合併進集合；未知的 id 會被忽略，重複的 id 以最後一筆為準且只計一次
pub fn apply_availability(
    concerts: &mut ConcertCollection,
    statuses: Vec<AvailabilityStatus>,
) -> EnrichSummary {
    let mut summary = EnrichSummary::default();
    let mut seen = HashSet::new();

    for status in statuses {
        match concerts.get_mut(&status.event_id) {
            Some(concert) => {
                concert.ticket_status = Some(status.status);
                concert.resale_ticket_status = status.resale_status;
                if seen.insert(status.event_id) {
                    summary.enriched += 1;
                }
            }
            None => {
                tracing::debug!("Ignoring availability for unknown event {}", status.event_id);
                summary.unknown_ids.push(status.event_id);
            }
        }
    }

    summary
}

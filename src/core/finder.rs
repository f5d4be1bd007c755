use crate::domain::model::{Concert, ConcertCollection, SearchOutcome};
use serde::Deserialize;

/// Discovery API 回應，只解析需要的欄位
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedEvents>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedEvents {
    #[serde(default)]
    pub events: Vec<EventPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub dates: Option<EventDates>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<EventVenues>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDates {
    pub start: Option<EventStart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventStart {
    #[serde(rename = "localDate")]
    pub local_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventVenues {
    #[serde(default)]
    pub venues: Vec<VenuePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenuePayload {
    pub name: Option<String>,
}

impl EventPayload {
    fn local_date(&self) -> Option<&str> {
        self.dates
            .as_ref()
            .and_then(|dates| dates.start.as_ref())
            .and_then(|start| start.local_date.as_deref())
    }

    fn first_venue_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()
            .and_then(|embedded| embedded.venues.first())
            .and_then(|venue| venue.name.as_deref())
    }

    /// 轉成 Concert；缺少任何必要欄位時回傳缺少的欄位名稱
    pub fn into_concert(self) -> std::result::Result<Concert, &'static str> {
        let date = self.local_date().map(str::to_string).ok_or("dates.start.localDate")?;
        let venue = self
            .first_venue_name()
            .map(str::to_string)
            .ok_or("_embedded.venues[0].name")?;
        let id = self.id.ok_or("id")?;
        let name = self.name.ok_or("name")?;
        let url = self.url.ok_or("url")?;

        Ok(Concert::new(id, name, date, venue, url))
    }
}

/// 將搜尋回應轉成演唱會集合，保留回應中的順序
pub fn collect_concerts(response: SearchResponse) -> SearchOutcome {
    let events = response
        .embedded
        .map(|embedded| embedded.events)
        .unwrap_or_default();

    if events.is_empty() {
        tracing::debug!("Search response contained no usable events");
        return SearchOutcome::NotFound;
    }

    let total = events.len();
    let mut concerts = ConcertCollection::new();

    for (position, event) in events.into_iter().enumerate() {
        let event_id = event.id.clone().unwrap_or_else(|| format!("#{}", position));
        match event.into_concert() {
            Ok(concert) => concerts.insert(concert),
            Err(field) => {
                tracing::warn!("⚠️ Skipping event {}: missing field {}", event_id, field);
            }
        }
    }

    if concerts.is_empty() {
        tracing::debug!("Search response contained no usable events");
        return SearchOutcome::NotFound;
    }

    tracing::info!("🎵 Found {} concerts ({} events in response)", concerts.len(), total);
    SearchOutcome::Found(concerts)
}

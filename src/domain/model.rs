use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一場演唱會，前五個欄位由搜尋階段填入，票務狀態由可用性階段補上
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    pub id: String,
    pub name: String,
    pub date: String,
    pub venue: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resale_ticket_status: Option<String>,
}

impl Concert {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        venue: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            venue: venue.into(),
            url: url.into(),
            ticket_status: None,
            resale_ticket_status: None,
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.ticket_status.is_some() && self.resale_ticket_status.is_some()
    }

    /// 列出格式化輸出所需但尚未填入的欄位
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.ticket_status.is_none() {
            missing.push("ticket_status");
        }
        if self.resale_ticket_status.is_none() {
            missing.push("resale_ticket_status");
        }
        missing
    }
}

/// 以 event id 為鍵的演唱會集合，迭代順序與 API 回應順序一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcertCollection {
    concerts: Vec<Concert>,
    index: HashMap<String, usize>,
}

impl ConcertCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或更新演唱會；重複的 id 保留第一次出現的位置
    pub fn insert(&mut self, concert: Concert) {
        match self.index.get(&concert.id) {
            Some(&position) => self.concerts[position] = concert,
            None => {
                self.index.insert(concert.id.clone(), self.concerts.len());
                self.concerts.push(concert);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Concert> {
        self.index.get(id).map(|&position| &self.concerts[position])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Concert> {
        match self.index.get(id) {
            Some(&position) => self.concerts.get_mut(position),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.concerts.iter().map(|concert| concert.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Concert> {
        self.concerts.iter()
    }

    pub fn len(&self) -> usize {
        self.concerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concerts.is_empty()
    }
}

impl FromIterator<Concert> for ConcertCollection {
    fn from_iter<I: IntoIterator<Item = Concert>>(iter: I) -> Self {
        let mut collection = ConcertCollection::new();
        for concert in iter {
            collection.insert(concert);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a ConcertCollection {
    type Item = &'a Concert;
    type IntoIter = std::slice::Iter<'a, Concert>;

    fn into_iter(self) -> Self::IntoIter {
        self.concerts.iter()
    }
}

impl Serialize for ConcertCollection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.concerts.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub artist_name: String,
    pub city: String,
    pub classification: String,
}

impl SearchQuery {
    pub fn new(artist_name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            artist_name: artist_name.into(),
            city: city.into(),
            classification: "music".to_string(),
        }
    }

    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = classification.into();
        self
    }
}

/// 搜尋結果：找到演唱會，或 API 回應中沒有任何活動
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(ConcertCollection),
    NotFound,
}

impl SearchOutcome {
    pub fn into_collection(self) -> Option<ConcertCollection> {
        match self {
            SearchOutcome::Found(concerts) => Some(concerts),
            SearchOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub enriched: usize,
    pub unknown_ids: Vec<String>,
}

impl EnrichSummary {
    pub fn merge(&mut self, other: EnrichSummary) {
        self.enriched += other.enriched;
        self.unknown_ids.extend(other.unknown_ids);
    }
}

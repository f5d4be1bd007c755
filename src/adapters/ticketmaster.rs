use crate::core::enricher::{apply_availability, batch_ids, AvailabilityStatus};
use crate::core::finder::{collect_concerts, SearchResponse};
use crate::domain::model::{ConcertCollection, EnrichSummary, SearchOutcome, SearchQuery};
use crate::domain::ports::{ConcertSource, ConfigProvider};
use crate::utils::error::{ConcertError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_DISCOVERY_ENDPOINT: &str = "https://app.ticketmaster.com/discovery/v2/events";
pub const DEFAULT_AVAILABILITY_ENDPOINT: &str =
    "https://app.ticketmaster.com/inventory-status/v1/availability";

/// Ticketmaster Discovery 與 Inventory Status API 的客戶端
pub struct TicketmasterClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> TicketmasterClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await
            .map_err(|e| ConcertError::Request(e.without_url()))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ConcertError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConcertError::Request(e.without_url()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> ConcertSource for TicketmasterClient<C> {
    async fn find_concerts(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let endpoint = self.config.discovery_endpoint();
        tracing::info!(
            "🔎 Searching {} concerts for '{}' in {}",
            query.classification,
            query.artist_name,
            query.city
        );
        tracing::debug!("Making API request to: {}", endpoint);

        let request = self.client.get(endpoint).query(&[
            ("apikey", self.config.api_key()),
            ("keyword", query.artist_name.as_str()),
            ("city", query.city.as_str()),
            ("classificationName", query.classification.as_str()),
        ]);

        let response: SearchResponse = self.fetch_json(endpoint, request).await?;
        Ok(collect_concerts(response))
    }

    async fn find_ticket_availability(
        &self,
        mut concerts: ConcertCollection,
    ) -> Result<ConcertCollection> {
        if concerts.is_empty() {
            tracing::debug!("No concerts to check availability for");
            return Ok(concerts);
        }

        let endpoint = self.config.availability_endpoint();
        let batches = batch_ids(&concerts, self.config.availability_batch_size());
        tracing::info!(
            "🎫 Checking ticket availability for {} concerts in {} request(s)",
            concerts.len(),
            batches.len()
        );

        let mut summary = EnrichSummary::default();
        for events in batches {
            tracing::debug!("Making API request to: {} (events={})", endpoint, events);
            let request = self
                .client
                .get(endpoint)
                .query(&[("events", events.as_str()), ("apikey", self.config.api_key())]);

            let statuses: Vec<AvailabilityStatus> = self.fetch_json(endpoint, request).await?;
            summary.merge(apply_availability(&mut concerts, statuses));
        }

        if !summary.unknown_ids.is_empty() {
            tracing::warn!(
                "⚠️ Ignored availability for {} unknown event(s)",
                summary.unknown_ids.len()
            );
        }
        tracing::info!(
            "✅ Enriched {} of {} concerts",
            summary.enriched,
            concerts.len()
        );

        Ok(concerts)
    }
}

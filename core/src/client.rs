use crate::config::ApiConfig;
use crate::error::{DashboardError, Result};
use crate::models::{CommentRecord, ResultPage, SearchIntent};
use crate::normalize::{comment_records, listing_video_ids, normalize};
use crate::query::{build_comments_request, build_detail_request, build_search_request, RequestSpec};
use crate::wire::{CommentThreadResponse, ErrorEnvelope, SearchListResponse, VideoListResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;

const SEARCH_FAILED: &str = "The search request failed.";
const DETAIL_FAILED: &str = "Loading video details failed.";
const COMMENTS_FAILED: &str = "Could not load comments.";

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a GET for a `RequestSpec`. Implemented over `gloo-net` in the
/// browser; tests script it.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, config: &ApiConfig, request: &RequestSpec) -> Result<HttpResponse>;
}

pub struct YouTubeClient<T> {
    transport: T,
    config: ApiConfig,
    api_key: String,
}

impl<T: Transport> YouTubeClient<T> {
    pub fn new(transport: T, config: ApiConfig, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            config,
            api_key: api_key.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Listing call, then the detail call for its IDs, joined into one page.
    /// The detail call is skipped when the listing is empty.
    pub async fn search(&self, intent: &SearchIntent, now: DateTime<Utc>) -> Result<ResultPage> {
        let request = build_search_request(intent, &self.api_key, now);
        let listing: SearchListResponse = self.fetch(&request, SEARCH_FAILED).await?;

        let video_ids = listing_video_ids(&listing);
        if video_ids.is_empty() {
            debug!("No results for {:?}", intent.query_text);
            return Ok(ResultPage::empty());
        }

        let request = build_detail_request(&video_ids, &self.api_key);
        let detail: VideoListResponse = self.fetch(&request, DETAIL_FAILED).await?;

        let page = normalize(listing, detail);
        debug!(
            "Search {:?} returned {} of {} listed videos",
            intent.query_text,
            page.records.len(),
            video_ids.len()
        );
        Ok(page)
    }

    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<CommentRecord>> {
        let request = build_comments_request(video_id, &self.api_key);
        let response: CommentThreadResponse = self.fetch(&request, COMMENTS_FAILED).await?;
        Ok(comment_records(response))
    }

    async fn fetch<R: DeserializeOwned>(&self, request: &RequestSpec, fallback: &str) -> Result<R> {
        debug!("{request}");
        let response = self.transport.get(&self.config, request).await?;

        if !response.ok() {
            let message =
                ErrorEnvelope::message(&response.body).unwrap_or_else(|| fallback.to_string());
            warn!("{} failed with HTTP {}: {}", request.endpoint.path(), response.status, message);
            return Err(DashboardError::Api {
                status: response.status,
                message,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

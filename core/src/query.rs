use crate::config::{ApiConfig, COMMENT_COUNT, PAGE_SIZE};
use crate::models::{DateFilter, DurationFilter, SearchIntent};
use chrono::{DateTime, Months, SecondsFormat, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Videos,
    CommentThreads,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Videos => "videos",
            Endpoint::CommentThreads => "commentThreads",
        }
    }
}

/// A fully formed GET request: endpoint plus query parameters in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl RequestSpec {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/{}?{}", config.base_url, self.endpoint.path(), query)
    }
}

// Used for logging, so the API key never reaches the console.
impl fmt::Display for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET /{}", self.endpoint.path())?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            if *key == "key" {
                write!(f, "{sep}{key}=***")?;
            } else {
                write!(f, "{sep}{key}={value}")?;
            }
        }
        Ok(())
    }
}

/// Lower bound for `publishedAfter`. Month arithmetic clamps to the end of
/// shorter months (Mar 31 minus one month is Feb 28/29).
pub fn published_after(filter: DateFilter, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let months = match filter {
        DateFilter::All => return None,
        DateFilter::OneMonth => 1,
        DateFilter::ThreeMonths => 3,
        DateFilter::SixMonths => 6,
        DateFilter::OneYear => 12,
        DateFilter::FiveYears => 60,
    };
    now.checked_sub_months(Months::new(months))
}

fn duration_param(filter: DurationFilter) -> Option<&'static str> {
    match filter {
        DurationFilter::Any => None,
        other => Some(other.key()),
    }
}

/// Listing call. Does not re-check the query text; the session does that.
pub fn build_search_request(
    intent: &SearchIntent,
    api_key: &str,
    now: DateTime<Utc>,
) -> RequestSpec {
    let mut request = RequestSpec::new(Endpoint::Search)
        .param("part", "snippet")
        .param("maxResults", PAGE_SIZE.to_string())
        .param("q", intent.query_text.as_str())
        .param("type", "video")
        .param("order", intent.sort_order.key())
        .param("key", api_key);

    if let Some(duration) = duration_param(intent.duration_filter) {
        request = request.param("videoDuration", duration);
    }

    if let Some(after) = published_after(intent.date_filter, now) {
        request = request.param(
            "publishedAfter",
            after.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
    }

    if let Some(cursor) = intent.page_cursor.as_deref().filter(|c| !c.is_empty()) {
        request = request.param("pageToken", cursor);
    }

    request
}

/// Detail call for one page of IDs. The page size keeps the batch within
/// the API's per-call ID limit, so no chunking happens here.
pub fn build_detail_request(video_ids: &[String], api_key: &str) -> RequestSpec {
    debug_assert!(!video_ids.is_empty());
    debug_assert!(video_ids.len() <= PAGE_SIZE);

    RequestSpec::new(Endpoint::Videos)
        .param("part", "snippet,statistics,contentDetails")
        .param("id", video_ids.join(","))
        .param("key", api_key)
}

pub fn build_comments_request(video_id: &str, api_key: &str) -> RequestSpec {
    RequestSpec::new(Endpoint::CommentThreads)
        .param("part", "snippet")
        .param("videoId", video_id)
        .param("maxResults", COMMENT_COUNT.to_string())
        .param("textFormat", "plainText")
        .param("order", "relevance")
        .param("key", api_key)
}

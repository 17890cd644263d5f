//! Response bodies of the YouTube Data API v3 endpoints the dashboard calls.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! payload is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `search.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    #[serde(default)]
    pub page_info: PageInfo,
    /// Absent rather than empty when nothing matched.
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub results_per_page: u64,
}

/// One search hit. Its `id` is an object, unlike `videos.list` where it is a
/// bare string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: SearchResultId,
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: String,
    /// Only set for `youtube#video` hits.
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: ThumbnailSet,
    pub channel_title: String,
    /// Only present on `videos.list` snippets, and only when the uploader set tags.
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSet {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Response of `videos.list`. Item order is not guaranteed to follow the
/// order of the requested IDs.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    /// Missing when the uploader disabled public statistics.
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT1H2M10S`.
    pub duration: Option<String>,
}

/// Response of `commentThreads.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentThreadResponse {
    #[serde(default)]
    pub items: Vec<CommentThreadItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadItem {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
    #[serde(default)]
    pub author_display_name: String,
    pub author_profile_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u64,
}

/// Body of any non-success response: `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// The API's own message, if the body carried a non-empty one.
    pub fn message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()?
            .error?
            .message
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_without_items() {
        let body = r#"{"kind":"youtube#searchListResponse","pageInfo":{"totalResults":0,"resultsPerPage":50}}"#;
        let response: SearchListResponse = serde_json::from_str(body).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.next_page_token, None);
    }

    #[test]
    fn search_item_id_is_an_object() {
        let body = r#"{
            "nextPageToken": "CDIQAA",
            "pageInfo": {"totalResults": 1000000, "resultsPerPage": 50},
            "items": [{
                "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"},
                "snippet": {
                    "publishedAt": "2009-10-25T06:57:33Z",
                    "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                    "title": "Never Gonna Give You Up",
                    "description": "",
                    "thumbnails": {"default": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"}},
                    "channelTitle": "Rick Astley"
                }
            }]
        }"#;
        let response: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.next_page_token.as_deref(), Some("CDIQAA"));
        assert_eq!(response.page_info.total_results, 1_000_000);
        let item = &response.items[0];
        assert_eq!(item.id.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(item.snippet.channel_title, "Rick Astley");
        assert!(item.snippet.tags.is_none());
    }

    #[test]
    fn video_item_without_statistics() {
        let body = r#"{"items":[{"id":"abc","contentDetails":{"duration":"PT4M13S"}}]}"#;
        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let item = &response.items[0];
        assert!(item.statistics.is_none());
        assert!(item.snippet.is_none());
        assert_eq!(
            item.content_details.as_ref().and_then(|c| c.duration.as_deref()),
            Some("PT4M13S")
        );
    }

    #[test]
    fn error_message_extraction() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota."}}"#;
        assert_eq!(
            ErrorEnvelope::message(body).as_deref(),
            Some("The request cannot be completed because you have exceeded your quota.")
        );
        assert_eq!(ErrorEnvelope::message(r#"{"error":{"code":500}}"#), None);
        assert_eq!(ErrorEnvelope::message(r#"{"error":{"message":""}}"#), None);
        assert_eq!(
            ErrorEnvelope::message(r#"{"error":{"message":"  "}}"#).as_deref(),
            Some("  ")
        );
        assert_eq!(ErrorEnvelope::message("<html>Bad Gateway</html>"), None);
    }
}

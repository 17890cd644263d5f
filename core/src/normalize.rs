use crate::models::{CommentRecord, ResultPage, Thumbnails, VideoRecord};
use crate::wire::{
    CommentThreadResponse, SearchListResponse, Snippet, ThumbnailSet, VideoItem,
    VideoListResponse,
};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Video IDs of a listing response in listing order, first occurrence only.
pub fn listing_video_ids(listing: &SearchListResponse) -> Vec<String> {
    let mut seen = HashSet::new();
    listing
        .items
        .iter()
        .filter_map(|item| item.id.video_id.as_deref())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(String::from)
        .collect()
}

/// Joins a listing page against the detail lookup for its IDs.
///
/// Records follow the listing order. A listing entry with no detail entry
/// (typically a video removed between the two calls) is dropped rather than
/// emitted half-filled. Cursors and the total come from the listing only.
pub fn normalize(listing: SearchListResponse, detail: VideoListResponse) -> ResultPage {
    let mut details: HashMap<String, VideoItem> = detail
        .items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();

    let mut records = Vec::with_capacity(listing.items.len());
    let mut seen = HashSet::new();
    for item in listing.items {
        let Some(video_id) = item.id.video_id.filter(|id| !id.is_empty()) else {
            continue;
        };
        if !seen.insert(video_id.clone()) {
            debug!("Skipping repeated listing entry {video_id}");
            continue;
        }
        match details.remove(&video_id) {
            Some(found) => records.push(to_record(video_id, item.snippet, found)),
            None => debug!("Dropping {video_id}: no detail entry returned"),
        }
    }

    ResultPage {
        records,
        next_cursor: listing.next_page_token,
        prev_cursor: listing.prev_page_token,
        total_results: listing.page_info.total_results,
    }
}

fn to_record(id: String, listing_snippet: Snippet, detail: VideoItem) -> VideoRecord {
    let snippet = detail.snippet.unwrap_or(listing_snippet);
    let statistics = detail.statistics.unwrap_or_default();

    VideoRecord {
        id,
        title: snippet.title,
        description: snippet.description,
        channel_id: snippet.channel_id,
        channel_title: snippet.channel_title,
        published_at: snippet.published_at,
        thumbnails: thumbnails(snippet.thumbnails),
        tags: snippet.tags,
        duration: detail.content_details.and_then(|c| c.duration),
        view_count: statistics.view_count,
        comment_count: statistics.comment_count,
        like_count: statistics.like_count,
    }
}

fn thumbnails(set: ThumbnailSet) -> Thumbnails {
    Thumbnails {
        default: set.default.map(|t| t.url),
        medium: set.medium.map(|t| t.url),
        high: set.high.map(|t| t.url),
    }
}

pub fn comment_records(response: CommentThreadResponse) -> Vec<CommentRecord> {
    response
        .items
        .into_iter()
        .map(|thread| {
            let snippet = thread.snippet.top_level_comment.snippet;
            CommentRecord {
                id: thread.id,
                author_display_name: snippet.author_display_name,
                author_profile_image_url: snippet
                    .author_profile_image_url
                    .filter(|url| !url.is_empty()),
                published_at: snippet.published_at,
                text_display: snippet.text_display,
                like_count: snippet.like_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn listing(ids: &[&str]) -> SearchListResponse {
        serde_json::from_value(json!({
            "nextPageToken": "NEXT",
            "prevPageToken": "PREV",
            "pageInfo": {"totalResults": 321, "resultsPerPage": 50},
            "items": ids.iter().map(|id| json!({
                "id": {"kind": "youtube#video", "videoId": id},
                "snippet": {
                    "publishedAt": "2024-01-02T03:04:05Z",
                    "channelId": "UC1",
                    "title": format!("listing {id}"),
                    "description": "short",
                    "channelTitle": "Chan",
                    "thumbnails": {"default": {"url": format!("https://i.ytimg.com/{id}.jpg")}}
                }
            })).collect::<Vec<_>>()
        }))
        .unwrap()
    }

    fn detail(ids: &[&str]) -> VideoListResponse {
        serde_json::from_value(json!({
            "items": ids.iter().map(|id| json!({
                "id": id,
                "snippet": {
                    "publishedAt": "2024-01-02T03:04:05Z",
                    "channelId": "UC1",
                    "title": format!("detail {id}"),
                    "description": "full description",
                    "channelTitle": "Chan",
                    "tags": ["rust", "tutorial"]
                },
                "statistics": {"viewCount": "1000", "likeCount": "10", "commentCount": "5"},
                "contentDetails": {"duration": "PT3M2S"}
            })).collect::<Vec<_>>()
        }))
        .unwrap()
    }

    fn ids(page: &ResultPage) -> Vec<&str> {
        page.records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn missing_detail_entry_is_dropped() {
        let page = normalize(listing(&["A", "B", "C"]), detail(&["B", "C"]));
        assert_eq!(ids(&page), vec!["B", "C"]);
    }

    #[test]
    fn listing_order_wins_over_detail_order() {
        let page = normalize(listing(&["A", "B", "C"]), detail(&["C", "A", "B"]));
        assert_eq!(ids(&page), vec!["A", "B", "C"]);
    }

    #[test]
    fn cursors_come_from_listing() {
        let page = normalize(listing(&["A"]), detail(&["A"]));
        assert_eq!(page.next_cursor.as_deref(), Some("NEXT"));
        assert_eq!(page.prev_cursor.as_deref(), Some("PREV"));
        assert_eq!(page.total_results, 321);
    }

    #[test]
    fn detail_enriches_record() {
        let page = normalize(listing(&["A"]), detail(&["A"]));
        let record = &page.records[0];
        assert_eq!(record.title, "detail A");
        assert_eq!(record.description, "full description");
        assert_eq!(record.tags, Some(vec!["rust".to_string(), "tutorial".to_string()]));
        assert_eq!(record.duration.as_deref(), Some("PT3M2S"));
        assert_eq!(record.view_count.as_deref(), Some("1000"));
        assert_eq!(record.comment_count.as_deref(), Some("5"));
        assert_eq!(record.like_count.as_deref(), Some("10"));
    }

    #[test]
    fn listing_snippet_is_the_fallback() {
        let detail: VideoListResponse = serde_json::from_value(json!({
            "items": [{"id": "A", "contentDetails": {"duration": "PT10S"}}]
        }))
        .unwrap();
        let page = normalize(listing(&["A"]), detail);
        let record = &page.records[0];
        assert_eq!(record.title, "listing A");
        assert_eq!(record.thumbnails.default.as_deref(), Some("https://i.ytimg.com/A.jpg"));
        assert_eq!(record.tags, None);
        assert_eq!(record.view_count, None);
    }

    #[test]
    fn duplicate_listing_ids_keep_first() {
        let listing = listing(&["A", "B", "A"]);
        assert_eq!(listing_video_ids(&listing), vec!["A", "B"]);
        let page = normalize(listing, detail(&["A", "B"]));
        assert_eq!(ids(&page), vec!["A", "B"]);
    }

    #[test]
    fn repeated_id_without_detail_appears_nowhere() {
        let page = normalize(listing(&["A", "B", "A", "B"]), detail(&["B"]));
        assert_eq!(ids(&page), vec!["B"]);
    }

    #[test]
    fn comments_keep_api_order() {
        let response: CommentThreadResponse = serde_json::from_value(json!({
            "items": [
                {"id": "c1", "snippet": {"topLevelComment": {"snippet": {
                    "textDisplay": "first", "authorDisplayName": "Ann",
                    "authorProfileImageUrl": "https://yt3.ggpht.com/ann",
                    "publishedAt": "2024-03-01T10:00:00Z", "likeCount": 42}}}},
                {"id": "c2", "snippet": {"topLevelComment": {"snippet": {
                    "textDisplay": "second", "authorDisplayName": "Bob",
                    "authorProfileImageUrl": "",
                    "publishedAt": "2024-03-02T10:00:00Z", "likeCount": 0}}}}
            ]
        }))
        .unwrap();
        let comments = comment_records(response);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, "c1");
        assert_eq!(comments[0].like_count, 42);
        assert_eq!(comments[1].text_display, "second");
        assert_eq!(comments[1].author_profile_image_url, None);
    }
}

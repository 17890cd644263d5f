use crate::format::{format_date, format_duration};
use crate::models::VideoRecord;
use chrono::{DateTime, Utc};

/// Spreadsheet tools need the byte-order mark to read non-ASCII text as UTF-8.
pub const BOM: char = '\u{FEFF}';

pub const HEADER: [&str; 9] = [
    "Video ID",
    "Title",
    "Channel",
    "Duration",
    "Published At",
    "Views",
    "Comments",
    "Tags",
    "URL",
];

pub const MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Wraps a free-text field in double quotes, doubling any inside it.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn csv_row(record: &VideoRecord) -> String {
    let tags = record
        .tags
        .as_ref()
        .map(|tags| tags.join(", "))
        .unwrap_or_default();

    [
        record.id.clone(),
        quote(&record.title),
        quote(&record.channel_title),
        format_duration(record.duration.as_deref()),
        format_date(&record.published_at),
        record.view_count.clone().unwrap_or_else(|| "0".to_string()),
        record.comment_count.clone().unwrap_or_else(|| "0".to_string()),
        quote(&tags),
        record.watch_url(),
    ]
    .join(",")
}

/// CSV of the records currently on screen, BOM included.
pub fn to_csv(records: &[VideoRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.join(","));
    lines.extend(records.iter().map(csv_row));

    let mut content = String::from(BOM);
    content.push_str(&lines.join("\n"));
    content
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("youtube_search_results_{}.csv", format_date(&now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Thumbnails;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record() -> VideoRecord {
        VideoRecord {
            id: "dQw4w9WgXcQ".to_string(),
            title: "He said \"hi\"".to_string(),
            description: String::new(),
            channel_id: "UC1".to_string(),
            channel_title: "Rick, Astley".to_string(),
            published_at: Utc.with_ymd_and_hms(2009, 10, 25, 6, 57, 33).unwrap(),
            thumbnails: Thumbnails::default(),
            tags: Some(vec!["pop".to_string(), "80s".to_string()]),
            duration: Some("PT3M33S".to_string()),
            view_count: Some("1500000000".to_string()),
            comment_count: None,
            like_count: None,
        }
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote("He said \"hi\""), "\"He said \"\"hi\"\"\"");
    }

    #[test]
    fn row_layout() {
        assert_eq!(
            csv_row(&record()),
            "dQw4w9WgXcQ,\"He said \"\"hi\"\"\",\"Rick, Astley\",3:33,2009-10-25,1500000000,0,\"pop, 80s\",https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn missing_tags_are_an_empty_quoted_field() {
        let record = VideoRecord {
            tags: None,
            duration: None,
            ..record()
        };
        let row = csv_row(&record);
        assert!(row.contains(",N/A,"));
        assert!(row.contains(",\"\",https://"));
    }

    #[test]
    fn document_starts_with_bom_and_header() {
        let csv = to_csv(&[record(), record()]);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<_> = csv.trim_start_matches(BOM).split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Video ID,Title,Channel,Duration,Published At,Views,Comments,Tags,URL"
        );
    }

    #[test]
    fn filename_uses_export_date() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(export_filename(now), "youtube_search_results_2024-12-31.csv");
    }
}

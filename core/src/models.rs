use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFilter {
    #[default]
    All,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
}

impl DateFilter {
    pub fn key(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::OneMonth => "1month",
            DateFilter::ThreeMonths => "3months",
            DateFilter::SixMonths => "6months",
            DateFilter::OneYear => "1year",
            DateFilter::FiveYears => "5years",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|f| f.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateFilter::All => "Any time",
            DateFilter::OneMonth => "Last month",
            DateFilter::ThreeMonths => "Last 3 months",
            DateFilter::SixMonths => "Last 6 months",
            DateFilter::OneYear => "Last year",
            DateFilter::FiveYears => "Last 5 years",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            DateFilter::All,
            DateFilter::OneMonth,
            DateFilter::ThreeMonths,
            DateFilter::SixMonths,
            DateFilter::OneYear,
            DateFilter::FiveYears,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DurationFilter {
    #[default]
    Any,
    Short,
    Medium,
    Long,
}

impl DurationFilter {
    pub fn key(&self) -> &'static str {
        match self {
            DurationFilter::Any => "any",
            DurationFilter::Short => "short",
            DurationFilter::Medium => "medium",
            DurationFilter::Long => "long",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|f| f.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DurationFilter::Any => "Any length",
            DurationFilter::Short => "Short (< 4 min)",
            DurationFilter::Medium => "Medium (4-20 min)",
            DurationFilter::Long => "Long (> 20 min)",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            DurationFilter::Any,
            DurationFilter::Short,
            DurationFilter::Medium,
            DurationFilter::Long,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Date,
    ViewCount,
    Relevance,
    Rating,
}

impl SortOrder {
    /// Value of the API's `order` parameter.
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::ViewCount => "viewCount",
            SortOrder::Relevance => "relevance",
            SortOrder::Rating => "rating",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|o| o.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Date => "Newest",
            SortOrder::ViewCount => "Most viewed",
            SortOrder::Relevance => "Relevance",
            SortOrder::Rating => "Rating",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            SortOrder::Date,
            SortOrder::ViewCount,
            SortOrder::Relevance,
            SortOrder::Rating,
        ]
    }
}

/// Everything needed to issue one listing call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchIntent {
    pub query_text: String,
    pub date_filter: DateFilter,
    pub duration_filter: DurationFilter,
    pub sort_order: SortOrder,
    /// Opaque token handed out by the API. Never parsed or built locally.
    pub page_cursor: Option<String>,
}

impl SearchIntent {
    pub fn new(query_text: &str) -> Self {
        Self {
            query_text: query_text.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_cursor(&self, cursor: Option<String>) -> Self {
        Self {
            page_cursor: cursor,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
}

impl Thumbnails {
    pub fn preferred(&self) -> Option<&str> {
        self.medium.as_deref().or(self.default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub thumbnails: Thumbnails,
    /// `None` when the video has no tags field at all, which is not the same
    /// as an empty list.
    pub tags: Option<Vec<String>>,
    pub duration: Option<String>,
    pub view_count: Option<String>,
    pub comment_count: Option<String>,
    pub like_count: Option<String>,
}

impl VideoRecord {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultPage {
    pub records: Vec<VideoRecord>,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
    pub total_results: u64,
}

impl ResultPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub author_display_name: String,
    pub author_profile_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub text_display: String,
    pub like_count: u64,
}

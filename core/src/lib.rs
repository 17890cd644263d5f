pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod session;
pub mod wire;

pub use client::{HttpResponse, Transport, YouTubeClient};
pub use error::{DashboardError, Result};
pub use models::{
    CommentRecord, DateFilter, DurationFilter, ResultPage, SearchIntent, SortOrder, Thumbnails,
    VideoRecord,
};

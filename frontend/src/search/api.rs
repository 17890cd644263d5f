use crate::env_variable_utils::API_BASE_URL;
use async_trait::async_trait;
use chrono::Utc;
use dashboard_core::comments::CommentPanel;
use dashboard_core::config::ApiConfig;
use dashboard_core::query::RequestSpec;
use dashboard_core::session::{PendingSearch, Session};
use dashboard_core::{DashboardError, HttpResponse, Result, Transport, YouTubeClient};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;
use yew::functional::UseForceUpdateHandle;

pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, config: &ApiConfig, request: &RequestSpec) -> Result<HttpResponse> {
        let url = request.url(config);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn youtube_client(api_key: &str) -> YouTubeClient<GlooTransport> {
    YouTubeClient::new(GlooTransport, ApiConfig::new(API_BASE_URL.as_str()), api_key)
}

pub async fn execute_search(
    pending: PendingSearch,
    session: Rc<RefCell<Session>>,
    refresh: UseForceUpdateHandle,
) {
    let result = youtube_client(&pending.api_key)
        .search(&pending.intent, Utc::now())
        .await;

    if let Err(e) = &result {
        log::error!("Search for {:?} failed: {e}", pending.intent.query_text);
    }

    if session.borrow_mut().finish_search(pending.generation, result) {
        refresh.force_update();
    }
}

pub async fn load_comments(
    api_key: String,
    video_id: String,
    panel: Rc<RefCell<CommentPanel>>,
    refresh: UseForceUpdateHandle,
) {
    let result = youtube_client(&api_key).fetch_comments(&video_id).await;

    if panel.borrow_mut().finish(&video_id, result) {
        refresh.force_update();
    }
}

use crate::error::Result;
use crate::models::CommentRecord;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum CommentState {
    Loading,
    Loaded(Vec<CommentRecord>),
    Failed(String),
}

/// The comment panel: at most one video expanded at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentPanel {
    expanded: Option<(String, CommentState)>,
}

impl CommentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses the panel if `video_id` is already open, otherwise opens it
    /// in the loading state and returns the ID whose comments must be fetched.
    /// Comments of the previously open video are discarded either way.
    pub fn toggle(&mut self, video_id: &str) -> Option<String> {
        if self.expanded_id() == Some(video_id) {
            self.expanded = None;
            return None;
        }
        self.expanded = Some((video_id.to_string(), CommentState::Loading));
        Some(video_id.to_string())
    }

    /// Applies a fetch result unless the panel has moved on since.
    pub fn finish(&mut self, video_id: &str, result: Result<Vec<CommentRecord>>) -> bool {
        match &mut self.expanded {
            Some((open, state)) if open.as_str() == video_id => {
                *state = match result {
                    Ok(comments) => CommentState::Loaded(comments),
                    Err(e) => CommentState::Failed(e.to_string()),
                };
                true
            }
            _ => {
                debug!("Ignoring comments for {video_id}: panel no longer open");
                false
            }
        }
    }

    /// Closes whatever is open. Returns whether anything was.
    pub fn collapse(&mut self) -> bool {
        self.expanded.take().is_some()
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn state_for(&self, video_id: &str) -> Option<&CommentState> {
        match &self.expanded {
            Some((id, state)) if id.as_str() == video_id => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use chrono::Utc;

    fn comment(id: &str) -> CommentRecord {
        CommentRecord {
            id: id.to_string(),
            author_display_name: "Ann".to_string(),
            author_profile_image_url: None,
            published_at: Utc::now(),
            text_display: "nice".to_string(),
            like_count: 3,
        }
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut panel = CommentPanel::new();
        assert_eq!(panel.toggle("a").as_deref(), Some("a"));
        assert_eq!(panel.state_for("a"), Some(&CommentState::Loading));
        assert_eq!(panel.toggle("a"), None);
        assert_eq!(panel.expanded_id(), None);
    }

    #[test]
    fn switching_video_discards_previous() {
        let mut panel = CommentPanel::new();
        panel.toggle("a");
        panel.finish("a", Ok(vec![comment("c1")]));
        assert_eq!(panel.toggle("b").as_deref(), Some("b"));
        assert_eq!(panel.state_for("a"), None);
        assert_eq!(panel.state_for("b"), Some(&CommentState::Loading));
    }

    #[test]
    fn collapse_drops_open_panel_and_its_late_result() {
        let mut panel = CommentPanel::new();
        assert!(!panel.collapse());
        panel.toggle("a");
        panel.finish("a", Ok(vec![comment("c1")]));
        assert!(panel.collapse());
        assert_eq!(panel.state_for("a"), None);

        panel.toggle("b");
        assert!(panel.collapse());
        assert!(!panel.finish("b", Ok(vec![comment("c2")])));
        assert_eq!(panel.expanded_id(), None);
    }

    #[test]
    fn late_result_for_closed_video_is_ignored() {
        let mut panel = CommentPanel::new();
        panel.toggle("a");
        panel.toggle("b");
        assert!(!panel.finish("a", Ok(vec![comment("c1")])));
        assert_eq!(panel.state_for("b"), Some(&CommentState::Loading));
    }

    #[test]
    fn failure_keeps_api_message() {
        let mut panel = CommentPanel::new();
        panel.toggle("a");
        let err = DashboardError::Api {
            status: 403,
            message: "The video identified by the videoId parameter has disabled comments."
                .to_string(),
        };
        assert!(panel.finish("a", Err(err)));
        assert_eq!(
            panel.state_for("a"),
            Some(&CommentState::Failed(
                "The video identified by the videoId parameter has disabled comments."
                    .to_string()
            ))
        );
    }
}

use crate::error::{DashboardError, Result};
use crate::models::{ResultPage, SearchIntent, VideoRecord};
use crate::pagination::PaginationHistory;
use log::debug;

/// A search the caller must now run and report back through
/// [`Session::finish_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub generation: u64,
    pub api_key: String,
    pub intent: SearchIntent,
}

/// State of one dashboard page view: credential, last submitted search, the
/// page on screen and its navigation history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    api_key: Option<String>,
    intent: Option<SearchIntent>,
    page: ResultPage,
    history: PaginationHistory,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trimmed key. Blank input leaves the current key untouched.
    pub fn set_api_key(&mut self, input: &str) -> bool {
        let key = input.trim();
        if key.is_empty() {
            return false;
        }
        self.api_key = Some(key.to_string());
        true
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Starts a fresh, cursor-less search and resets the page history.
    pub fn submit_search(&mut self, intent: SearchIntent) -> Result<PendingSearch> {
        let api_key = self.api_key.clone().ok_or(DashboardError::MissingApiKey)?;
        let query_text = intent.query_text.trim().to_string();
        if query_text.is_empty() {
            return Err(DashboardError::BlankQuery);
        }

        let intent = SearchIntent {
            query_text,
            page_cursor: None,
            ..intent
        };
        self.history.reset();
        self.intent = Some(intent.clone());
        Ok(self.begin(api_key, intent))
    }

    pub fn next_page(&mut self) -> Option<PendingSearch> {
        if self.loading {
            return None;
        }
        let (api_key, intent) = (self.api_key.clone()?, self.intent.clone()?);
        let cursor = self.history.go_next(&self.page)?;
        Some(self.begin(api_key, intent.with_cursor(Some(cursor))))
    }

    pub fn prev_page(&mut self) -> Option<PendingSearch> {
        if self.loading {
            return None;
        }
        let (api_key, intent) = (self.api_key.clone()?, self.intent.clone()?);
        let cursor = self.history.go_prev(&self.page)?;
        Some(self.begin(api_key, intent.with_cursor(Some(cursor))))
    }

    fn begin(&mut self, api_key: String, intent: SearchIntent) -> PendingSearch {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        PendingSearch {
            generation: self.generation,
            api_key,
            intent,
        }
    }

    /// Applies a finished search. Results of a superseded search are
    /// discarded and `false` is returned. A failure clears the page.
    pub fn finish_search(&mut self, generation: u64, result: Result<ResultPage>) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding result of search #{generation}, #{} is current",
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                self.error = None;
            }
            Err(e) => {
                self.page = ResultPage::empty();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn page(&self) -> &ResultPage {
        &self.page
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.page.records
    }

    pub fn intent(&self) -> Option<&SearchIntent> {
        self.intent.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_go_next(&self) -> bool {
        !self.loading && PaginationHistory::can_go_next(&self.page)
    }

    pub fn can_go_prev(&self) -> bool {
        !self.loading && PaginationHistory::can_go_prev(&self.page)
    }

    pub fn page_number(&self) -> usize {
        self.history.page_number()
    }

    pub fn history(&self) -> &PaginationHistory {
        &self.history
    }
}

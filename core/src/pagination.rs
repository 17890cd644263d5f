use crate::models::ResultPage;

/// Forward cursors visited since the last fresh search.
///
/// This only backs the page indicator. Navigation itself always uses the
/// cursors of the page on screen: `go_prev` hands back the page's own
/// `prev_cursor`, never something popped off this stack. If the API ever
/// stops pairing its cursors symmetrically, the depth shown can drift from
/// the real position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationHistory {
    stack: Vec<String>,
}

impl PaginationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    pub fn can_go_next(page: &ResultPage) -> bool {
        page.next_cursor.is_some()
    }

    pub fn can_go_prev(page: &ResultPage) -> bool {
        page.prev_cursor.is_some()
    }

    /// Pushes the page's next cursor and returns it as the cursor to search with.
    pub fn go_next(&mut self, page: &ResultPage) -> Option<String> {
        let cursor = page.next_cursor.clone()?;
        self.stack.push(cursor.clone());
        Some(cursor)
    }

    /// Pops the latest pushed cursor and returns the page's prev cursor.
    pub fn go_prev(&mut self, page: &ResultPage) -> Option<String> {
        let cursor = page.prev_cursor.clone()?;
        self.stack.pop();
        Some(cursor)
    }

    pub fn cursors(&self) -> &[String] {
        &self.stack
    }

    /// One-based number of the page on screen.
    pub fn page_number(&self) -> usize {
        self.stack.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next: Option<&str>, prev: Option<&str>) -> ResultPage {
        ResultPage {
            next_cursor: next.map(String::from),
            prev_cursor: prev.map(String::from),
            ..ResultPage::empty()
        }
    }

    #[test]
    fn next_next_prev() {
        let mut history = PaginationHistory::new();
        let first = page(Some("P2"), None);
        assert_eq!(history.go_next(&first).as_deref(), Some("P2"));

        let second = page(Some("P3"), Some("P1-from-api"));
        assert_eq!(history.go_next(&second).as_deref(), Some("P3"));

        let third = page(None, Some("P2-from-api"));
        assert_eq!(history.go_prev(&third).as_deref(), Some("P2-from-api"));

        assert_eq!(history.cursors(), ["P2".to_string()]);
        assert_eq!(history.page_number(), 2);
    }

    #[test]
    fn terminal_pages() {
        let mut history = PaginationHistory::new();
        let only = page(None, None);
        assert!(!PaginationHistory::can_go_next(&only));
        assert!(!PaginationHistory::can_go_prev(&only));
        assert_eq!(history.go_next(&only), None);
        assert_eq!(history.go_prev(&only), None);
        assert!(history.cursors().is_empty());
    }

    #[test]
    fn prev_with_empty_stack_still_uses_page_cursor() {
        let mut history = PaginationHistory::new();
        let landed = page(Some("N"), Some("P"));
        assert_eq!(history.go_prev(&landed).as_deref(), Some("P"));
        assert_eq!(history.page_number(), 1);
    }

    #[test]
    fn reset_clears() {
        let mut history = PaginationHistory::new();
        history.go_next(&page(Some("A"), None));
        history.reset();
        assert_eq!(history.page_number(), 1);
    }
}

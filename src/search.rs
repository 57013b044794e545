use crate::model::RecipePreview;

/// Results of one search query, in the order the API returned them
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<RecipePreview>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, results: Vec<RecipePreview>) -> Self {
        SearchResults {
            query: query.into(),
            results,
        }
    }

    /// Slice of results for a 1-based page number
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipePreview] {
        if per_page == 0 {
            return &[];
        }
        let start = page.saturating_sub(1) * per_page;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + per_page).min(self.results.len());
        &self.results[start..end]
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            0
        } else {
            self.results.len().div_ceil(per_page)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

use serde::Serialize;

use crate::{filter_by_title, Recipe};

pub const PAGE_SIZE: usize = 4;

/// Pagination and filter state behind the recipe grid.
///
/// `all` never changes after construction. `filtered` is replaced wholesale on every reset and
/// `cursor` counts how many filtered recipes are visible.
#[derive(Debug, Clone)]
pub struct CatalogState {
    all: Vec<Recipe>,
    filtered: Vec<Recipe>,
    cursor: usize,
    pages: usize,
    term: String,
    page_size: usize,
}

/// Everything a renderer needs to draw the grid for one state change.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub term: String,
    pub recipes: Vec<Recipe>,
    pub pages: usize,
    pub total: usize,
    pub show_more: bool,
    pub show_less: bool,
    pub empty: bool,
}

impl CatalogState {
    pub fn new(all: Vec<Recipe>) -> Self {
        Self::with_page_size(all, PAGE_SIZE)
    }

    /// A state that shows every filtered recipe at once.
    pub fn unpaged(all: Vec<Recipe>) -> Self {
        Self::with_page_size(all, usize::MAX)
    }

    fn with_page_size(all: Vec<Recipe>, page_size: usize) -> Self {
        let mut state = CatalogState {
            filtered: Vec::with_capacity(0),
            all,
            cursor: 0,
            pages: 0,
            term: String::new(),
            page_size: page_size.max(1),
        };
        state.reset(state.all.clone());
        state
    }

    /// Rebuilds the state reached by searching for `term` and then asking for `pages` pages.
    pub fn replay(all: Vec<Recipe>, term: &str, pages: usize) -> Self {
        let mut state = Self::new(all);
        state.search(term);
        state.advance_to(pages);
        state
    }

    pub fn replay_unpaged(all: Vec<Recipe>, term: &str) -> Self {
        let mut state = Self::unpaged(all);
        state.search(term);
        state
    }

    pub fn reset(&mut self, filtered: Vec<Recipe>) {
        self.filtered = filtered;
        self.cursor = 0;
        self.pages = 0;
        self.advance();
    }

    pub fn advance(&mut self) {
        if !self.has_more() {
            return;
        }
        self.cursor = self
            .cursor
            .saturating_add(self.page_size)
            .min(self.filtered.len());
        self.pages += 1;
    }

    pub fn advance_to(&mut self, pages: usize) {
        while self.pages < pages && self.has_more() {
            self.advance();
        }
    }

    pub fn search(&mut self, term: &str) {
        self.term = term.to_owned();
        let filtered = filter_by_title(&self.all, term);
        self.reset(filtered);
    }

    /// Back to the first page of the unfiltered catalog.
    pub fn show_less(&mut self) {
        self.term.clear();
        self.reset(self.all.clone());
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn visible(&self) -> &[Recipe] {
        &self.filtered[..self.cursor]
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.filtered.len()
    }

    pub fn can_show_less(&self) -> bool {
        self.cursor > self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn view(&self) -> CatalogView {
        CatalogView {
            term: self.term.clone(),
            recipes: self.visible().to_vec(),
            pages: self.pages,
            total: self.filtered.len(),
            show_more: self.has_more(),
            show_less: self.can_show_less(),
            empty: self.is_empty(),
        }
    }
}

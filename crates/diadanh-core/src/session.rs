// crates/diadanh-core/src/session.rs

//! # Lookup Session
//!
//! The orchestration layer. Holds the current query and page, derives the
//! views (`dataset × query → results, suggestions`) on every change, and
//! applies the history rule. All state transitions are plain method calls.

use crate::error::Result;
use crate::model::{Gazetteer, PlaceRecord, SearchQuery};
use crate::pager::{self, DEFAULT_PAGE_SIZE};
use crate::persistence::{should_record_history, Favorites, History, KeyValueStore};
use crate::query_string;
use crate::text::char_len;
use crate::traits::{GazetteerBackend, GazetteerSearch};
use crate::tree::HierarchyTree;

/// Snapshot of everything a front-end renders for the current query.
#[derive(Debug)]
pub struct LookupView<'v, B: GazetteerBackend> {
    pub results: &'v [&'v PlaceRecord<B>],
    pub page_items: &'v [&'v PlaceRecord<B>],
    pub suggestions: &'v [&'v str],
    pub page: usize,
    pub total_pages: usize,
    pub browsing: bool,
}

pub struct LookupSession<'a, B: GazetteerBackend, S: KeyValueStore> {
    db: &'a Gazetteer<B>,
    store: S,
    query: SearchQuery,
    page: usize,
    page_size: usize,
    results: Vec<&'a PlaceRecord<B>>,
    suggestions: Vec<&'a str>,
    history: History,
    favorites: Favorites<B>,
}

impl<'a, B: GazetteerBackend, S: KeyValueStore> LookupSession<'a, B, S> {
    /// Starts with an empty query; history and favorites come from `store`.
    pub fn new(db: &'a Gazetteer<B>, store: S) -> Self {
        let history = History::load(&store);
        let favorites = Favorites::load(&store);
        let mut session = Self {
            db,
            store,
            query: SearchQuery::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            results: Vec::new(),
            suggestions: Vec::new(),
            history,
            favorites,
        };
        session.refresh();
        session
    }

    /// Starts from a shared link's query string.
    pub fn from_query_string(db: &'a Gazetteer<B>, store: S, qs: &str) -> Self {
        let mut session = Self::new(db, store);
        session.set_query(query_string::parse_query_string(qs));
        session
    }

    /// Page size for [`Self::page_items`]; zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    // --- State transitions ---------------------------------------------------

    pub fn set_text(&mut self, text: impl Into<String>) {
        let query = SearchQuery {
            text: text.into(),
            province: self.query.province.clone(),
        };
        self.set_query(query);
    }

    /// `None` or `""` clears the filter.
    pub fn set_province(&mut self, province: Option<&str>) {
        let query = SearchQuery {
            text: self.query.text.clone(),
            province: province.filter(|p| !p.is_empty()).map(str::to_string),
        };
        self.set_query(query);
    }

    /// Replaces the whole query, resets to page 1 and re-derives the views.
    pub fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
        self.page = 1;
        self.refresh();
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Moves to `page`, clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    /// Stars or un-stars `record`. Returns `true` if it is now a favorite.
    /// Nothing changes when the store rejects the write.
    pub fn toggle_favorite(&mut self, record: &PlaceRecord<B>) -> Result<bool> {
        let mut next = self.favorites.clone();
        let added = next.toggle(record);
        next.save(&mut self.store)?;
        self.favorites = next;
        Ok(added)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.history.save(&mut self.store)
    }

    fn refresh(&mut self) {
        self.results = self.db.search(&self.query);
        self.suggestions = self.db.suggest(&self.query.text);

        if should_record_history(&self.query.text, &self.results) {
            self.history.record(&self.query.text);
            if let Err(e) = self.history.save(&mut self.store) {
                log::warn!("could not persist search history: {e}");
            }
        }
    }

    // --- Views -----------------------------------------------------------------

    pub fn view(&self) -> LookupView<'_, B> {
        LookupView {
            results: &self.results,
            page_items: self.page_items(),
            suggestions: &self.suggestions,
            page: self.page,
            total_pages: self.total_pages(),
            browsing: self.is_browsing(),
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn results(&self) -> &[&'a PlaceRecord<B>] {
        &self.results
    }

    pub fn suggestions(&self) -> &[&'a str] {
        &self.suggestions
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.results.len(), self.page_size)
    }

    /// Records on the current page.
    pub fn page_items(&self) -> &[&'a PlaceRecord<B>] {
        pager::page(&self.results, self.page, self.page_size).unwrap_or(&[])
    }

    /// 1-based position of the first item on the current page.
    pub fn page_offset(&self) -> usize {
        (self.page - 1) * self.page_size + 1
    }

    /// `true` while the text is too short to narrow results; front-ends show
    /// the province tree instead of the result table in this state.
    pub fn is_browsing(&self) -> bool {
        char_len(&self.query.text) < crate::search::MIN_QUERY_CHARS
    }

    pub fn tree(&self) -> HierarchyTree<'a> {
        self.db.tree()
    }

    pub fn provinces(&self) -> &'a [B::Str] {
        self.db.provinces()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn favorites(&self) -> &Favorites<B> {
        &self.favorites
    }

    pub fn is_favorite(&self, record: &PlaceRecord<B>) -> bool {
        self.favorites.contains(record)
    }

    pub fn to_query_string(&self) -> String {
        query_string::to_query_string(&self.query)
    }

    pub fn gazetteer(&self) -> &'a Gazetteer<B> {
        self.db
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

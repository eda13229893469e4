//! Pure pagination state for the conversation sidebar.
//!
//! The feed accumulates pages for one [`QueryKey`] at a time. Fetches are
//! requested through the `begin_*` methods, which hand back a [`FetchRequest`]
//! only when a fetch is actually warranted; the request later returns through
//! [`ConversationFeed::apply_page`] or [`ConversationFeed::apply_error`],
//! which drop anything issued under a superseded key. Keeping this state
//! machine free of browser types lets the pagination, debounce-restart, and
//! freshness rules run under plain host tests.

use chrono::{DateTime, Duration, Utc};

use crate::api::FetchError;
use crate::models::conversation::{Conversation, ConversationPage};

/// Conversations fetched per page unless a caller overrides it.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Seconds a fetched key's pages stay fresh before a refocus refetches them.
pub const FRESH_WINDOW_SECS: i64 = 60;

/// Identifies an independently cached fetch sequence. Changing any component
/// restarts pagination from offset zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryKey {
    user_id: String,
    page_size: i64,
    search: Option<String>,
}

impl QueryKey {
    /// Blank or all-whitespace search input normalizes to "no filter".
    pub fn new(user_id: impl Into<String>, page_size: i64, raw_search: &str) -> Self {
        let trimmed = raw_search.trim();
        Self {
            user_id: user_id.into(),
            page_size,
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    /// First page for a key nothing has been fetched under yet.
    Initial,
    /// Next page, appended behind the ones already shown.
    More,
    /// Silent page-zero refetch after the freshness window lapsed.
    Refresh,
}

/// A fetch the feed has committed to. Carries its originating key so a
/// response that outlives the key can be recognized and dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub key: QueryKey,
    pub offset: i64,
    pub kind: FetchKind,
}

/// Render-ready view of the feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedSnapshot {
    pub conversations: Vec<Conversation>,
    pub is_loading: bool,
    pub is_fetching_more: bool,
    pub has_more: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConversationFeed {
    key: QueryKey,
    pages: Vec<ConversationPage>,
    in_flight: Option<FetchKind>,
    fetched_at: Option<DateTime<Utc>>,
    error: Option<String>,
}

impl ConversationFeed {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            pages: Vec::new(),
            in_flight: None,
            fetched_at: None,
            error: None,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Drop accumulated pages and restart pagination under a new key. Any
    /// fetch still in flight belongs to the old key and will be discarded by
    /// the key guard when it lands.
    pub fn reset(&mut self, key: QueryKey) {
        self.key = key;
        self.pages.clear();
        self.in_flight = None;
        self.fetched_at = None;
        self.error = None;
    }

    /// `false` until the first page arrives; afterwards the server's word.
    pub fn has_more(&self) -> bool {
        self.pages.last().is_some_and(|page| page.has_more)
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.fetched_at.is_some_and(|at| {
            now.signed_duration_since(at) < Duration::seconds(FRESH_WINDOW_SECS)
        })
    }

    /// First fetch for the current key. No-op while one is in flight or while
    /// fresh data is on hand; stale data downgrades to a refresh so the
    /// visible list survives until the replacement page lands.
    pub fn begin_initial(&mut self, now: DateTime<Utc>) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        if self.fetched_at.is_none() {
            return Some(self.commit(FetchKind::Initial, 0));
        }
        if self.is_fresh(now) {
            None
        } else {
            Some(self.commit(FetchKind::Refresh, 0))
        }
    }

    /// Next page. Idempotent while a fetch is in flight and inert once the
    /// server reports no further records.
    pub fn begin_load_next(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() || !self.has_more() {
            return None;
        }
        let offset = self.next_offset();
        Some(self.commit(FetchKind::More, offset))
    }

    /// Background page-zero refresh, e.g. on window refocus. Skipped while a
    /// fetch is in flight, before anything was fetched, or inside the
    /// freshness window.
    pub fn begin_refresh(&mut self, now: DateTime<Utc>) -> Option<FetchRequest> {
        if self.in_flight.is_some() || self.fetched_at.is_none() || self.is_fresh(now) {
            return None;
        }
        Some(self.commit(FetchKind::Refresh, 0))
    }

    /// Apply a completed fetch. Returns `false` when the response belongs to
    /// a superseded key and was discarded without touching state.
    pub fn apply_page(
        &mut self,
        request: &FetchRequest,
        page: ConversationPage,
        now: DateTime<Utc>,
    ) -> bool {
        if request.key != self.key {
            return false;
        }
        self.in_flight = None;
        self.fetched_at = Some(now);
        self.error = None;
        match request.kind {
            FetchKind::Refresh => {
                self.pages = vec![page];
            }
            FetchKind::Initial | FetchKind::More => {
                // The server can shift rows between offset fetches; ids are
                // the stable secondary key, so repeats are dropped on append.
                let mut page = page;
                page.conversations
                    .retain(|conversation| !self.contains(&conversation.id));
                self.pages.push(page);
            }
        }
        true
    }

    /// Record a failed fetch for the current key. Returns `false` for a
    /// superseded key, mirroring [`ConversationFeed::apply_page`]. A failed
    /// background refresh only releases the guard: the stale list stays up
    /// and no error is surfaced.
    pub fn apply_error(&mut self, request: &FetchRequest, error: &FetchError) -> bool {
        if request.key != self.key {
            return false;
        }
        self.in_flight = None;
        if request.kind != FetchKind::Refresh {
            self.error = Some(error.to_string());
        }
        true
    }

    /// Pages flattened in fetch order; ordering authority stays server-side.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.pages
            .iter()
            .flat_map(|page| page.conversations.iter().cloned())
            .collect()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            conversations: self.conversations(),
            is_loading: self.fetched_at.is_none() && self.error.is_none(),
            is_fetching_more: self.in_flight == Some(FetchKind::More),
            has_more: self.has_more(),
            error: self.error.clone(),
        }
    }

    fn next_offset(&self) -> i64 {
        self.pages
            .last()
            .map_or(0, |page| page.offset + page.limit)
    }

    fn contains(&self, id: &str) -> bool {
        self.pages
            .iter()
            .any(|page| page.conversations.iter().any(|c| c.id == id))
    }

    fn commit(&mut self, kind: FetchKind, offset: i64) -> FetchRequest {
        self.in_flight = Some(kind);
        self.error = None;
        FetchRequest {
            key: self.key.clone(),
            offset,
            kind,
        }
    }
}

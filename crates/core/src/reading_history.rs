//! Client-local reading history.
//!
//! Each reading device keeps one JSON document under [`HISTORY_STORAGE_KEY`],
//! mapping novel ids to the last chapter read plus the set of every chapter
//! read so far. The server never sees this document.
//!
//! A [`HistoryStore`] is constructed once per client session over a
//! [`HistoryStorage`] backend (browser local storage, or [`MemoryStorage`])
//! and passed by reference to:
//!
//! - [`record_view`] -- the writer, called on every chapter view;
//! - [`continue_banner`] -- the "continue reading" banner on the novel page;
//! - [`annotate_chapters`] -- last-read / already-read marks on the chapter list;
//! - [`resolve_entry_point`] -- target of the primary "read" button.
//!
//! Reads never fail: an absent or unparseable document is an empty history.
//! Writes are best-effort; [`record_view`] logs and drops storage errors.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::chapter_ref::chapter_path;

/// Storage key of the history document.
pub const HISTORY_STORAGE_KEY: &str = "lentera_baca_history";

// ---------------------------------------------------------------------------
// Document format
// ---------------------------------------------------------------------------

/// History entry for one novel.
///
/// Field names follow the stored JSON (`chapterId`, `chapterOrder`, ...).
/// Unknown fields found in an existing entry are carried through rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub chapter_id: String,
    pub chapter_order: i32,
    pub chapter_title: String,
    /// Epoch milliseconds of the last view.
    pub timestamp: i64,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub read_chapters: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HistoryRecord {
    /// Interpret one stored entry, or `None` if it lacks the last-read fields.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Whether `chapter_id` has been read on this device.
    pub fn has_read(&self, chapter_id: &str) -> bool {
        self.chapter_id == chapter_id || self.read_chapters.iter().any(|c| c == chapter_id)
    }
}

/// `readChapters: null` reads as an empty set.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The whole stored document, keyed by novel id.
///
/// Entries stay raw JSON so that a write for one novel never rewrites or
/// drops the entry of another, even one this version cannot interpret.
pub type HistoryDocument = Map<String, Value>;

/// The chapter being displayed, as handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView {
    pub chapter_id: String,
    pub chapter_order: i32,
    pub chapter_title: String,
}

/// Parse a stored document.
///
/// Anything that is not a JSON object yields an empty document. Entries are
/// kept as stored; [`HistoryRecord::from_value`] interprets them on lookup.
pub fn parse_document(raw: Option<&str>) -> HistoryDocument {
    let Some(raw) = raw else {
        return HistoryDocument::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries,
        _ => HistoryDocument::new(),
    }
}

// ---------------------------------------------------------------------------
// Storage backends
// ---------------------------------------------------------------------------

/// Failure of a history storage backend.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History storage unavailable: {0}")]
    Unavailable(String),

    #[error("History storage quota exceeded")]
    QuotaExceeded,

    #[error("History serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value persistence, shaped like browser local storage.
pub trait HistoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), HistoryError>;
}

/// In-process storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a document written by an older client.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl HistoryStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.items.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Owned handle to the history document of one client session.
///
/// Every call re-reads the backend, so a write made by another tab is seen
/// on the next read. Concurrent writers are last-write-wins.
pub struct HistoryStore<S: HistoryStorage> {
    storage: S,
}

impl<S: HistoryStorage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the full document, treating any read failure as empty.
    pub fn document(&self) -> HistoryDocument {
        match self.storage.read(HISTORY_STORAGE_KEY) {
            Ok(raw) => parse_document(raw.as_deref()),
            Err(e) => {
                tracing::debug!(error = %e, "Reading history unavailable, using empty history");
                HistoryDocument::new()
            }
        }
    }

    /// History entry for a novel, if any.
    pub fn get(&self, novel_id: &str) -> Option<HistoryRecord> {
        self.document().get(novel_id).and_then(HistoryRecord::from_value)
    }

    /// Merge a chapter view into the novel's entry and persist the document.
    ///
    /// The last-read fields are overwritten, `chapter_id` is added to the
    /// read set, and unknown fields of the previous entry are kept. Only the
    /// entry for `novel_id` is replaced. Returns the stored entry.
    pub fn merge(
        &mut self,
        novel_id: &str,
        view: ChapterView,
        timestamp_ms: i64,
    ) -> Result<HistoryRecord, HistoryError> {
        let mut document = self.document();

        let previous = document.get(novel_id).and_then(HistoryRecord::from_value);
        let (mut read_chapters, extra) = match previous {
            Some(previous) => (previous.read_chapters, previous.extra),
            None => (Vec::new(), Map::new()),
        };
        if !read_chapters.contains(&view.chapter_id) {
            read_chapters.push(view.chapter_id.clone());
        }

        let record = HistoryRecord {
            chapter_id: view.chapter_id,
            chapter_order: view.chapter_order,
            chapter_title: view.chapter_title,
            timestamp: timestamp_ms,
            read_chapters,
            extra,
        };
        document.insert(novel_id.to_string(), serde_json::to_value(&record)?);

        let serialized = serde_json::to_string(&document)?;
        self.storage.write(HISTORY_STORAGE_KEY, &serialized)?;
        Ok(record)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Record that a chapter is being displayed. Storage failures are logged and
/// otherwise ignored.
pub fn record_view<S: HistoryStorage>(store: &mut HistoryStore<S>, novel_id: &str, view: ChapterView) {
    let now = chrono::Utc::now().timestamp_millis();
    let chapter_id = view.chapter_id.clone();
    if let Err(e) = store.merge(novel_id, view, now) {
        tracing::warn!(
            error = %e,
            novel_id,
            chapter_id = %chapter_id,
            "Failed to persist reading history",
        );
    }
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// "Continue reading" affordance on the novel overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueBanner {
    pub chapter_order: i32,
    pub chapter_title: String,
    pub href: String,
}

/// Build the banner for a novel, or `None` when nothing has been read yet.
pub fn continue_banner<S: HistoryStorage>(
    store: &HistoryStore<S>,
    novel_id: &str,
    slug: &str,
) -> Option<ContinueBanner> {
    store.get(novel_id).map(|record| ContinueBanner {
        href: chapter_path(slug, record.chapter_order),
        chapter_order: record.chapter_order,
        chapter_title: record.chapter_title,
    })
}

/// A chapter of the novel's chapter list, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub id: String,
    pub order: i32,
    pub title: String,
}

/// A chapter list row with its history marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedChapter {
    pub chapter: ChapterEntry,
    pub href: String,
    /// The chapter most recently opened; highlighted.
    pub is_last_read: bool,
    /// Opened at some point; de-emphasized.
    pub is_read: bool,
}

/// Mark the last-read chapter and every previously read chapter.
pub fn annotate_chapters<S: HistoryStorage>(
    store: &HistoryStore<S>,
    novel_id: &str,
    slug: &str,
    chapters: Vec<ChapterEntry>,
) -> Vec<AnnotatedChapter> {
    let record = store.get(novel_id);

    chapters
        .into_iter()
        .map(|chapter| {
            let (is_last_read, is_read) = match &record {
                Some(r) => (r.chapter_id == chapter.id, r.has_read(&chapter.id)),
                None => (false, false),
            };
            AnnotatedChapter {
                href: chapter_path(slug, chapter.order),
                chapter,
                is_last_read,
                is_read,
            }
        })
        .collect()
}

/// Which variant of the primary "read" button to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadAction {
    Start,
    Continue,
}

impl ReadAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Continue => "continue",
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Mulai Baca",
            Self::Continue => "Lanjut Baca",
        }
    }
}

/// Resolved target of the "read" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub order: i32,
    pub action: ReadAction,
    pub href: String,
}

/// Continue from the last-read chapter if there is one, else start at the
/// novel's first chapter.
pub fn resolve_entry_point<S: HistoryStorage>(
    store: &HistoryStore<S>,
    novel_id: &str,
    slug: &str,
    first_chapter_order: i32,
) -> EntryPoint {
    let (order, action) = match store.get(novel_id) {
        Some(record) => (record.chapter_order, ReadAction::Continue),
        None => (first_chapter_order, ReadAction::Start),
    };
    EntryPoint {
        order,
        action,
        href: chapter_path(slug, order),
    }
}

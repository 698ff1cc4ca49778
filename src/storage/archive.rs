//! Best-effort persistence adapter over a key-value store.

use chrono::Utc;
use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use super::models::{
    EXPORT_VERSION, ExportDocument, ImportSummary, SavedStructure, SessionSnapshot,
    TournamentRecord,
};
use super::store::Store;
use crate::structure::{BlindLevel, TournamentConfig};

/// Logical key for the tournament history list
pub const TOURNAMENT_HISTORY_KEY: &str = "poker_tournament_history";
/// Logical key for the saved structures list
pub const SAVED_STRUCTURES_KEY: &str = "poker_saved_structures";
/// Logical key for the live session snapshot
pub const CURRENT_TOURNAMENT_KEY: &str = "poker_current_tournament";

/// History entries kept, newest first
pub const HISTORY_CAP: usize = 50;
/// Saved structures kept, newest first
pub const STRUCTURES_CAP: usize = 20;

/// Storage errors surfaced to callers
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid file: {0}")]
    InvalidFile(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Document-level persistence over an opaque [`Store`].
///
/// Every operation besides `import` is best-effort: backend failures and
/// corrupt records are logged and reads fall back to "nothing stored".
#[derive(Debug, Clone)]
pub struct Archive<S: Store> {
    store: S,
}

impl<S: Store> Archive<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prepend a tournament to the history, trimming to [`HISTORY_CAP`].
    pub fn record_tournament(&mut self, record: TournamentRecord) {
        let mut history = self.history();
        history.insert(0, record);
        history.truncate(HISTORY_CAP);
        self.write_list(TOURNAMENT_HISTORY_KEY, &history);
    }

    /// All stored history, newest first.
    pub fn history(&self) -> Vec<TournamentRecord> {
        self.read_list(TOURNAMENT_HISTORY_KEY)
    }

    /// Apply an in-place update to one history entry, if present.
    pub fn update_tournament(&mut self, id: Uuid, update: impl FnOnce(&mut TournamentRecord)) {
        let mut history = self.history();
        if let Some(record) = history.iter_mut().find(|r| r.id == id) {
            update(record);
            self.write_list(TOURNAMENT_HISTORY_KEY, &history);
        }
    }

    /// Drop one history entry.
    pub fn delete_tournament(&mut self, id: Uuid) {
        let mut history = self.history();
        history.retain(|r| r.id != id);
        self.write_list(TOURNAMENT_HISTORY_KEY, &history);
    }

    /// Drop the whole history list.
    pub fn clear_history(&mut self) {
        if let Err(e) = self.store.remove(TOURNAMENT_HISTORY_KEY) {
            error!("failed to clear tournament history: {e}");
        }
    }

    /// Save a named structure, trimming to [`STRUCTURES_CAP`]. Returns the
    /// new record's id.
    pub fn save_structure(
        &mut self,
        name: &str,
        structure: Vec<BlindLevel>,
        config: TournamentConfig,
    ) -> Uuid {
        let record = SavedStructure {
            id: Uuid::new_v4(),
            name: name.to_string(),
            structure,
            config,
            created_at: Utc::now(),
        };
        let id = record.id;

        let mut structures = self.saved_structures();
        structures.insert(0, record);
        structures.truncate(STRUCTURES_CAP);
        self.write_list(SAVED_STRUCTURES_KEY, &structures);
        id
    }

    /// All saved structures, newest first.
    pub fn saved_structures(&self) -> Vec<SavedStructure> {
        self.read_list(SAVED_STRUCTURES_KEY)
    }

    /// Drop one saved structure.
    pub fn delete_structure(&mut self, id: Uuid) {
        let mut structures = self.saved_structures();
        structures.retain(|s| s.id != id);
        self.write_list(SAVED_STRUCTURES_KEY, &structures);
    }

    /// Write the live session snapshot.
    pub fn save_snapshot(&mut self, snapshot: &SessionSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(raw) => {
                if let Err(e) = self.store.put(CURRENT_TOURNAMENT_KEY, &raw) {
                    error!("failed to save session snapshot: {e}");
                }
            }
            Err(e) => error!("failed to serialize session snapshot: {e}"),
        }
    }

    /// Read back the live session snapshot, if one is stored and parseable.
    pub fn load_snapshot(&self) -> Option<SessionSnapshot> {
        match self.store.get(CURRENT_TOURNAMENT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    error!("failed to parse session snapshot: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("failed to read session snapshot: {e}");
                None
            }
        }
    }

    /// Remove the live session snapshot.
    pub fn clear_snapshot(&mut self) {
        if let Err(e) = self.store.remove(CURRENT_TOURNAMENT_KEY) {
            error!("failed to clear session snapshot: {e}");
        }
    }

    /// Bundle history and saved structures into one export document.
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument {
            version: EXPORT_VERSION.to_string(),
            export_date: Utc::now(),
            tournament_history: self.history(),
            saved_structures: self.saved_structures(),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn export_json(&self) -> String {
        match serde_json::to_string_pretty(&self.export_document()) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize export document: {e}");
                String::new()
            }
        }
    }

    /// Merge an exported document back in.
    ///
    /// Incoming entries take precedence: they are placed before the existing
    /// ones, duplicates (by id) keep their first occurrence, and both lists
    /// are re-trimmed to their caps. A document that does not parse or lacks
    /// the version/export-date header fails with
    /// [`StorageError::InvalidFile`].
    pub fn import_json(&mut self, json: &str) -> StorageResult<ImportSummary> {
        let document: ExportDocument = serde_json::from_str(json)
            .map_err(|e| StorageError::InvalidFile(e.to_string()))?;

        if document.version.is_empty() {
            return Err(StorageError::InvalidFile("missing version".to_string()));
        }

        let summary = ImportSummary {
            tournaments_imported: document.tournament_history.len(),
            structures_imported: document.saved_structures.len(),
        };

        let mut history = document.tournament_history;
        history.extend(self.history());
        let mut history = dedup_by_id(history, |r: &TournamentRecord| r.id);
        history.truncate(HISTORY_CAP);
        self.write_list(TOURNAMENT_HISTORY_KEY, &history);

        let mut structures = document.saved_structures;
        structures.extend(self.saved_structures());
        let mut structures = dedup_by_id(structures, |s: &SavedStructure| s.id);
        structures.truncate(STRUCTURES_CAP);
        self.write_list(SAVED_STRUCTURES_KEY, &structures);

        Ok(summary)
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(list) => list,
                Err(e) => {
                    error!("failed to parse {key}: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("failed to read {key}: {e}");
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, list: &[T]) {
        match serde_json::to_string(list) {
            Ok(raw) => {
                if let Err(e) = self.store.put(key, &raw) {
                    error!("failed to write {key}: {e}");
                }
            }
            Err(e) => error!("failed to serialize {key}: {e}"),
        }
    }
}

/// Keep the first occurrence of each id, preserving order.
fn dedup_by_id<T>(items: Vec<T>, id_of: impl Fn(&T) -> Uuid) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id_of(item)))
        .collect()
}

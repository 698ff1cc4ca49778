//! Persistence documents and the key-value storage seam.
//!
//! The core never talks to a real storage backend. Everything goes through
//! the [`Store`] trait — an opaque string key-value collaborator — and the
//! [`Archive`] adapter, which owns the document format:
//! - Tournament history (newest first, capped at 50)
//! - Saved blind structures (newest first, capped at 20)
//! - The live session snapshot for resume
//! - A single export/import document carrying history and structures
//!
//! Reads and writes are best-effort: a failing store or an unparseable
//! record is logged and treated as "no data" / "write skipped". The
//! in-memory state stays authoritative either way. The one error surfaced
//! to callers is [`StorageError::InvalidFile`] from `import`.

pub mod archive;
pub mod models;
pub mod store;

pub use archive::{
    Archive, CURRENT_TOURNAMENT_KEY, HISTORY_CAP, SAVED_STRUCTURES_KEY, STRUCTURES_CAP,
    StorageError, StorageResult, TOURNAMENT_HISTORY_KEY,
};
pub use models::{
    EXPORT_VERSION, ExportDocument, ImportSummary, SavedStructure, SessionSnapshot,
    TournamentRecord,
};
pub use store::{MemoryStore, Store, StoreError};

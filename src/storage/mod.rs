use crate::{
    domain::Card,
    error::{BoardError, Result},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

pub use memory_storage::MemoryStorage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

/// Storage trait for persisting the card list
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the full card list, replacing whatever was stored
    async fn save_cards(&self, cards: &[Card]) -> Result<()>;

    /// Loads the stored card list, or `None` if nothing has been saved yet
    async fn load_cards(&self) -> Result<Option<Vec<Card>>>;

    /// Forgets the stored card list
    async fn clear(&self) -> Result<()>;

    /// Checks if the backend has been initialized
    async fn is_initialized(&self) -> bool;
}

/// Persisted form of the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub cards: Vec<Card>,
}

impl BoardSnapshot {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            cards,
        }
    }
}

/// Accepts both the versioned document and the bare card array written by
/// boards that predate the version field.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBoard {
    Versioned(BoardSnapshot),
    Legacy(Vec<Card>),
}

/// Serializes cards into the current on-disk format
pub fn encode_cards(cards: &[Card]) -> Result<String> {
    let snapshot = BoardSnapshot::new(cards.to_vec());
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parses stored text in either the versioned or the legacy format
pub fn decode_cards(contents: &str) -> Result<Vec<Card>> {
    match serde_json::from_str::<StoredBoard>(contents)? {
        StoredBoard::Versioned(snapshot) if snapshot.version > FORMAT_VERSION => {
            Err(BoardError::UnsupportedVersion(snapshot.version))
        }
        StoredBoard::Versioned(snapshot) => Ok(snapshot.cards),
        StoredBoard::Legacy(cards) => Ok(cards),
    }
}

use crate::{
    domain::Card,
    error::Result,
    storage::{decode_cards, encode_cards, Storage},
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory storage holding the encoded board as a single string, the way
/// a browser keeps it under one local-storage key.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` already stored, exactly as given
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// The stored text, if any
    pub async fn raw(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<()> {
        let encoded = encode_cards(cards)?;
        *self.slot.lock().await = Some(encoded);
        Ok(())
    }

    async fn load_cards(&self) -> Result<Option<Vec<Card>>> {
        match self.slot.lock().await.as_deref() {
            Some(raw) => decode_cards(raw).map(Some),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.lock().await = None;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardId, Lane};

    #[tokio::test]
    async fn test_empty_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.load_cards().await.unwrap().is_none());
        assert!(storage.raw().await.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let cards = vec![Card::new(CardId::new("1"), "Only", Lane::Doing)];

        storage.save_cards(&cards).await.unwrap();

        assert_eq!(storage.load_cards().await.unwrap(), Some(cards));
        assert!(storage.raw().await.unwrap().contains("\"version\""));
    }

    #[tokio::test]
    async fn test_raw_corrupt_value() {
        let storage = MemoryStorage::with_raw("[{\"id\": 1}]");
        assert!(storage.load_cards().await.is_err());

        storage.clear().await.unwrap();
        assert!(storage.load_cards().await.unwrap().is_none());
    }
}

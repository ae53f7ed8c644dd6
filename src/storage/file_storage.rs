use crate::{
    domain::Card,
    error::Result,
    storage::{decode_cards, encode_cards, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const BOARD_DIR: &'static str = ".laneboard";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::BOARD_DIR),
        }
    }

    pub fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;
        tracing::info!(path = %self.root_path.display(), "board storage ready");
        Ok(())
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = encode_cards(cards)?;

        // Readers only ever see a complete file
        let tmp = self.root_path.join(format!("{}.tmp", Self::BOARD_FILE));
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, self.board_file()).await?;

        Ok(())
    }

    async fn load_cards(&self) -> Result<Option<Vec<Card>>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        decode_cards(&contents).map(Some)
    }

    async fn clear(&self) -> Result<()> {
        let board_file = self.board_file();
        if board_file.exists() {
            fs::remove_file(board_file).await?;
        }
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardId, Lane};
    use crate::error::BoardError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized().await);

        storage.initialize().await.unwrap();

        assert!(storage.is_initialized().await);
        assert!(!storage.board_file().exists());
    }

    #[tokio::test]
    async fn test_load_before_save_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        assert!(storage.load_cards().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cards_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let cards = vec![
            Card::new(CardId::new("1"), "First", Lane::Backlog),
            Card::new(CardId::new("2"), "Second", Lane::Done),
        ];
        storage.save_cards(&cards).await.unwrap();

        let loaded = storage.load_cards().await.unwrap().unwrap();
        assert_eq!(loaded, cards);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage
            .save_cards(&[Card::new(CardId::new("1"), "Old", Lane::Todo)])
            .await
            .unwrap();
        storage.save_cards(&[]).await.unwrap();

        assert_eq!(storage.load_cards().await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_load_legacy_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        std::fs::write(
            storage.board_file(),
            r#"[{"id": "1", "title": "Legacy", "column": "todo"}]"#,
        )
        .unwrap();

        let loaded = storage.load_cards().await.unwrap().unwrap();
        assert_eq!(loaded[0].title, "Legacy");
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        std::fs::write(storage.board_file(), "not json at all").unwrap();

        let result = storage.load_cards().await;
        assert!(matches!(result, Err(BoardError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.save_cards(&[]).await.unwrap();
        storage.clear().await.unwrap();
        storage.clear().await.unwrap();

        assert!(storage.load_cards().await.unwrap().is_none());
    }
}

use crate::{
    config::BoardSettings,
    domain::{seed, Board, Card, CardId, Lane},
    drag::{
        DragController, DragPayload, DropTargets, InsertionSlot, NoopReason, SlotLayout,
        TransferOutcome,
    },
    error::{BoardError, Result},
    storage::Storage,
};

/// A loaded board wired to its storage and drop targets.
///
/// Every mutation is written back through the storage before the call
/// returns. All gesture handling runs synchronously; only persistence awaits.
pub struct BoardSession<S: Storage> {
    board: Board,
    storage: S,
    targets: DropTargets,
    drag: DragController,
}

impl<S: Storage> BoardSession<S> {
    /// Opens the board stored in `storage`.
    ///
    /// Missing or unreadable data is replaced by the demo cards when
    /// `seed_defaults` is set, otherwise by an empty board. A board written
    /// in a newer format is returned as `UnsupportedVersion` and left alone.
    pub async fn open(storage: S, settings: &BoardSettings) -> Result<Self> {
        storage.initialize().await?;

        let cards = match storage.load_cards().await {
            Ok(Some(cards)) => cards,
            Ok(None) => Self::fallback_cards(settings),
            Err(err @ BoardError::UnsupportedVersion(_)) => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "stored board unreadable, starting over");
                Self::fallback_cards(settings)
            }
        };

        Ok(Self {
            board: Board::with_cards(settings.board_config(), cards),
            storage,
            targets: DropTargets::new(settings.distance_offset),
            drag: DragController::new(),
        })
    }

    fn fallback_cards(settings: &BoardSettings) -> Vec<Card> {
        if settings.seed_defaults {
            seed::default_cards()
        } else {
            Vec::new()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn targets(&self) -> &DropTargets {
        &self.targets
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Adds a card to the end of `lane` and saves
    pub async fn add_card(&mut self, lane: Lane, raw_title: &str) -> Result<CardId> {
        let id = self.board.add_card(lane, raw_title)?;
        self.persist().await?;
        Ok(id)
    }

    /// Deletes a card by id and saves. Unknown ids are a no-op.
    pub async fn discard(&mut self, id: &CardId) -> Result<bool> {
        let removed = self.board.discard(id);
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    /// Starts dragging a card
    pub fn begin_drag(&mut self, id: &CardId) -> Result<DragPayload> {
        let card = self
            .board
            .get(id)
            .ok_or_else(|| BoardError::CardNotFound(id.to_string()))?;
        Ok(self.drag.start(card))
    }

    /// Pointer is over `lane`; lights and returns the slot a drop would use
    pub fn drag_over_lane(
        &mut self,
        lane: Lane,
        pointer_y: f64,
        layout: &impl SlotLayout,
    ) -> Option<InsertionSlot> {
        self.targets
            .lane_mut(lane)
            .drag_over(self.board.cards(), pointer_y, layout)
    }

    pub fn drag_leave_lane(&mut self, lane: Lane) {
        self.targets.lane_mut(lane).drag_leave();
    }

    pub fn drag_over_discard(&mut self) {
        self.targets.discard.drag_over();
    }

    pub fn drag_leave_discard(&mut self) {
        self.targets.discard.drag_leave();
    }

    /// Drops the dragged card on `lane` at `pointer_y` and saves if it moved
    pub async fn drop_on_lane(
        &mut self,
        lane: Lane,
        pointer_y: f64,
        layout: &impl SlotLayout,
    ) -> Result<TransferOutcome> {
        let Some(payload) = self.drag.finish() else {
            self.targets.lane_mut(lane).drag_leave();
            return Ok(TransferOutcome::Unchanged(NoopReason::MissingCard));
        };

        let outcome = self
            .targets
            .lane_mut(lane)
            .drop(&mut self.board, &payload, pointer_y, layout);

        if outcome.is_moved() {
            self.persist().await?;
        }
        Ok(outcome)
    }

    /// Drops the dragged card on the discard zone and saves if it was removed
    pub async fn drop_on_discard(&mut self) -> Result<bool> {
        let Some(payload) = self.drag.finish() else {
            self.targets.discard.drag_leave();
            return Ok(false);
        };

        let removed = self.targets.discard.drop(&mut self.board, &payload);
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    /// Drag ended outside every target: nothing moves, indicators go dark
    pub fn cancel_drag(&mut self) {
        if let Some(payload) = self.drag.cancel(&mut self.targets) {
            tracing::debug!(card = %payload.card_id, "drag cancelled");
        }
    }

    async fn persist(&self) -> Result<()> {
        self.storage.save_cards(self.board.cards()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::UniformLayout;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    async fn seeded() -> BoardSession<MemoryStorage> {
        let settings = BoardSettings {
            seed_defaults: true,
            ..BoardSettings::default()
        };
        BoardSession::open(MemoryStorage::new(), &settings).await.unwrap()
    }

    fn lane_ids<S: Storage>(session: &BoardSession<S>, lane: Lane) -> Vec<String> {
        session
            .board()
            .lane(lane)
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_open_empty() {
        let session = BoardSession::open(MemoryStorage::new(), &BoardSettings::default())
            .await
            .unwrap();
        assert!(session.board().is_empty());
    }

    #[tokio::test]
    async fn test_open_seeded() {
        let session = seeded().await;
        assert_eq!(session.board().len(), 10);
    }

    #[tokio::test]
    async fn test_open_corrupt_falls_back() {
        let storage = MemoryStorage::with_raw("{{{");
        let settings = BoardSettings {
            seed_defaults: true,
            ..BoardSettings::default()
        };

        let session = BoardSession::open(storage, &settings).await.unwrap();
        assert_eq!(session.board().len(), 10);
    }

    #[tokio::test]
    async fn test_open_newer_format_keeps_stored_board() {
        let stored = r#"{
            "version": 2,
            "saved_at": "2024-01-01T00:00:00Z",
            "cards": [{"id": "a", "title": "Keep me", "column": "todo"}]
        }"#;
        let storage = MemoryStorage::with_raw(stored);

        let result = BoardSession::open(storage, &BoardSettings::default()).await;
        assert!(matches!(result, Err(BoardError::UnsupportedVersion(2))));
    }

    #[cfg(feature = "file-storage")]
    #[tokio::test]
    async fn test_open_newer_format_is_not_overwritten() {
        use crate::storage::FileStorage;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();
        let stored = r#"{"version": 2, "saved_at": "2024-01-01T00:00:00Z", "cards": []}"#;
        std::fs::write(storage.board_file(), stored).unwrap();
        let settings = BoardSettings {
            seed_defaults: true,
            ..BoardSettings::default()
        };

        let result = BoardSession::open(FileStorage::new(temp_dir.path()), &settings).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(storage.board_file()).unwrap(), stored);
    }

    #[tokio::test]
    async fn test_open_uses_configured_lane_titles() {
        let settings = BoardSettings {
            lanes: vec![crate::domain::LaneDefinition::new(Lane::Doing, "Now")],
            ..BoardSettings::default()
        };

        let session = BoardSession::open(MemoryStorage::new(), &settings).await.unwrap();
        assert_eq!(session.board().lane_title(Lane::Doing), "Now");
    }

    #[tokio::test]
    async fn test_open_existing_data() {
        let storage = MemoryStorage::new();
        storage
            .save_cards(&[Card::new(CardId::new("x"), "Stored", Lane::Doing)])
            .await
            .unwrap();

        let session = BoardSession::open(storage, &BoardSettings::default()).await.unwrap();
        assert_eq!(lane_ids(&session, Lane::Doing), vec!["x"]);
    }

    #[tokio::test]
    async fn test_add_card_persists() {
        let mut session = seeded().await;

        let id = session.add_card(Lane::Done, "  Ship it  ").await.unwrap();

        let stored = session.storage().load_cards().await.unwrap().unwrap();
        let last = stored.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "Ship it");
    }

    #[tokio::test]
    async fn test_blank_title_is_not_persisted() {
        let mut session = seeded().await;

        let result = session.add_card(Lane::Todo, "   ").await;

        assert!(matches!(result, Err(BoardError::EmptyTitle)));
        assert_eq!(session.board().len(), 10);
        assert!(session.storage().raw().await.is_none());
    }

    #[tokio::test]
    async fn test_drag_to_other_lane() {
        let mut session = seeded().await;
        let layout = UniformLayout::default();

        session.begin_drag(&CardId::new("1")).unwrap();
        session.drag_over_lane(Lane::Done, 5_000.0, &layout);
        assert!(session.targets().lane(Lane::Done).is_active());

        let outcome = session.drop_on_lane(Lane::Done, 5_000.0, &layout).await.unwrap();

        assert_eq!(
            outcome,
            TransferOutcome::Moved {
                from: Lane::Backlog,
                to: Lane::Done,
                index: 9
            }
        );
        assert_eq!(lane_ids(&session, Lane::Done), vec!["10", "1"]);
        assert_eq!(lane_ids(&session, Lane::Backlog), vec!["2", "3", "4"]);
        assert!(!session.targets().lane(Lane::Done).is_active());

        let stored = session.storage().load_cards().await.unwrap().unwrap();
        assert_eq!(stored, session.board().cards());
    }

    #[tokio::test]
    async fn test_reorder_within_lane() {
        let mut session = seeded().await;
        let layout = UniformLayout::default();

        // todo slots: 5 at 0, 6 at 52, 7 at 104, append at 156
        session.begin_drag(&CardId::new("7")).unwrap();
        let slot = session.drag_over_lane(Lane::Todo, 10.0, &layout).unwrap();
        assert_eq!(slot, InsertionSlot::before(Lane::Todo, CardId::new("5")));

        session.drop_on_lane(Lane::Todo, 10.0, &layout).await.unwrap();

        assert_eq!(lane_ids(&session, Lane::Todo), vec!["7", "5", "6"]);
    }

    #[tokio::test]
    async fn test_drop_without_drag_is_noop() {
        let mut session = seeded().await;

        let outcome = session
            .drop_on_lane(Lane::Todo, 0.0, &UniformLayout::default())
            .await
            .unwrap();

        assert!(!outcome.is_moved());
        assert!(session.storage().raw().await.is_none());
    }

    #[tokio::test]
    async fn test_discard_via_drag() {
        let mut session = seeded().await;

        session.begin_drag(&CardId::new("2")).unwrap();
        session.drag_over_discard();
        assert!(session.targets().discard.is_active());

        assert!(session.drop_on_discard().await.unwrap());
        assert!(session.board().get(&CardId::new("2")).is_none());
        assert!(!session.targets().discard.is_active());

        // payload was consumed by the first drop
        assert!(!session.drop_on_discard().await.unwrap());
    }

    #[tokio::test]
    async fn test_discard_unknown_id() {
        let mut session = seeded().await;
        assert!(!session.discard(&CardId::new("nope")).await.unwrap());
        assert!(session.storage().raw().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_leaves_board_unchanged() {
        let mut session = seeded().await;
        let before = session.board().cards().to_vec();

        session.begin_drag(&CardId::new("3")).unwrap();
        session.drag_over_lane(Lane::Doing, 10.0, &UniformLayout::default());
        session.cancel_drag();

        assert_eq!(session.board().cards(), before.as_slice());
        assert_eq!(session.targets().lane(Lane::Doing).indicators().active_index(), None);
        assert!(!session.targets().lane(Lane::Doing).is_active());
    }

    #[tokio::test]
    async fn test_begin_drag_unknown_card() {
        let mut session = seeded().await;
        assert!(matches!(
            session.begin_drag(&CardId::new("missing")),
            Err(BoardError::CardNotFound(_))
        ));
    }
}

use crate::domain::card::{Card, CardId};
use crate::drag::zone::DropTargets;

/// Data carried from drag-start to drop: only the card id.
///
/// Everything else about the card is looked up again at drop time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub card_id: CardId,
}

impl DragPayload {
    /// Key under which hosts store the payload in their drag-data channel
    pub const TRANSFER_KEY: &'static str = "cardId";

    pub fn new(card_id: CardId) -> Self {
        Self { card_id }
    }

    /// Rebuilds a payload from the string a host drag channel handed back
    pub fn from_transfer(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self::new(CardId::new(raw)))
        }
    }

    pub fn as_transfer(&self) -> &str {
        self.card_id.as_str()
    }
}

/// Tracks the single drag gesture in flight
#[derive(Debug, Default)]
pub struct DragController {
    current: Option<DragPayload>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `card`, replacing any gesture that never finished
    pub fn start(&mut self, card: &Card) -> DragPayload {
        let payload = DragPayload::new(card.id.clone());
        if let Some(stale) = self.current.replace(payload.clone()) {
            tracing::debug!(card = %stale.card_id, "abandoning unfinished drag");
        }
        payload
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.current.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.current.is_some()
    }

    /// Ends the gesture with a drop, handing back the payload
    pub fn finish(&mut self) -> Option<DragPayload> {
        self.current.take()
    }

    /// Ends the gesture without a drop and clears every indicator
    pub fn cancel(&mut self, targets: &mut DropTargets) -> Option<DragPayload> {
        targets.reset();
        self.current.take()
    }
}

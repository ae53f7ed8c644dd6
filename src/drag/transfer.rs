use crate::domain::card::{Card, CardId, Lane};
use crate::drag::geometry::SlotAnchor;

/// Result of committing a drop onto a lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The card now sits at `index` of the global list, in lane `to`
    Moved { from: Lane, to: Lane, index: usize },
    /// Nothing changed
    Unchanged(NoopReason),
}

impl TransferOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Why a drop left the list untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    /// Dropped on the slot directly in front of the card itself
    SelfDrop,
    /// The dragged id no longer names a card on the board
    MissingCard,
}

/// Moves `dragged_id` into `target_lane`, in front of the anchor card or at
/// the end of the list.
///
/// An anchor that names the dragged card itself is a no-op, as is a dragged
/// id that is no longer on the board. An anchor card that has vanished is
/// treated like the append slot. The relative order of every other card is
/// left as it was.
pub fn commit_drop(
    cards: &mut Vec<Card>,
    dragged_id: &CardId,
    target_lane: Lane,
    anchor: &SlotAnchor,
) -> TransferOutcome {
    if let SlotAnchor::Before(anchor_id) = anchor {
        if anchor_id == dragged_id {
            tracing::debug!(card = %dragged_id, "dropped onto own slot");
            return TransferOutcome::Unchanged(NoopReason::SelfDrop);
        }
    }

    let Some(from_index) = cards.iter().position(|card| &card.id == dragged_id) else {
        tracing::debug!(card = %dragged_id, "dragged card no longer exists");
        return TransferOutcome::Unchanged(NoopReason::MissingCard);
    };

    let card = cards.remove(from_index);
    let from = card.column;
    let card = card.moved_to(target_lane);

    let index = match anchor {
        SlotAnchor::Append => cards.len(),
        SlotAnchor::Before(anchor_id) => match cards.iter().position(|c| &c.id == anchor_id) {
            Some(index) => index,
            None => {
                tracing::debug!(anchor = %anchor_id, "anchor card missing, appending");
                cards.len()
            }
        },
    };

    cards.insert(index, card);
    tracing::debug!(card = %dragged_id, %from, to = %target_lane, index, "card moved");

    TransferOutcome::Moved {
        from,
        to: target_lane,
        index,
    }
}

/// Removes `dragged_id` from the list. Returns `false` if it was not there.
pub fn discard(cards: &mut Vec<Card>, dragged_id: &CardId) -> bool {
    let before = cards.len();
    cards.retain(|card| &card.id != dragged_id);
    let removed = cards.len() != before;
    if removed {
        tracing::debug!(card = %dragged_id, "card discarded");
    }
    removed
}

use crate::domain::board::Board;
use crate::domain::card::{Card, Lane};
use crate::drag::controller::DragPayload;
use crate::drag::geometry::{
    lane_slots, nearest_slot_index, InsertionSlot, SlotAnchor, SlotGeometry, SlotLayout,
    DISTANCE_OFFSET,
};
use crate::drag::indicator::SlotIndicators;
use crate::drag::transfer::TransferOutcome;

/// Drop target for one lane.
///
/// Resolves the pointer to an insertion slot on every drag-over, keeps that
/// slot's indicator lit, and commits the move on drop.
#[derive(Debug, Clone)]
pub struct LaneDropZone {
    lane: Lane,
    distance_offset: f64,
    active: bool,
    indicators: SlotIndicators,
}

impl LaneDropZone {
    pub fn new(lane: Lane) -> Self {
        Self::with_offset(lane, DISTANCE_OFFSET)
    }

    pub fn with_offset(lane: Lane, distance_offset: f64) -> Self {
        Self {
            lane,
            distance_offset,
            active: false,
            indicators: SlotIndicators::new(),
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Whether a drag is currently hovering over this lane
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn indicators(&self) -> &SlotIndicators {
        &self.indicators
    }

    /// Pointer moved over the lane: lights the slot a drop would land in
    pub fn drag_over(
        &mut self,
        cards: &[Card],
        pointer_y: f64,
        layout: &impl SlotLayout,
    ) -> Option<InsertionSlot> {
        self.active = true;

        let geometries = self.measure(cards, layout);
        match nearest_slot_index(pointer_y, &geometries, self.distance_offset) {
            Some(index) => {
                self.indicators.highlight(geometries.len(), index);
                Some(geometries[index].slot.clone())
            }
            None => {
                self.indicators.clear();
                None
            }
        }
    }

    /// Pointer left the lane
    pub fn drag_leave(&mut self) {
        self.active = false;
        self.indicators.clear();
    }

    /// Drops `payload` at `pointer_y`.
    ///
    /// The slot is resolved against the board as it is now, before anything
    /// moves. A layout that reports no slots drops at the end of the lane.
    pub fn drop(
        &mut self,
        board: &mut Board,
        payload: &DragPayload,
        pointer_y: f64,
        layout: &impl SlotLayout,
    ) -> TransferOutcome {
        self.drag_leave();

        let geometries = self.measure(board.cards(), layout);
        let anchor = nearest_slot_index(pointer_y, &geometries, self.distance_offset)
            .map(|index| geometries[index].slot.anchor.clone())
            .unwrap_or(SlotAnchor::Append);

        tracing::debug!(lane = %self.lane, anchor = anchor.as_attr(), "resolved drop slot");
        board.apply_drop(&payload.card_id, self.lane, &anchor)
    }

    fn measure(&self, cards: &[Card], layout: &impl SlotLayout) -> Vec<SlotGeometry> {
        let slots = lane_slots(cards, self.lane);
        let geometries = layout.measure(&slots);
        if geometries.len() != slots.len() {
            tracing::warn!(
                lane = %self.lane,
                expected = slots.len(),
                got = geometries.len(),
                "layout reported a different number of slots"
            );
        }
        geometries
    }
}

/// Drop target that deletes whatever is dropped on it
#[derive(Debug, Clone, Default)]
pub struct DiscardZone {
    active: bool,
}

impl DiscardZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drag_over(&mut self) {
        self.active = true;
    }

    pub fn drag_leave(&mut self) {
        self.active = false;
    }

    /// Removes the dragged card. Returns `false` for an unknown id.
    pub fn drop(&mut self, board: &mut Board, payload: &DragPayload) -> bool {
        self.active = false;
        board.discard(&payload.card_id)
    }
}

/// Every drop target on the board
#[derive(Debug, Clone)]
pub struct DropTargets {
    pub lanes: [LaneDropZone; 4],
    pub discard: DiscardZone,
}

impl DropTargets {
    pub fn new(distance_offset: f64) -> Self {
        Self {
            lanes: Lane::ALL.map(|lane| LaneDropZone::with_offset(lane, distance_offset)),
            discard: DiscardZone::new(),
        }
    }

    pub fn lane(&self, lane: Lane) -> &LaneDropZone {
        &self.lanes[Self::position(lane)]
    }

    pub fn lane_mut(&mut self, lane: Lane) -> &mut LaneDropZone {
        &mut self.lanes[Self::position(lane)]
    }

    /// Clears hover state and indicators on every target
    pub fn reset(&mut self) {
        self.lanes.iter_mut().for_each(LaneDropZone::drag_leave);
        self.discard.drag_leave();
    }

    fn position(lane: Lane) -> usize {
        match lane {
            Lane::Backlog => 0,
            Lane::Todo => 1,
            Lane::Doing => 2,
            Lane::Done => 3,
        }
    }
}

impl Default for DropTargets {
    fn default() -> Self {
        Self::new(DISTANCE_OFFSET)
    }
}

//! Pointer drag-and-drop: slot geometry, indicators, and list transfers.

pub mod controller;
pub mod geometry;
pub mod indicator;
pub mod transfer;
pub mod zone;

pub use controller::{DragController, DragPayload};
pub use geometry::{
    lane_slots, nearest_slot, nearest_slot_index, InsertionSlot, SlotAnchor, SlotGeometry,
    SlotLayout, UniformLayout, APPEND_SENTINEL, DISTANCE_OFFSET,
};
pub use indicator::SlotIndicators;
pub use transfer::{commit_drop, discard, NoopReason, TransferOutcome};
pub use zone::{DiscardZone, DropTargets, LaneDropZone};

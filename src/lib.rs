//! # Laneboard Core
//!
//! Card store and drag-and-drop logic for a four-lane kanban board.
//!
//! The crate owns the ordered card list, derives per-lane views from it,
//! resolves which gap a dragged card would land in from rendered slot
//! positions, and commits moves and deletions. Rendering is left to the
//! host, which reports slot positions through [`drag::SlotLayout`].

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::BoardSettings;
pub use domain::{
    board::{Board, BoardConfig, LaneDefinition},
    card::{Card, CardId, Lane},
    lanes::filter_by_lane,
};
pub use drag::{
    commit_drop, discard, nearest_slot, DragPayload, InsertionSlot, SlotAnchor, SlotGeometry,
    SlotLayout, TransferOutcome,
};
pub use error::{BoardError, Result};
pub use session::BoardSession;
pub use storage::Storage;

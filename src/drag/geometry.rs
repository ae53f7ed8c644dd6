//! Insertion slots and the nearest-slot search run on every drag-over.
//!
//! A lane renders one slot in front of each of its cards plus one trailing
//! slot. Each slot names the card that follows the gap it stands for; the
//! trailing slot has no such card and means "append". The renderer reports
//! where each slot ended up on screen through [`SlotLayout`], and
//! [`nearest_slot_index`] picks the slot a drop at the pointer would land in.

use crate::domain::card::{Card, CardId, Lane};
use crate::domain::lanes::filter_by_lane;

/// Default vertical bias added to a slot's top edge before comparing it
/// with the pointer, roughly half a card plus its margin.
pub const DISTANCE_OFFSET: f64 = 50.0;

/// Anchor value hosts use for the trailing slot in string form
pub const APPEND_SENTINEL: &str = "-1";

/// What a slot inserts in front of
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotAnchor {
    /// Insert immediately before this card
    Before(CardId),
    /// Trailing slot: push to the end of the list
    Append,
}

impl SlotAnchor {
    /// Parses the anchor attribute a renderer attached to a slot.
    /// The sentinel and the empty string both mean append.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | APPEND_SENTINEL => Self::Append,
            id => Self::Before(CardId::new(id)),
        }
    }

    /// String form suitable for a renderer attribute
    pub fn as_attr(&self) -> &str {
        match self {
            Self::Before(id) => id.as_str(),
            Self::Append => APPEND_SENTINEL,
        }
    }

    pub fn is_append(&self) -> bool {
        matches!(self, Self::Append)
    }
}

/// A gap in a lane where a dragged card can be dropped
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsertionSlot {
    pub lane: Lane,
    pub anchor: SlotAnchor,
}

impl InsertionSlot {
    pub fn before(lane: Lane, id: CardId) -> Self {
        Self {
            lane,
            anchor: SlotAnchor::Before(id),
        }
    }

    pub fn append(lane: Lane) -> Self {
        Self {
            lane,
            anchor: SlotAnchor::Append,
        }
    }
}

/// Where a slot was rendered
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGeometry {
    pub slot: InsertionSlot,
    pub top: f64,
    pub height: f64,
}

impl SlotGeometry {
    pub fn new(slot: InsertionSlot, top: f64, height: f64) -> Self {
        Self { slot, top, height }
    }
}

/// Derives the slots a lane must render, in top-to-bottom order.
///
/// Always ends with the lane's append slot, so the result is never empty.
pub fn lane_slots(cards: &[Card], lane: Lane) -> Vec<InsertionSlot> {
    filter_by_lane(cards, lane)
        .into_iter()
        .map(|card| InsertionSlot::before(lane, card.id.clone()))
        .chain(std::iter::once(InsertionSlot::append(lane)))
        .collect()
}

/// Picks the slot a drop at `pointer_y` lands in.
///
/// Each slot scores `pointer_y - (top + distance_offset)`. Among slots with a
/// negative score, the one closest to zero wins; on equal scores the first
/// one wins. When no slot scores negative the pointer is below the lane's
/// content and the last slot is returned. `None` only for an empty slice.
pub fn nearest_slot_index(
    pointer_y: f64,
    slots: &[SlotGeometry],
    distance_offset: f64,
) -> Option<usize> {
    let last = slots.len().checked_sub(1)?;

    let (_, index) = slots.iter().enumerate().fold(
        (f64::NEG_INFINITY, last),
        |(closest, chosen), (index, geometry)| {
            let offset = pointer_y - (geometry.top + distance_offset);
            if offset < 0.0 && offset > closest {
                (offset, index)
            } else {
                (closest, chosen)
            }
        },
    );

    Some(index)
}

/// Same as [`nearest_slot_index`] but returns the slot itself
pub fn nearest_slot(
    pointer_y: f64,
    slots: &[SlotGeometry],
    distance_offset: f64,
) -> Option<&SlotGeometry> {
    nearest_slot_index(pointer_y, slots, distance_offset).map(|index| &slots[index])
}

/// Rendering collaborator: reports where the given slots currently sit.
///
/// Implementations must return one geometry per slot, in the order given.
pub trait SlotLayout {
    fn measure(&self, slots: &[InsertionSlot]) -> Vec<SlotGeometry>;
}

impl<F> SlotLayout for F
where
    F: Fn(&[InsertionSlot]) -> Vec<SlotGeometry>,
{
    fn measure(&self, slots: &[InsertionSlot]) -> Vec<SlotGeometry> {
        self(slots)
    }
}

/// Layout for renderers that stack fixed-height cards, each preceded by its
/// indicator line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLayout {
    pub origin: f64,
    pub card_height: f64,
    pub slot_height: f64,
}

impl UniformLayout {
    pub fn new(origin: f64, card_height: f64, slot_height: f64) -> Self {
        Self {
            origin,
            card_height,
            slot_height,
        }
    }
}

impl Default for UniformLayout {
    fn default() -> Self {
        Self::new(0.0, 46.0, 6.0)
    }
}

impl SlotLayout for UniformLayout {
    fn measure(&self, slots: &[InsertionSlot]) -> Vec<SlotGeometry> {
        let stride = self.slot_height + self.card_height;
        slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let top = self.origin + index as f64 * stride;
                SlotGeometry::new(slot.clone(), top, self.slot_height)
            })
            .collect()
    }
}

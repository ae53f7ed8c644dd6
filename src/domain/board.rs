use crate::domain::card::{Card, CardId, Lane};
use crate::domain::lanes::filter_by_lane;
use crate::drag::geometry::SlotAnchor;
use crate::drag::transfer::{self, TransferOutcome};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Title shown for one lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneDefinition {
    pub lane: Lane,
    pub title: String,
}

impl LaneDefinition {
    pub fn new(lane: Lane, title: impl Into<String>) -> Self {
        Self {
            lane,
            title: title.into(),
        }
    }
}

/// The stock lane titles, in board order
pub fn default_lanes() -> Vec<LaneDefinition> {
    Lane::ALL
        .into_iter()
        .map(|lane| LaneDefinition::new(lane, lane.default_title()))
        .collect()
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub lanes: Vec<LaneDefinition>,
}

impl BoardConfig {
    pub fn new(lanes: Vec<LaneDefinition>) -> Self {
        Self { lanes }
    }

    /// Title for `lane`; lanes missing from the table keep their stock title
    pub fn title(&self, lane: Lane) -> &str {
        self.lanes
            .iter()
            .find(|def| def.lane == lane)
            .map(|def| def.title.as_str())
            .unwrap_or_else(|| lane.default_title())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(default_lanes())
    }
}

/// The card store: one ordered list holding every card on the board.
///
/// Lane views are derived from this list on demand. Card ids are unique
/// within it at all times.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub config: BoardConfig,
    cards: Vec<Card>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    /// Builds a board from previously stored cards.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even for hand-edited files.
    pub fn with_cards(config: BoardConfig, cards: Vec<Card>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards
            .into_iter()
            .filter(|card| {
                let fresh = seen.insert(card.id.clone());
                if !fresh {
                    tracing::warn!(card = %card.id, "dropping duplicate card id");
                }
                fresh
            })
            .collect();

        Self { config, cards }
    }

    /// All cards in board order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Cards of one lane, in board order
    pub fn lane(&self, lane: Lane) -> Vec<&Card> {
        filter_by_lane(&self.cards, lane)
    }

    /// Gets the display title for a lane
    pub fn lane_title(&self, lane: Lane) -> &str {
        self.config.title(lane)
    }

    /// Appends a new card to the end of the board.
    ///
    /// The title is trimmed; a blank title is rejected without touching the
    /// board.
    pub fn add_card(&mut self, lane: Lane, raw_title: &str) -> Result<CardId> {
        let title = raw_title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }

        let id = CardId::generate();
        self.cards.push(Card::new(id.clone(), title, lane));
        tracing::debug!(card = %id, %lane, "card added");

        Ok(id)
    }

    /// Removes a card by id, returning it if it was present
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| &card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Moves a card into `lane` in front of `anchor`
    pub fn apply_drop(
        &mut self,
        dragged_id: &CardId,
        lane: Lane,
        anchor: &SlotAnchor,
    ) -> TransferOutcome {
        transfer::commit_drop(&mut self.cards, dragged_id, lane, anchor)
    }

    /// Removes a dropped card; unknown ids are ignored
    pub fn discard(&mut self, dragged_id: &CardId) -> bool {
        transfer::discard(&mut self.cards, dragged_id)
    }
}

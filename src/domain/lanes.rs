use crate::domain::card::{Card, Lane};

/// Returns the cards belonging to `lane`, in board order
///
/// Lane membership is a filter over the single global card list, so the
/// relative order of the returned cards is the order they appear in `cards`.
///
/// # Examples
/// ```
/// use laneboard_core::domain::card::{Card, CardId, Lane};
/// use laneboard_core::domain::lanes::filter_by_lane;
///
/// let cards = vec![
///     Card::new(CardId::new("1"), "A", Lane::Todo),
///     Card::new(CardId::new("2"), "B", Lane::Done),
///     Card::new(CardId::new("3"), "C", Lane::Todo),
/// ];
///
/// let todo = filter_by_lane(&cards, Lane::Todo);
/// assert_eq!(todo.len(), 2);
/// assert_eq!(todo[1].id.as_str(), "3");
/// ```
pub fn filter_by_lane(cards: &[Card], lane: Lane) -> Vec<&Card> {
    cards.iter().filter(|card| card.column == lane).collect()
}

/// Number of cards per lane, in `Lane::ALL` order
pub fn lane_counts(cards: &[Card]) -> [(Lane, usize); 4] {
    Lane::ALL.map(|lane| (lane, cards.iter().filter(|c| c.column == lane).count()))
}

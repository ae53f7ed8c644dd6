use crate::domain::card::{Card, CardId, Lane};

/// Demo cards for a fresh board
pub fn default_cards() -> Vec<Card> {
    [
        ("1", "Look into render bug in dashboard", Lane::Backlog),
        ("2", "SOX compliance checklist", Lane::Backlog),
        ("3", "[SPIKE] Migrate to Azure", Lane::Backlog),
        ("4", "Document Notifications service", Lane::Backlog),
        ("5", "Research DB options for new microservice", Lane::Todo),
        ("6", "Postmortem for outage", Lane::Todo),
        ("7", "Sync with product on Q3 roadmap", Lane::Todo),
        ("8", "Refactor context providers to use Zustand", Lane::Doing),
        ("9", "Add logging to daily CRON", Lane::Doing),
        ("10", "Set up DD dashboards for Lambda listener", Lane::Done),
    ]
    .into_iter()
    .map(|(id, title, lane)| Card::new(CardId::new(id), title, lane))
    .collect()
}

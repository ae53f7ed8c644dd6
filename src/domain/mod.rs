pub mod board;
pub mod card;
pub mod lanes;
pub mod seed;

pub use board::{default_lanes, Board, BoardConfig, LaneDefinition};
pub use card::{Card, CardId, Lane};
pub use lanes::{filter_by_lane, lane_counts};

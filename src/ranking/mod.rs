pub mod engine;

pub use engine::{rank, LeaderRow, Medal, RankingEngine};

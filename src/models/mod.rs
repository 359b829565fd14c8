pub mod achievement;
pub mod error;
pub mod leaderboard;
pub mod user;

pub use achievement::*;
pub use error::*;
pub use leaderboard::*;
pub use user::*;

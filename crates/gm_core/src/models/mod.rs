pub mod play;
pub mod team;

pub use play::PlayEvent;
pub use team::{Player, Position, Team};

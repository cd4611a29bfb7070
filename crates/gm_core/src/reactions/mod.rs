//! Downstream reactions driven by momentum state.

pub mod crowd;
pub mod hype;
pub mod ui;

pub use crowd::Crowd;
pub use hype::HypeAction;
pub use ui::UIController;

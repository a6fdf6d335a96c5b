pub mod evaluator;
pub mod finder;
pub mod models;
pub mod time;

// Re-export the core surface
pub use finder::FreeSlotFinder;
pub use models::{FreeSlot, TimePocket};

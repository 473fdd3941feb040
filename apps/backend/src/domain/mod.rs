//! Domain layer: pure scoring logic and player bookkeeping.

pub mod completion;
pub mod frames;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_completion;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_state;

// Re-exports for ergonomics
pub use completion::{is_finished, winners};
pub use frames::Frame;
pub use rules::{pin_count_is_valid, FRAMES, MAX_PINS, MAX_ROLLS};
pub use scoring::score_and_segment;
pub use snapshot::{snapshot, GameSnapshot, PlayerSnapshot};
pub use state::{GameState, PlayerGameRecord, PlayerId};

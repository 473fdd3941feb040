//! Game completion evaluation derived from segmented frames.

use crate::domain::frames::Frame;
use crate::domain::rules::FRAMES;
use crate::domain::state::PlayerId;

/// Whether a single player's game has ended.
///
/// Frame 10 must be non-empty and fully played out: three rolls after a
/// strike or spare within it, exactly two rolls otherwise.
pub fn is_finished(frames: &[Frame]) -> bool {
    let Some(tenth) = frames.get(FRAMES - 1) else {
        return false;
    };
    if tenth.is_empty() {
        return false;
    }
    if tenth.is_strike() || tenth.is_spare() {
        tenth.len() == 3
    } else {
        tenth.len() == 2
    }
}

/// Ids of all players holding the maximum score, in seating order.
///
/// Computed only once the game is finished; while rolls remain the winner
/// set is empty so no premature winner is suggested.
pub fn winners(scores: &[(PlayerId, u16)], finished: bool) -> Vec<PlayerId> {
    if !finished {
        return Vec::new();
    }
    let Some(max) = scores.iter().map(|&(_, score)| score).max() else {
        return Vec::new();
    };
    scores
        .iter()
        .filter(|&&(_, score)| score == max)
        .map(|&(id, _)| id)
        .collect()
}

//! Frame segmentation and scoring over a player's roll sequence.
//!
//! Pure function of the roll sequence: re-deriving frames and score from the
//! same input always yields the same result, and appending rolls never makes
//! the total decrease. Strike and spare bonuses are credited only once every
//! bonus roll they depend on has actually been thrown; until then the frame
//! contributes nothing to the running total (deferred resolution).

use crate::domain::frames::Frame;
use crate::domain::rules::{FRAMES, MAX_PINS};

/// Partition `rolls` into exactly ten frames and compute the total score.
///
/// Frame positions the cursor has not reached yet come back as empty frames,
/// so callers can render a live scoreboard mid-game. Rolls beyond a complete
/// tenth frame are ignored.
pub fn score_and_segment(rolls: &[u8]) -> (u16, Vec<Frame>) {
    let mut frames = Vec::with_capacity(FRAMES);
    let mut total: u16 = 0;
    let mut cursor = 0usize;

    // Frames 1..=9: one frame per position, consuming rolls left to right.
    for _ in 1..FRAMES {
        if cursor >= rolls.len() {
            frames.push(Frame::empty());
            continue;
        }

        let first = rolls[cursor];
        if first == MAX_PINS {
            frames.push(Frame::from_rolls(vec![first]));
            // Strike bonus needs the next two rolls; unresolved until then.
            if let (Some(&b1), Some(&b2)) = (rolls.get(cursor + 1), rolls.get(cursor + 2)) {
                total += u16::from(MAX_PINS) + u16::from(b1) + u16::from(b2);
            }
            cursor += 1;
        } else if let Some(&second) = rolls.get(cursor + 1) {
            frames.push(Frame::from_rolls(vec![first, second]));
            if first + second == MAX_PINS {
                // Spare bonus needs one more roll; unresolved until then.
                if let Some(&bonus) = rolls.get(cursor + 2) {
                    total += u16::from(MAX_PINS) + u16::from(bonus);
                }
            } else {
                // Open frame: final immediately.
                total += u16::from(first) + u16::from(second);
            }
            cursor += 2;
        } else {
            // Lone first roll: displayed, but unresolved until the frame
            // completes. Never credited partially so the total stays
            // monotonic once the frame turns out to be a spare.
            frames.push(Frame::from_rolls(vec![first]));
            cursor += 1;
        }
    }

    // Frame 10 takes whatever remains: up to two rolls, a third only after a
    // strike or spare within the frame. No look-ahead exists past it, so its
    // contribution is always the raw sum of the rolls thrown so far.
    let mut tenth = Vec::new();
    if let Some(&r1) = rolls.get(cursor) {
        tenth.push(r1);
        if let Some(&r2) = rolls.get(cursor + 1) {
            tenth.push(r2);
            if r1 == MAX_PINS || r1 + r2 == MAX_PINS {
                if let Some(&r3) = rolls.get(cursor + 2) {
                    tenth.push(r3);
                }
            }
        }
    }
    let tenth = Frame::from_rolls(tenth);
    total += tenth.pin_total();
    frames.push(tenth);

    (total, frames)
}

pub const FRAMES: usize = 10;
pub const MAX_PINS: u8 = 10;

// 9 two-roll frames plus up to 3 rolls in the tenth.
pub const MAX_ROLLS: usize = 21;

/// Per-roll range check. This is the only validation the system performs;
/// cross-roll consistency within a frame is deliberately not enforced.
pub fn pin_count_is_valid(pins: u8) -> bool {
    pins <= MAX_PINS
}

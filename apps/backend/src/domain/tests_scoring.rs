use crate::domain::frames::Frame;
use crate::domain::rules::FRAMES;
use crate::domain::scoring::score_and_segment;

fn frames_of(rolls: &[u8]) -> Vec<Frame> {
    score_and_segment(rolls).1
}

fn score_of(rolls: &[u8]) -> u16 {
    score_and_segment(rolls).0
}

#[test]
fn empty_sequence_scores_zero_with_ten_empty_frames() {
    let (score, frames) = score_and_segment(&[]);
    assert_eq!(score, 0);
    assert_eq!(frames.len(), FRAMES);
    assert!(frames.iter().all(Frame::is_empty));
}

#[test]
fn always_exactly_ten_frames() {
    for rolls in [&[][..], &[4][..], &[10; 12][..], &[3; 21][..]] {
        assert_eq!(frames_of(rolls).len(), FRAMES);
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let rolls = [10, 3, 4, 5, 5, 9];
    assert_eq!(score_and_segment(&rolls), score_and_segment(&rolls));
}

#[test]
fn open_frame_is_final_immediately() {
    assert_eq!(score_of(&[3, 4]), 7);
    assert_eq!(frames_of(&[3, 4])[0], Frame::from_rolls(vec![3, 4]));
}

#[test]
fn lone_first_roll_is_displayed_but_unresolved() {
    let (score, frames) = score_and_segment(&[4]);
    assert_eq!(frames[0], Frame::from_rolls(vec![4]));
    assert!(frames[1].is_empty());
    // Deferred policy: nothing is credited until the frame completes.
    assert_eq!(score, 0);
}

#[test]
fn spare_bonus_deferred_until_next_roll_exists() {
    // Spare alone: unresolved, contributes nothing yet.
    assert_eq!(score_of(&[6, 4]), 0);
    // Frame 2's first roll resolves it: 10 + 5 = 15. The new lone roll
    // itself stays unresolved.
    assert_eq!(score_of(&[6, 4, 5]), 15);
}

#[test]
fn spare_then_spare_then_open() {
    // [6,4] [5,5] [3,4]: (10+5) + (10+3) + 7 = 35
    let (score, frames) = score_and_segment(&[6, 4, 5, 5, 3, 4]);
    assert_eq!(score, 35);
    assert_eq!(frames[0], Frame::from_rolls(vec![6, 4]));
    assert_eq!(frames[1], Frame::from_rolls(vec![5, 5]));
    assert_eq!(frames[2], Frame::from_rolls(vec![3, 4]));
    assert!(frames[3].is_empty());
}

#[test]
fn strike_bonus_deferred_until_both_rolls_exist() {
    assert_eq!(score_of(&[10]), 0);
    // One bonus roll present, still unresolved; the lone [3] is too.
    assert_eq!(score_of(&[10, 3]), 0);
    // Both present: strike 10+3+4, frame 2 open 7.
    assert_eq!(score_of(&[10, 3, 4]), 24);
}

#[test]
fn strike_frame_consumes_one_roll() {
    let frames = frames_of(&[10, 3, 4]);
    assert_eq!(frames[0], Frame::from_rolls(vec![10]));
    assert_eq!(frames[1], Frame::from_rolls(vec![3, 4]));
}

#[test]
fn consecutive_strikes_resolve_across_frames() {
    // [10] [10] [10] []...: first strike resolved as 10+10+10, the rest not.
    assert_eq!(score_of(&[10, 10, 10]), 30);
    let frames = frames_of(&[10, 10, 10]);
    assert_eq!(frames[2], Frame::from_rolls(vec![10]));
    assert!(frames[3].is_empty());
}

#[test]
fn perfect_game_scores_300() {
    let rolls = [10u8; 12];
    let (score, frames) = score_and_segment(&rolls);
    assert_eq!(score, 300);
    assert_eq!(frames[9], Frame::from_rolls(vec![10, 10, 10]));
    for frame in &frames[..9] {
        assert_eq!(*frame, Frame::from_rolls(vec![10]));
    }
}

#[test]
fn all_spares_with_five_bonus_scores_150() {
    let rolls = [5u8; 21];
    assert_eq!(score_of(&rolls), 150);
}

#[test]
fn gutter_game_scores_zero() {
    assert_eq!(score_of(&[0u8; 20]), 0);
}

#[test]
fn nine_zero_game_scores_90() {
    let rolls: Vec<u8> = (0..10).flat_map(|_| [9u8, 0u8]).collect();
    assert_eq!(score_of(&rolls), 90);
}

#[test]
fn tenth_frame_strike_allows_three_rolls() {
    // Nine open frames of [1,1], then a strike and both fill rolls.
    let mut rolls: Vec<u8> = (0..9).flat_map(|_| [1u8, 1u8]).collect();
    rolls.extend([10, 3, 4]);
    let (score, frames) = score_and_segment(&rolls);
    assert_eq!(frames[9], Frame::from_rolls(vec![10, 3, 4]));
    // 9 * 2 pins + (10 + 3 + 4) raw in the tenth.
    assert_eq!(score, 18 + 17);
}

#[test]
fn tenth_frame_spare_allows_third_roll() {
    let mut rolls: Vec<u8> = (0..9).flat_map(|_| [1u8, 1u8]).collect();
    rolls.extend([6, 4, 9]);
    let frames = frames_of(&rolls);
    assert_eq!(frames[9], Frame::from_rolls(vec![6, 4, 9]));
}

#[test]
fn tenth_frame_open_ignores_extra_roll() {
    let mut rolls: Vec<u8> = (0..9).flat_map(|_| [1u8, 1u8]).collect();
    rolls.extend([3, 4, 9]);
    let (score, frames) = score_and_segment(&rolls);
    assert_eq!(frames[9], Frame::from_rolls(vec![3, 4]));
    assert_eq!(score, 18 + 7);
}

#[test]
fn tenth_frame_scores_raw_partial_sum() {
    let mut rolls: Vec<u8> = (0..9).flat_map(|_| [1u8, 1u8]).collect();
    rolls.push(10);
    let (score, frames) = score_and_segment(&rolls);
    assert_eq!(frames[9], Frame::from_rolls(vec![10]));
    // No look-ahead beyond the frame: the lone strike counts its raw pins.
    assert_eq!(score, 18 + 10);
}

#[test]
fn score_never_decreases_as_rolls_are_appended() {
    // Mixed game exercising strike, spare, open and partial frames.
    let rolls = [10, 3, 7, 4, 2, 10, 10, 5, 5, 0, 3, 8, 2, 10, 6];
    let mut previous = 0;
    for n in 0..=rolls.len() {
        let score = score_of(&rolls[..n]);
        assert!(
            score >= previous,
            "score dropped from {previous} to {score} after {n} rolls"
        );
        previous = score;
    }
}

#[test]
fn zero_pin_frames_are_played_not_empty() {
    let frames = frames_of(&[0, 0]);
    assert_eq!(frames[0], Frame::from_rolls(vec![0, 0]));
    assert!(!frames[0].is_empty());
    assert!(frames[1].is_empty());
}

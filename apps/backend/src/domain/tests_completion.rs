use crate::domain::completion::{is_finished, winners};
use crate::domain::scoring::score_and_segment;

/// Nine open frames of [1,1] followed by the given tenth-frame rolls.
fn frames_with_tenth(tenth: &[u8]) -> Vec<crate::domain::Frame> {
    let mut rolls: Vec<u8> = (0..9).flat_map(|_| [1u8, 1u8]).collect();
    rolls.extend_from_slice(tenth);
    score_and_segment(&rolls).1
}

#[test]
fn unplayed_tenth_frame_is_not_finished() {
    assert!(!is_finished(&score_and_segment(&[]).1));
    assert!(!is_finished(&score_and_segment(&[10, 3, 4]).1));
    assert!(!is_finished(&frames_with_tenth(&[])));
}

#[test]
fn open_tenth_frame_finishes_after_two_rolls() {
    assert!(!is_finished(&frames_with_tenth(&[3])));
    assert!(is_finished(&frames_with_tenth(&[3, 4])));
}

#[test]
fn spare_tenth_frame_needs_three_rolls() {
    assert!(!is_finished(&frames_with_tenth(&[6, 4])));
    assert!(is_finished(&frames_with_tenth(&[6, 4, 9])));
}

#[test]
fn strike_tenth_frame_needs_three_rolls() {
    assert!(!is_finished(&frames_with_tenth(&[10])));
    assert!(!is_finished(&frames_with_tenth(&[10, 10])));
    assert!(is_finished(&frames_with_tenth(&[10, 10, 10])));
    assert!(is_finished(&frames_with_tenth(&[10, 0, 0])));
}

#[test]
fn zero_pin_tenth_frame_still_counts_as_played() {
    assert!(is_finished(&frames_with_tenth(&[0, 0])));
}

#[test]
fn winners_empty_while_unfinished() {
    assert_eq!(winners(&[(1, 120), (2, 80)], false), Vec::<i64>::new());
}

#[test]
fn winners_empty_without_players() {
    assert_eq!(winners(&[], true), Vec::<i64>::new());
}

#[test]
fn single_highest_score_wins() {
    assert_eq!(winners(&[(1, 120), (2, 80), (3, 119)], true), vec![1]);
}

#[test]
fn ties_are_preserved_in_seating_order() {
    assert_eq!(winners(&[(1, 90), (2, 90), (3, 12)], true), vec![1, 2]);
    assert_eq!(winners(&[(7, 0), (9, 0)], true), vec![7, 9]);
}

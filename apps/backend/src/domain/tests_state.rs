use crate::domain::state::GameState;

#[test]
fn player_ids_increase_monotonically() {
    let mut state = GameState::new();
    let a = state.add_player("Alice");
    let b = state.add_player("Bob");
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);

    // Ids are never reused, even after a removal.
    state.remove_player(b.id);
    let c = state.add_player("Cara");
    assert_eq!(c.id, 3);
}

#[test]
fn blank_names_get_a_placeholder() {
    let mut state = GameState::new();
    assert_eq!(state.add_player("").name, "Player 1");
    assert_eq!(state.add_player("   ").name, "Player 2");
    assert_eq!(state.add_player("  Dana ").name, "Dana");
}

#[test]
fn turn_rotates_after_every_roll() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    let b = state.add_player("B").id;

    assert_eq!(state.current_turn(), Some(a));
    state.record_roll(a, 10);
    assert_eq!(state.current_turn(), Some(b));
    state.record_roll(b, 3);
    // Rotation ignores frame boundaries: a strike does not keep the turn.
    assert_eq!(state.current_turn(), Some(a));
}

#[test]
fn unknown_player_roll_is_a_silent_noop() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    state.record_roll(999, 5);
    assert!(state.players()[0].rolls.is_empty());
    // Turn does not advance for a roll that was never recorded.
    assert_eq!(state.current_turn(), Some(a));
}

#[test]
fn removing_the_turn_holder_resets_the_turn() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    let b = state.add_player("B").id;
    let c = state.add_player("C").id;

    state.record_roll(a, 4); // turn now on b
    assert_eq!(state.current_turn(), Some(b));
    state.remove_player(b);
    assert_eq!(state.current_turn(), Some(a));
    let _ = c;
}

#[test]
fn removing_an_earlier_player_keeps_the_turn_holder() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    let b = state.add_player("B").id;
    let c = state.add_player("C").id;

    state.record_roll(a, 4);
    state.record_roll(b, 4); // turn now on c
    assert_eq!(state.current_turn(), Some(c));
    state.remove_player(a);
    assert_eq!(state.current_turn(), Some(c));
}

#[test]
fn removing_the_last_player_clamps_the_turn() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    let b = state.add_player("B").id;

    state.record_roll(a, 4); // turn index 1 -> b
    state.remove_player(b);
    assert_eq!(state.current_turn(), Some(a));

    state.remove_player(a);
    assert_eq!(state.current_turn(), None);
}

#[test]
fn remove_unknown_player_is_a_noop() {
    let mut state = GameState::new();
    state.add_player("A");
    state.remove_player(42);
    assert_eq!(state.players().len(), 1);
}

#[test]
fn reset_wipes_players_and_counters() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    state.record_roll(a, 7);
    state.reset();

    assert!(state.players().is_empty());
    assert_eq!(state.current_turn(), None);
    // Id counter restarts as well.
    assert_eq!(state.add_player("B").id, 1);
}

#[test]
fn rolls_are_append_only_per_player() {
    let mut state = GameState::new();
    let a = state.add_player("A").id;
    let b = state.add_player("B").id;

    state.record_roll(a, 10);
    state.record_roll(b, 3);
    state.record_roll(a, 5);

    assert_eq!(state.players()[0].rolls, vec![10, 5]);
    assert_eq!(state.players()[1].rolls, vec![3]);
}

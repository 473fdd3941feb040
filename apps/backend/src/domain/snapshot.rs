//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::completion::{is_finished, winners};
use crate::domain::frames::Frame;
use crate::domain::scoring::score_and_segment;
use crate::domain::state::{GameState, PlayerId};

/// Derived view of one player: score and frames are recomputed from the roll
/// sequence on every call, never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub score: u16,
    pub frames: Vec<Frame>,
    pub rolls: Vec<u8>,
}

/// Aggregate view of a game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub game_finished: bool,
    /// Ids of all players sharing the maximum score. Empty until every
    /// player's tenth frame is complete; ties are preserved.
    pub winners: Vec<PlayerId>,
    pub current_turn: Option<PlayerId>,
}

/// Entry point: derive the full snapshot for one game instance.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let records = state.players();

    let mut players = Vec::with_capacity(records.len());
    let mut game_finished = !records.is_empty();
    for record in records {
        let (score, frames) = score_and_segment(&record.rolls);
        game_finished = game_finished && is_finished(&frames);
        players.push(PlayerSnapshot {
            id: record.id,
            name: record.name.clone(),
            score,
            frames,
            rolls: record.rolls.clone(),
        });
    }

    let scores: Vec<(PlayerId, u16)> = players.iter().map(|p| (p.id, p.score)).collect();
    let winners = winners(&scores, game_finished);

    GameSnapshot {
        players,
        game_finished,
        winners,
        current_turn: state.current_turn(),
    }
}

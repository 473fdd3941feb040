//! Player registry and turn rotation for one game instance.
//!
//! `GameState` is an owned value held by the service layer; there is no
//! shared singleton. The only durable per-player state is the append-only
//! roll sequence. Frames and scores are always re-derived from it on query.

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGameRecord {
    pub id: PlayerId,
    pub name: String,
    /// Pin counts in throw order. Appended one at a time, never edited.
    pub rolls: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<PlayerGameRecord>,
    next_player_id: PlayerId,
    /// Index into `players` of whoever throws next. Advances by one after
    /// every recorded roll regardless of frame boundaries (simplified
    /// rotation, not real lane order).
    turn_index: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            next_player_id: 1,
            turn_index: 0,
        }
    }

    pub fn players(&self) -> &[PlayerGameRecord] {
        &self.players
    }

    /// Register a player under a fresh, monotonically increasing id.
    /// Blank or whitespace-only names get a generated placeholder.
    pub fn add_player(&mut self, name: &str) -> PlayerGameRecord {
        let id = self.next_player_id;
        self.next_player_id += 1;

        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("Player {id}")
        } else {
            trimmed.to_string()
        };

        let record = PlayerGameRecord {
            id,
            name,
            rolls: Vec::new(),
        };
        self.players.push(record.clone());
        record
    }

    /// Delete a player's record. Unknown ids are a no-op. If the removed
    /// player held the turn slot the turn resets to the first player;
    /// removals earlier in the order shift the index so the same player
    /// keeps the turn.
    pub fn remove_player(&mut self, id: PlayerId) {
        let Some(pos) = self.players.iter().position(|p| p.id == id) else {
            return;
        };
        self.players.remove(pos);

        if pos == self.turn_index || self.turn_index >= self.players.len() {
            self.turn_index = 0;
        } else if pos < self.turn_index {
            self.turn_index -= 1;
        }
    }

    /// Append one roll to the player's sequence and advance the turn.
    /// Unknown ids are silently ignored; pin-range validation happens at the
    /// request boundary, not here.
    pub fn record_roll(&mut self, id: PlayerId, pins: u8) {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return;
        };
        player.rolls.push(pins);
        self.turn_index = (self.turn_index + 1) % self.players.len();
    }

    /// Id of the player holding the turn slot, if any players remain.
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.players.get(self.turn_index).map(|p| p.id)
    }

    /// Discard all players and restart id and turn counters.
    pub fn reset(&mut self) {
        self.players.clear();
        self.next_player_id = 1;
        self.turn_index = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

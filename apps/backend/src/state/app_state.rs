use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::domain::GameState;

/// Application state containing shared resources.
///
/// Games live behind distinct identifiers; DashMap's per-entry locking gives
/// each game instance single-writer discipline. Handlers must not hold an
/// entry guard across an await point.
#[derive(Debug)]
pub struct AppState {
    games: DashMap<i64, GameState>,
    next_game_id: AtomicI64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_game_id: AtomicI64::new(1),
        }
    }

    /// Register a fresh game instance and return its id.
    pub fn create_game(&self) -> i64 {
        let id = self.next_game_id.fetch_add(1, Ordering::Relaxed);
        self.games.insert(id, GameState::new());
        id
    }

    pub fn game_exists(&self, id: i64) -> bool {
        self.games.contains_key(&id)
    }

    /// Read access to one game. Returns None when the id is unknown.
    pub fn with_game<R>(&self, id: i64, f: impl FnOnce(&GameState) -> R) -> Option<R> {
        self.games.get(&id).map(|game| f(&game))
    }

    /// Exclusive access to one game. Returns None when the id is unknown.
    pub fn with_game_mut<R>(&self, id: i64, f: impl FnOnce(&mut GameState) -> R) -> Option<R> {
        self.games.get_mut(&id).map(|mut game| f(&mut game))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Game-related HTTP routes.
//!
//! The handlers own no game logic: they validate input at the request
//! boundary, take the game's entry lock through `AppState`, and delegate to
//! the domain layer. Registry mutations on unknown player ids are deliberate
//! no-ops (see the domain layer); only out-of-range pin counts are rejected.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::rules::pin_count_is_valid;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::game_id::GameId;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct GameCreatedResponse {
    game_id: i64,
}

#[derive(Debug, Default, Deserialize)]
struct AddPlayerRequest {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Serialize)]
struct PlayerCreatedResponse {
    id: PlayerId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RollRequest {
    player_id: PlayerId,
    /// Deserialized wide so out-of-range values reach our validation
    /// instead of failing JSON decoding.
    pins: i64,
}

/// POST /api/games
///
/// Creates a fresh game instance and returns its identifier.
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game_id = app_state.create_game();
    info!(game_id, "game created");
    Ok(HttpResponse::Created().json(GameCreatedResponse { game_id }))
}

/// GET /api/games/{game_id}/state
///
/// Returns the full derived snapshot: per-player score, frame breakdown and
/// roll history, plus completion flag, winners and the current turn.
async fn get_state(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let snap = app_state
        .with_game(game_id.0, snapshot)
        .ok_or_else(|| game_not_found(game_id.0))?;
    Ok(web::Json(snap))
}

/// POST /api/games/{game_id}/players
///
/// Registers a player; blank names are replaced with a placeholder.
async fn add_player(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: web::Json<AddPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let record = app_state
        .with_game_mut(game_id.0, |game| game.add_player(&body.name))
        .ok_or_else(|| game_not_found(game_id.0))?;

    info!(game_id = game_id.0, player_id = record.id, "player added");
    Ok(HttpResponse::Created().json(PlayerCreatedResponse {
        id: record.id,
        name: record.name,
    }))
}

/// DELETE /api/games/{game_id}/players/{player_id}
///
/// Removes a player's record. Unknown player ids succeed as no-ops.
async fn remove_player(
    game_id: GameId,
    path: web::Path<(i64, PlayerId)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (_, player_id) = path.into_inner();
    app_state
        .with_game_mut(game_id.0, |game| game.remove_player(player_id))
        .ok_or_else(|| game_not_found(game_id.0))?;

    info!(game_id = game_id.0, player_id, "player removed");
    Ok(HttpResponse::Ok().finish())
}

/// POST /api/games/{game_id}/rolls
///
/// Records one roll for a player. Pin counts outside 0..=10 are rejected
/// here, before the registry is touched; unknown player ids are silently
/// ignored by the registry layer.
async fn record_roll(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: web::Json<RollRequest>,
) -> Result<HttpResponse, AppError> {
    let pins = u8::try_from(body.pins)
        .ok()
        .filter(|&p| pin_count_is_valid(p))
        .ok_or_else(|| {
            AppError::invalid(
                ErrorCode::InvalidPins,
                format!("Pins must be between 0 and 10, got: {}", body.pins),
            )
        })?;

    app_state
        .with_game_mut(game_id.0, |game| game.record_roll(body.player_id, pins))
        .ok_or_else(|| game_not_found(game_id.0))?;

    Ok(HttpResponse::Ok().finish())
}

/// POST /api/games/{game_id}/reset
///
/// Discards all players and counters of this game instance.
async fn reset_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .with_game_mut(game_id.0, |game| game.reset())
        .ok_or_else(|| game_not_found(game_id.0))?;

    info!(game_id = game_id.0, "game reset");
    Ok(HttpResponse::Ok().finish())
}

fn game_not_found(game_id: i64) -> AppError {
    AppError::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}/state").route(web::get().to(get_state)));
    cfg.service(web::resource("/{game_id}/players").route(web::post().to(add_player)));
    cfg.service(
        web::resource("/{game_id}/players/{player_id}").route(web::delete().to(remove_player)),
    );
    cfg.service(web::resource("/{game_id}/rolls").route(web::post().to(record_roll)));
    cfg.service(web::resource("/{game_id}/reset").route(web::post().to(reset_game)));
}

use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes for the server and for tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}

//! HTTP surface: a JSON API per entity plus the computed leaderboard.
//!
//! Mutations are admin-gated except score submission and registration
//! creation. Repository `false` results surface as 404 on update/delete and
//! 500 on create; everything the fail-soft data layer swallowed on the read
//! side arrives as an ordinary 200 with empty data.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod courses;
pub mod leaderboard;
pub mod players;
pub mod registrations;
pub mod scores;
pub mod tournaments;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/players",
            get(players::list)
                .post(players::create)
                .patch(players::update)
                .delete(players::remove),
        )
        .route(
            "/api/tournaments",
            get(tournaments::list)
                .post(tournaments::create)
                .patch(tournaments::update)
                .delete(tournaments::remove),
        )
        .route(
            "/api/courses",
            get(courses::list)
                .post(courses::create)
                .patch(courses::update)
                .delete(courses::remove),
        )
        .route(
            "/api/registrations",
            get(registrations::list)
                .post(registrations::create)
                .patch(registrations::update)
                .delete(registrations::remove),
        )
        .route(
            "/api/scores",
            get(scores::by_tournament).post(scores::submit),
        )
        .route("/api/leaderboard", get(leaderboard::standings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `?id=` query for delete endpoints.
#[derive(serde::Deserialize)]
pub(crate) struct IdQuery {
    pub id: Option<String>,
}

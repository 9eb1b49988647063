use axum::extract::{Json, Query, State};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    auth::AdminUser,
    records::players::{Player, PlayerPatch},
    routes::IdQuery,
    state::AppState,
    util_resp::{
        StandardResponse, bad_request, err_not_found, server_error, success,
    },
};

pub async fn list(State(state): State<AppState>) -> StandardResponse {
    success(&state.db.players.get_all().await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    name: String,
    #[serde(default)]
    line_user_id: String,
    #[serde(default)]
    handicap: f64,
    #[serde(default)]
    team: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
}

pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<NewPlayer>,
) -> StandardResponse {
    if body.name.is_empty() {
        return bad_request("player name is required");
    }
    if body.handicap < 0.0 {
        return bad_request("handicap must not be negative");
    }

    let player = Player {
        id: Uuid::now_v7().to_string(),
        name: body.name,
        line_user_id: body.line_user_id,
        handicap: body.handicap,
        team: body.team,
        email: body.email,
        phone: body.phone,
    };
    if !state.db.players.add(&player).await {
        return server_error("failed to store player");
    }
    success(&player)
}

#[derive(Deserialize)]
pub struct UpdatePlayer {
    id: String,
    #[serde(flatten)]
    patch: PlayerPatch,
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<UpdatePlayer>,
) -> StandardResponse {
    if body.id.is_empty() {
        return bad_request("player id is required");
    }
    if body.patch.handicap.is_some_and(|h| h < 0.0) {
        return bad_request("handicap must not be negative");
    }
    if state.db.players.update(&body.id, body.patch).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("player")
    }
}

pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> StandardResponse {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return bad_request("player id is required");
    };
    if state.db.players.delete(&id).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("player")
    }
}

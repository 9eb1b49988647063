use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::{
    leaderboard::ROUND_HOLES,
    records::scores::Score,
    state::AppState,
    util_resp::{StandardResponse, bad_request, server_error, success},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresQuery {
    tournament_id: Option<String>,
}

pub async fn by_tournament(
    State(state): State<AppState>,
    Query(query): Query<ScoresQuery>,
) -> StandardResponse {
    let Some(tid) = query.tournament_id.filter(|t| !t.is_empty()) else {
        return bad_request("tournament id is required");
    };
    success(&state.db.scores.by_tournament(&tid).await)
}

/// Open to any caller: players enter their own scores from the tee.
pub async fn submit(
    State(state): State<AppState>,
    Json(score): Json<Score>,
) -> StandardResponse {
    if score.tournament_id.is_empty() {
        return bad_request("tournament id is required");
    }
    if score.player_id.is_empty() {
        return bad_request("player id is required");
    }
    if score.hole > ROUND_HOLES {
        return bad_request("hole must be between 0 and 18");
    }

    if !state.db.scores.upsert(&score).await {
        return server_error("failed to store score");
    }
    success(&score)
}

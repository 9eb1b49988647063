use axum::extract::{Query, State};
use serde::Deserialize;

use crate::{
    leaderboard::{SortBy, SortOrder, compute, rank},
    state::AppState,
    util_resp::{StandardResponse, bad_request, success},
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardQuery {
    tournament_id: Option<String>,
    sort_by: SortBy,
    order: SortOrder,
}

pub async fn standings(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> StandardResponse {
    let Some(tid) = query.tournament_id.filter(|t| !t.is_empty()) else {
        return bad_request("tournament id is required");
    };

    let players = state.db.players.get_all().await;
    let scores = state.db.scores.by_tournament(&tid).await;
    let board = rank(compute(&players, &scores), query.sort_by, query.order);
    success(&board)
}

use axum::extract::{Json, Query, State};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    auth::AdminUser,
    records::tournaments::{Tournament, TournamentPatch, TournamentStatus},
    routes::IdQuery,
    state::AppState,
    util_resp::{
        StandardResponse, bad_request, err_not_found, server_error, success,
    },
};

pub async fn list(State(state): State<AppState>) -> StandardResponse {
    success(&state.db.tournaments.get_all().await)
}

fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    name: String,
    date: String,
    course_id: String,
    #[serde(default)]
    status: TournamentStatus,
}

pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<NewTournament>,
) -> StandardResponse {
    if body.name.is_empty() {
        return bad_request("tournament name is required");
    }
    if !is_valid_date(&body.date) {
        return bad_request("date must be an ISO date (YYYY-MM-DD)");
    }

    let tournament = Tournament {
        id: Uuid::now_v7().to_string(),
        name: body.name,
        date: body.date,
        course_id: body.course_id,
        status: body.status,
    };
    if !state.db.tournaments.add(&tournament).await {
        return server_error("failed to store tournament");
    }
    success(&tournament)
}

#[derive(Deserialize)]
pub struct UpdateTournament {
    id: String,
    #[serde(flatten)]
    patch: TournamentPatch,
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateTournament>,
) -> StandardResponse {
    if body.id.is_empty() {
        return bad_request("tournament id is required");
    }
    if body.patch.date.as_deref().is_some_and(|d| !is_valid_date(d)) {
        return bad_request("date must be an ISO date (YYYY-MM-DD)");
    }
    if state.db.tournaments.update(&body.id, body.patch).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("tournament")
    }
}

pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> StandardResponse {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return bad_request("tournament id is required");
    };
    if state.db.tournaments.delete(&id).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("tournament")
    }
}

use axum::extract::{Json, Query, State};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    auth::AdminUser,
    records::registrations::{
        Registration, RegistrationPatch, RegistrationStatus,
    },
    routes::IdQuery,
    state::AppState,
    util_resp::{
        StandardResponse, bad_request, err_not_found, server_error, success,
    },
    validation::is_valid_email,
};

pub async fn list(State(state): State<AppState>) -> StandardResponse {
    success(&state.db.registrations.get_all().await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    #[serde(default)]
    tournament_id: String,
    #[serde(default)]
    player_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
}

/// Public submission: no admin gate, status always starts pending.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewRegistration>,
) -> StandardResponse {
    if body.tournament_id.is_empty() {
        return bad_request("tournament id is required");
    }
    if body.player_name.is_empty() {
        return bad_request("player name is required");
    }
    if !body.email.is_empty() && is_valid_email(&body.email).is_err() {
        return bad_request("invalid email");
    }

    let registration = Registration {
        id: Uuid::now_v7().to_string(),
        tournament_id: body.tournament_id,
        player_name: body.player_name,
        email: body.email,
        phone: body.phone,
        status: RegistrationStatus::Pending,
    };
    if !state.db.registrations.add(&registration).await {
        return server_error("failed to store registration");
    }
    success(&registration)
}

#[derive(Deserialize)]
pub struct UpdateRegistration {
    id: String,
    #[serde(flatten)]
    patch: RegistrationPatch,
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateRegistration>,
) -> StandardResponse {
    if body.id.is_empty() {
        return bad_request("registration id is required");
    }
    if state.db.registrations.update(&body.id, body.patch).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("registration")
    }
}

pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> StandardResponse {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return bad_request("registration id is required");
    };
    if state.db.registrations.delete(&id).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("registration")
    }
}

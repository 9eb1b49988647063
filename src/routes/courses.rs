use axum::extract::{Json, Query, State};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    auth::AdminUser,
    records::courses::{Course, CoursePatch},
    routes::IdQuery,
    state::AppState,
    util_resp::{
        StandardResponse, bad_request, err_not_found, server_error, success,
    },
};

pub async fn list(State(state): State<AppState>) -> StandardResponse {
    success(&state.db.courses.get_all().await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    name: String,
    pars: Vec<u32>,
    #[serde(default)]
    distances: Vec<u32>,
}

pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<NewCourse>,
) -> StandardResponse {
    if body.name.is_empty() {
        return bad_request("course name is required");
    }

    let course = Course {
        id: Uuid::now_v7().to_string(),
        name: body.name,
        pars: body.pars,
        distances: body.distances,
    };
    if !state.db.courses.add(&course).await {
        return server_error("failed to store course");
    }
    success(&course)
}

#[derive(Deserialize)]
pub struct UpdateCourse {
    id: String,
    #[serde(flatten)]
    patch: CoursePatch,
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateCourse>,
) -> StandardResponse {
    if body.id.is_empty() {
        return bad_request("course id is required");
    }
    if state.db.courses.update(&body.id, body.patch).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("course")
    }
}

pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> StandardResponse {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return bad_request("course id is required");
    };
    if state.db.courses.delete(&id).await {
        success(&json!({ "success": true }))
    } else {
        err_not_found("course")
    }
}

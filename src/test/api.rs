//! API tests over the assembled router, driven through `axum_test`.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};

use crate::{
    auth::ADMIN_HEADER, config::Config, routes::create_app, state::AppState,
    store::memory::MemorySheets,
};

const ADMIN_ID: &str = "U-admin";

fn server() -> TestServer {
    let config = Config {
        bind: "127.0.0.1:0".to_string(),
        admin_user_ids: vec![ADMIN_ID.to_string()],
    };
    let state = AppState::new(Arc::new(MemorySheets::default()), config);
    TestServer::new(create_app(state)).expect("router should mount")
}

fn admin_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(ADMIN_HEADER),
        HeaderValue::from_static(ADMIN_ID),
    )
}

async fn create_player(server: &TestServer, name: &str, handicap: f64) -> String {
    let (header, value) = admin_header();
    let response = server
        .post("/api/players")
        .add_header(header, value)
        .json(&json!({ "name": name, "handicap": handicap }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["id"]
        .as_str()
        .expect("created player should carry an id")
        .to_string()
}

async fn submit_score(
    server: &TestServer,
    tid: &str,
    pid: &str,
    hole: u32,
    strokes: u32,
) {
    let response = server
        .post("/api/scores")
        .json(&json!({
            "tournamentId": tid,
            "playerId": pid,
            "hole": hole,
            "strokes": strokes,
            "par": 4,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn mutations_require_an_allow_listed_identity() {
    let server = server();

    let body = json!({ "name": "Alice", "handicap": 10 });

    let response = server.post("/api/players").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .post("/api/players")
        .add_header(
            HeaderName::from_static(ADMIN_HEADER),
            HeaderValue::from_static("U-not-admin"),
        )
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Reads stay open.
    let response = server.get("/api/players").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>(), Vec::<Value>::new());
}

#[tokio::test]
async fn admin_can_create_patch_and_delete_players() {
    let server = server();
    let id = create_player(&server, "Alice", 12.0).await;

    let (header, value) = admin_header();
    let response = server
        .patch("/api/players")
        .add_header(header, value)
        .json(&json!({ "id": id, "handicap": 9.0, "team": "Red" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let players = server.get("/api/players").await.json::<Vec<Value>>();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["name"], "Alice");
    assert_eq!(players[0]["handicap"], 9.0);
    assert_eq!(players[0]["team"], "Red");

    let (header, value) = admin_header();
    let response = server
        .delete("/api/players")
        .add_header(header, value)
        .add_query_param("id", &id)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(server.get("/api/players").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn patching_an_unknown_player_is_not_found() {
    let server = server();
    let (header, value) = admin_header();
    let response = server
        .patch("/api/players")
        .add_header(header, value)
        .json(&json!({ "id": "ghost", "name": "Nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn registration_is_open_but_needs_a_tournament() {
    let server = server();

    let response = server.post("/api/registrations").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/registrations")
        .json(&json!({
            "tournamentId": "t1",
            "playerName": "Alice",
            "email": "alice@example.com",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "pending");

    let regs = server.get("/api/registrations").await.json::<Vec<Value>>();
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0]["playerName"], "Alice");
}

#[tokio::test]
async fn tournament_dates_are_validated() {
    let server = server();
    let (header, value) = admin_header();
    let response = server
        .post("/api/tournaments")
        .add_header(header, value)
        .json(&json!({
            "name": "Spring Open",
            "date": "sometime in May",
            "courseId": "c1",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let (header, value) = admin_header();
    let response = server
        .post("/api/tournaments")
        .add_header(header, value)
        .json(&json!({
            "name": "Spring Open",
            "date": "2026-05-01",
            "courseId": "c1",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "upcoming");
}

#[tokio::test]
async fn score_queries_need_a_tournament_id() {
    let server = server();
    let response = server.get("/api/scores").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn score_submission_is_open_and_upserts() {
    let server = server();

    submit_score(&server, "t1", "p1", 1, 5).await;
    submit_score(&server, "t1", "p1", 1, 4).await;

    let scores = server
        .get("/api/scores")
        .add_query_param("tournamentId", "t1")
        .await
        .json::<Vec<Value>>();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["strokes"], 4);
}

#[tokio::test]
async fn leaderboard_prorates_handicap_and_skips_non_scorers() {
    let server = server();
    let p1 = create_player(&server, "Alice", 10.0).await;
    let p2 = create_player(&server, "Bob", 0.0).await;

    // Bob holds only a sentinel row; Alice cards 42 over the front nine.
    submit_score(&server, "t1", &p2, 0, 0).await;
    let strokes = [5, 5, 5, 5, 5, 5, 4, 4, 4];
    for (hole, s) in strokes.iter().enumerate() {
        submit_score(&server, "t1", &p1, hole as u32 + 1, *s).await;
    }

    let board = server
        .get("/api/leaderboard")
        .add_query_param("tournamentId", "t1")
        .await
        .json::<Vec<Value>>();

    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["playerName"], "Alice");
    assert_eq!(board[0]["gross"], 42);
    assert_eq!(board[0]["thru"], 9);
    // 42 - round(10 * 9/18) = 37
    assert_eq!(board[0]["net"], 37);
}

#[tokio::test]
async fn leaderboard_order_toggle_reverses_the_board() {
    let server = server();
    for (name, gross) in [("Alice", 5), ("Bob", 3), ("Carol", 4)] {
        let id = create_player(&server, name, 0.0).await;
        submit_score(&server, "t1", &id, 1, gross).await;
    }

    let names = |board: Vec<Value>| -> Vec<String> {
        board
            .iter()
            .map(|e| e["playerName"].as_str().unwrap().to_string())
            .collect()
    };

    let asc = server
        .get("/api/leaderboard")
        .add_query_param("tournamentId", "t1")
        .add_query_param("sortBy", "gross")
        .add_query_param("order", "asc")
        .await
        .json::<Vec<Value>>();
    let desc = server
        .get("/api/leaderboard")
        .add_query_param("tournamentId", "t1")
        .add_query_param("sortBy", "gross")
        .add_query_param("order", "desc")
        .await
        .json::<Vec<Value>>();

    let mut reversed = names(asc);
    assert_eq!(reversed, ["Bob", "Carol", "Alice"]);
    reversed.reverse();
    assert_eq!(names(desc), reversed);
}

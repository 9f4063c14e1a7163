//! End-to-end tests for the HTTP API.
//!
//! Each test drives the axum router directly with `oneshot`, backed by a
//! fresh in-memory SQLite database.

mod common;

use armory_adapter::controller::http::dto::{
    CreateLoadoutResponse, HealthResponse, ListAgentsResponse, ListLoadoutsResponse,
    ListWeaponsResponse, StatsResponse,
};
use armory_adapter::controller::http::middleware::REQUEST_ID_HEADER;
use armory_adapter::controller::http::ErrorResponse;
use armory_adapter::{create_router, ApiServer, ApiServerConfig, InMemoryLoadoutRepository};
use armory_domain::{Loadout, LoadoutId, LoadoutRepository, NewLoadout, OwnerId, RepositoryError};
use axum::http::{header, StatusCode};
use common::*;
use tower::ServiceExt;

// =============================================================================
// Health & stats
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, HealthResponse) = send_request(app, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.status, "healthy");
    assert_eq!(body.message, "Armory API is running");
    assert_eq!(body.version, "1.0.0");
}

#[tokio::test]
async fn test_stats_with_empty_store() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, StatsResponse) = send_request(app, get_request("/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total_agents, 4);
    assert_eq!(body.total_weapons, 6);
    assert_eq!(body.total_loadouts, 0);
    assert_eq!(body.popular_agent, "Jett");
}

#[tokio::test]
async fn test_stats_counts_every_owner() {
    let (app, _) = create_test_router().await;

    for token in ["alice", "bob"] {
        let (status, _): (_, CreateLoadoutResponse) = send_request(
            app.clone(),
            post_json_request("/loadouts", r#"{"agent":"sage"}"#, Some(token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body): (_, StatsResponse) = send_request(app, get_request("/stats")).await;
    assert_eq!(body.total_loadouts, 2);
}

/// Store whose every call fails.
#[derive(Clone)]
struct BrokenRepository;

impl LoadoutRepository for BrokenRepository {
    async fn create(&self, _: &NewLoadout) -> Result<LoadoutId, RepositoryError> {
        Err(RepositoryError::persistence("connection refused (os error 111)"))
    }

    async fn list_by_owner(&self, _: &OwnerId) -> Result<Vec<Loadout>, RepositoryError> {
        Err(RepositoryError::persistence("connection refused (os error 111)"))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::persistence("connection refused (os error 111)"))
    }
}

#[tokio::test]
async fn test_stats_degrade_to_zero_when_store_fails() {
    let app = create_router(create_test_state(BrokenRepository));

    let (status, body): (_, StatsResponse) = send_request(app, get_request("/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total_loadouts, 0);
    assert_eq!(body.total_agents, 4);
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_list_all_agents() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, ListAgentsResponse) = send_request(app, get_request("/agents")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total, 4);
    let names: Vec<_> = body.agents.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Jett", "Sova", "Sage", "Omen"]);
    assert_eq!(body.agents[0].abilities.len(), 4);
    assert!(body.agents[0].image_url.starts_with("https://"));
}

#[tokio::test]
async fn test_agents_filtered_by_role_and_search() {
    let (app, _) = create_test_router().await;

    let (_, body): (_, ListAgentsResponse) =
        send_request(app.clone(), get_request("/agents?role=Initiator")).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.agents[0].id, "sova");

    let (_, body): (_, ListAgentsResponse) =
        send_request(app.clone(), get_request("/agents?search=TEAM")).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.agents[0].id, "sage");

    let (_, body): (_, ListAgentsResponse) =
        send_request(app, get_request("/agents?role=initiator")).await;
    assert_eq!(body.total, 0);
    assert!(body.agents.is_empty());
}

#[tokio::test]
async fn test_weapons_filtered_by_type_cost_and_search() {
    let (app, _) = create_test_router().await;

    let (_, body): (_, ListWeaponsResponse) =
        send_request(app.clone(), get_request("/weapons?type=Primary&maxCost=2900")).await;
    let ids: Vec<_> = body.weapons.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["spectre", "vandal", "phantom"]);
    assert_eq!(body.total, 3);

    let (_, body): (_, ListWeaponsResponse) =
        send_request(app.clone(), get_request("/weapons?maxCost=0")).await;
    assert_eq!(body.total, 6);

    let (_, body): (_, ListWeaponsResponse) =
        send_request(app, get_request("/weapons?search=op")).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.weapons[0].category, "Primary");
    assert_eq!(body.weapons[0].cost, 4700);
}

#[tokio::test]
async fn test_empty_parameters_mean_no_filter() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, ListWeaponsResponse) =
        send_request(app.clone(), get_request("/weapons?type=&maxCost=&search=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total, 6);

    let (status, body): (_, ListAgentsResponse) =
        send_request(app, get_request("/agents?role=&search=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total, 4);
}

#[tokio::test]
async fn test_malformed_max_cost_is_bad_request() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, ErrorResponse) =
        send_request(app, get_request("/weapons?maxCost=cheap")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "BAD_REQUEST");
}

// =============================================================================
// Loadouts
// =============================================================================

#[tokio::test]
async fn test_loadouts_require_credential() {
    let (app, repository) = create_test_router().await;

    let (status, body): (_, ErrorResponse) = send_request(
        app.clone(),
        post_json_request("/loadouts", r#"{"agent":"jett"}"#, None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.code, "UNAUTHENTICATED");

    let (status, _): (_, ErrorResponse) =
        send_request(app.clone(), authed_get_request("/loadouts", "   ")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _): (_, ErrorResponse) = send_request(app, get_request("/loadouts")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Nothing reached the store
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_bearer_scheme_without_token_is_rejected() {
    let (app, repository) = create_test_router().await;

    for value in ["Bearer", "bearer", "Bearer   "] {
        let mut request = post_json_request("/loadouts", r#"{"agent":"jett"}"#, None);
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, value.parse().unwrap());

        let (status, body): (_, ErrorResponse) = send_request(app.clone(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "credential {:?}", value);
        assert_eq!(body.code, "UNAUTHENTICATED");
    }

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_then_list_normalizes_missing_weapons() {
    let (app, _) = create_test_router().await;

    let (status, created): (_, CreateLoadoutResponse) = send_request(
        app.clone(),
        post_json_request("/loadouts", r#"{"agent":"jett","primary":"vandal"}"#, Some("AbC123")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.message, "Loadout saved successfully");

    let response = app
        .oneshot(authed_get_request("/loadouts", "abc123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    // Raw JSON: the empty slot is "" and never null
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw["loadouts"][0]["sidearm"], "");

    let body: ListLoadoutsResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.total, 1);
    let loadout = &body.loadouts[0];
    assert_eq!(loadout.id, created.id);
    assert_eq!(loadout.user_id, "abc123");
    assert_eq!(loadout.agent, "jett");
    assert_eq!(loadout.primary, "vandal");
    assert_eq!(loadout.sidearm, "");
}

#[tokio::test]
async fn test_owner_without_loadouts_gets_empty_list() {
    let (app, _) = create_test_router().await;

    let _: (_, CreateLoadoutResponse) = send_request(
        app.clone(),
        post_json_request("/loadouts", r#"{"agent":"omen"}"#, Some("someone")),
    )
    .await;

    let (status, body): (_, ListLoadoutsResponse) =
        send_request(app, authed_get_request("/loadouts", "newcomer")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total, 0);
    assert!(body.loadouts.is_empty());
}

#[tokio::test]
async fn test_successive_creates_list_newest_first() {
    let (app, _) = create_test_router().await;

    let mut ids = Vec::new();
    for agent in ["jett", "sova", "sage"] {
        let (_, created): (_, CreateLoadoutResponse) = send_request(
            app.clone(),
            post_json_request(
                "/loadouts",
                &format!(r#"{{"agent":"{}"}}"#, agent),
                Some("player"),
            ),
        )
        .await;
        ids.push(created.id);
    }

    let (_, body): (_, ListLoadoutsResponse) =
        send_request(app, authed_get_request("/loadouts", "player")).await;

    let listed: Vec<_> = body.loadouts.iter().map(|l| l.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);
    assert!(body.loadouts[0].created >= body.loadouts[2].created);
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let (app, _) = create_test_router().await;

    let (status, body): (_, ErrorResponse) = send_request(
        app,
        post_json_request("/loadouts", "{not json", Some("player")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "BAD_REQUEST");
}

#[tokio::test]
async fn test_store_failure_does_not_leak_internals() {
    let app = create_router(create_test_state(BrokenRepository));

    let (status, body): (_, ErrorResponse) = send_request(
        app.clone(),
        post_json_request("/loadouts", r#"{"agent":"jett"}"#, Some("player")),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "failed to create loadout");
    assert!(!body.message.contains("os error"));

    let (status, body): (_, ErrorResponse) =
        send_request(app, authed_get_request("/loadouts", "player")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "failed to get loadouts");
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let state = create_test_state(InMemoryLoadoutRepository::new());
    let app = ApiServer::new(state, ApiServerConfig::default()).router();

    let mut request = get_request("/health");
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, "req-42".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");

    let response = app.oneshot(get_request("/health")).await.unwrap();
    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_in_memory_store_behind_full_stack() {
    let state = create_test_state(InMemoryLoadoutRepository::new());
    let app = ApiServer::new(state, ApiServerConfig::default()).router();

    let (status, _): (_, CreateLoadoutResponse) = send_request(
        app.clone(),
        post_json_request(
            "/loadouts",
            r#"{"agent":"sage","primary":"phantom","sidearm":"sheriff"}"#,
            Some("Player"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body): (_, ListLoadoutsResponse) =
        send_request(app, authed_get_request("/loadouts", "player")).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.loadouts[0].sidearm, "sheriff");
}

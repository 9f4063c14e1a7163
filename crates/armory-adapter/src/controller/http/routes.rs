//! Route table and request handlers.
//!
//! Handlers only translate: parameters in, use case call, DTO out.

use armory_domain::{AgentQuery, LoadoutRepository, WeaponQuery};
use armory_usecase::CreateLoadout;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};

use super::dto::{
    AgentParams, AgentResponse, CreateLoadoutRequest, CreateLoadoutResponse, HealthResponse,
    ListAgentsResponse, ListLoadoutsResponse, ListWeaponsResponse, LoadoutResponse,
    StatsResponse, WeaponParams, WeaponResponse,
};
use super::error::ApiError;
use super::extractors::AuthenticatedOwner;
use super::state::AppState;

/// Creates the API router without any middleware.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: LoadoutRepository + Clone + 'static,
{
    Router::new()
        .route("/agents", get(list_agents::<R>))
        .route("/weapons", get(list_weapons::<R>))
        .route(
            "/loadouts",
            get(list_loadouts::<R>).post(create_loadout::<R>),
        )
        .route("/health", get(health_check))
        .route("/stats", get(get_stats::<R>))
        .with_state(state)
}

/// `GET /agents?role=&search=`
async fn list_agents<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<AgentParams>, QueryRejection>,
) -> Result<Json<ListAgentsResponse>, ApiError> {
    let Query(params) = params?;
    let query = AgentQuery {
        role: &params.role,
        search: &params.search,
    };

    let listing = armory_usecase::list_agents(&state.catalog, &query);
    Ok(Json(ListAgentsResponse {
        agents: listing.agents.into_iter().map(AgentResponse::from).collect(),
        total: listing.total,
    }))
}

/// `GET /weapons?type=&maxCost=&search=`
async fn list_weapons<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<WeaponParams>, QueryRejection>,
) -> Result<Json<ListWeaponsResponse>, ApiError> {
    let Query(params) = params?;
    let query = WeaponQuery {
        category: &params.category,
        max_cost: params.max_cost,
        search: &params.search,
    };

    let listing = armory_usecase::list_weapons(&state.catalog, &query);
    Ok(Json(ListWeaponsResponse {
        weapons: listing.weapons.into_iter().map(WeaponResponse::from).collect(),
        total: listing.total,
    }))
}

/// `POST /loadouts` (authenticated)
async fn create_loadout<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    body: Result<Json<CreateLoadoutRequest>, JsonRejection>,
) -> Result<Json<CreateLoadoutResponse>, ApiError>
where
    R: LoadoutRepository,
{
    let Json(body) = body?;
    let created = state
        .loadouts
        .create_loadout(
            &owner,
            CreateLoadout {
                agent: body.agent,
                primary: body.primary,
                sidearm: body.sidearm,
            },
        )
        .await?;

    Ok(Json(CreateLoadoutResponse {
        id: created.id.value(),
        message: created.message.to_string(),
    }))
}

/// `GET /loadouts` (authenticated)
async fn list_loadouts<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> Result<Json<ListLoadoutsResponse>, ApiError>
where
    R: LoadoutRepository,
{
    let listing = state.loadouts.list_loadouts(&owner).await?;

    Ok(Json(ListLoadoutsResponse {
        loadouts: listing.loadouts.iter().map(LoadoutResponse::from).collect(),
        total: listing.total,
    }))
}

/// `GET /health`
async fn health_check() -> Json<HealthResponse> {
    Json(armory_usecase::health_check().into())
}

/// `GET /stats`
async fn get_stats<R>(State(state): State<AppState<R>>) -> Json<StatsResponse>
where
    R: LoadoutRepository,
{
    Json(state.stats.get_stats().await.into())
}

//! Handlers for the `/api/objects` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pokedex_core::error::CoreError;
use pokedex_core::pagination::Paginated;
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::{PokemonRequest, PokemonResponse};
use pokedex_db::repositories::PokemonRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

const ENTITY: &str = "Object";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Unwrap a JSON body, reporting malformed payloads as validation errors.
fn json_body(payload: Result<Json<PokemonRequest>, JsonRejection>) -> AppResult<PokemonRequest> {
    let Json(input) = payload.map_err(|e| CoreError::Validation(e.body_text()))?;
    Ok(input)
}

/// GET /api/objects?page=&size=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Paginated<PokemonResponse>>> {
    let Query(params) = params.map_err(|e| CoreError::Validation(e.body_text()))?;
    let page = params.into_page_request(state.config.default_page_size)?;

    let result = PokemonRepo::list_page(&state.pool, page).await?;
    Ok(Json(result))
}

/// GET /api/objects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PokemonResponse>> {
    let pokemon = PokemonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(pokemon))
}

/// POST /api/objects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PokemonRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PokemonResponse>)> {
    let input = json_body(payload)?;
    let pokemon = PokemonRepo::create(&state.pool, &input).await?;

    tracing::info!(pokemon_id = pokemon.id, identifier = %pokemon.identifier, "Object created");

    Ok((StatusCode::CREATED, Json(pokemon)))
}

/// PUT /api/objects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<PokemonRequest>, JsonRejection>,
) -> AppResult<Json<PokemonResponse>> {
    let input = json_body(payload)?;
    let pokemon = PokemonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(pokemon_id = id, "Object updated");

    Ok(Json(pokemon))
}

/// DELETE /api/objects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PokemonRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(pokemon_id = id, "Object deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

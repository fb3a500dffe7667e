use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::ApiError, response::success_to_api_response};

use super::model::{Client, ClientPayload};

fn validate(req: &ClientPayload) -> Result<(), ApiError> {
    if req.first_name.is_empty() || req.last_name.is_empty() || req.email.is_empty() {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let clients = Client::find_all(&state.pool).await?;
    Ok(success_to_api_response(clients))
}

#[axum::debug_handler]
pub async fn create_client(
    State(state): State<AppState>,
    Json(req): Json<ClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;

    let client = Client::create(&state.pool, req).await?;
    Ok((StatusCode::CREATED, success_to_api_response(client)))
}

#[axum::debug_handler]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let client = Client::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Client"))?;

    Ok(success_to_api_response(client))
}

#[axum::debug_handler]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;

    let client = Client::update(&state.pool, id, req)
        .await?
        .ok_or(ApiError::NotFound("Client"))?;

    Ok(success_to_api_response(client))
}

#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !Client::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound("Client"));
    }

    Ok(success_to_api_response(()))
}

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::ApiError, response::success_to_api_response};

use super::model::{Country, CountryPayload};

#[axum::debug_handler]
pub async fn list_countries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let countries = Country::find_all(&state.pool).await?;
    Ok(success_to_api_response(countries))
}

#[axum::debug_handler]
pub async fn create_country(
    State(state): State<AppState>,
    Json(req): Json<CountryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if req.country_name.is_empty() {
        return Err(ApiError::Validation("Country name is required".to_string()));
    }

    let country = Country::create(&state.pool, req).await?;
    Ok((StatusCode::CREATED, success_to_api_response(country)))
}

#[axum::debug_handler]
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let country = Country::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Country"))?;

    Ok(success_to_api_response(country))
}

#[axum::debug_handler]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CountryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if req.country_name.is_empty() {
        return Err(ApiError::Validation("Country name is required".to_string()));
    }

    let country = Country::update(&state.pool, id, req)
        .await?
        .ok_or(ApiError::NotFound("Country"))?;

    Ok(success_to_api_response(country))
}

#[axum::debug_handler]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !Country::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound("Country"));
    }

    Ok(success_to_api_response(()))
}

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{AppState, error::ApiError, response::success_to_api_response};

use super::model::Currency;

#[axum::debug_handler]
pub async fn list_currencies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let currencies = Currency::find_all(&state.pool).await?;
    Ok(success_to_api_response(currencies))
}

#[axum::debug_handler]
pub async fn get_currency(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let currency = Currency::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Currency"))?;

    Ok(success_to_api_response(currency))
}

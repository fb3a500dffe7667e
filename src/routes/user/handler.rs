use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::ApiError, response::success_to_api_response, utils::generate_token};

use super::model::{
    CreateUserRequest, LoginRequest, LoginResponse, Profile, UpdateUserRequest, User,
};

/// Credential check and token issuance. Unknown username and wrong password
/// produce the same 401 so callers cannot enumerate accounts.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and Password are required".to_string(),
        ));
    }

    let user = User::find_by_username(&state.pool, &req.username)
        .await?
        .ok_or(ApiError::Authentication)?;

    if !user.verify_login(&req.password).await? {
        return Err(ApiError::Authentication);
    }

    let token = generate_token(user.id, &user.username, &user.role, &state.config)?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: Profile::from(user),
    }))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.first_name.is_empty()
        || req.last_name.is_empty()
        || req.username.is_empty()
        || req.email.is_empty()
        || req.password.is_empty()
    {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }

    let user = User::create(&state.pool, req).await?;
    Ok((StatusCode::CREATED, success_to_api_response(user)))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = User::find_all(&state.pool).await?;
    Ok(success_to_api_response(users))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let user = User::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(success_to_api_response(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = User::update(&state.pool, id, req)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(success_to_api_response(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !User::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound("User"));
    }

    Ok(success_to_api_response(()))
}

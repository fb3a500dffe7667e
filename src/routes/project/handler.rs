use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::ApiError, response::success_to_api_response};

use super::model::{Project, ProjectInfo, ProjectPayload, ReportSummary};

#[axum::debug_handler]
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let projects = Project::find_all(&state.pool).await?;
    let infos = projects.into_iter().map(ProjectInfo::from).collect::<Vec<_>>();
    Ok(success_to_api_response(infos))
}

#[axum::debug_handler]
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if req.project_name.is_empty() {
        return Err(ApiError::Validation("Project name is required".to_string()));
    }

    let project = Project::create(&state.pool, req).await?;
    Ok((StatusCode::CREATED, success_to_api_response(project)))
}

#[axum::debug_handler]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let project = Project::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    Ok(success_to_api_response(ProjectInfo::from(project)))
}

#[axum::debug_handler]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if req.project_name.is_empty() {
        return Err(ApiError::Validation("Project name is required".to_string()));
    }

    let project = Project::update(&state.pool, id, req)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    Ok(success_to_api_response(ProjectInfo::from(project)))
}

#[axum::debug_handler]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if !Project::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound("Project"));
    }

    Ok(success_to_api_response(()))
}

/// Financial totals across every project, for the dashboard report chart.
#[axum::debug_handler]
pub async fn project_report(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let projects = Project::find_all(&state.pool).await?;
    Ok(success_to_api_response(ReportSummary::from_projects(
        &projects,
    )))
}

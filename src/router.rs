use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, error::ApiError, middleware, routes};

/// Builds the full API. `/users/login` is the only public route; everything
/// else sits behind the bearer-token middleware.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/users/login", post(routes::user::login));

    let protected_routes = Router::new()
        .route(
            "/users",
            get(routes::user::list_users).post(routes::user::create_user),
        )
        .route(
            "/users/{id}",
            get(routes::user::get_user)
                .patch(routes::user::update_user)
                .delete(routes::user::delete_user),
        )
        .route(
            "/clients",
            get(routes::client::list_clients).post(routes::client::create_client),
        )
        .route(
            "/clients/{id}",
            get(routes::client::get_client)
                .put(routes::client::update_client)
                .delete(routes::client::delete_client),
        )
        .route(
            "/projects",
            get(routes::project::list_projects).post(routes::project::create_project),
        )
        .route("/projects/report", get(routes::project::project_report))
        .route(
            "/projects/{id}",
            get(routes::project::get_project)
                .put(routes::project::update_project)
                .delete(routes::project::delete_project),
        )
        .route(
            "/countries",
            get(routes::country::list_countries).post(routes::country::create_country),
        )
        .route(
            "/countries/{id}",
            get(routes::country::get_country)
                .put(routes::country::update_country)
                .delete(routes::country::delete_country),
        )
        .route("/currencies", get(routes::currency::list_currencies))
        .route("/currencies/{id}", get(routes::currency::get_currency))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    let api = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(state)
}

/// Known path, wrong verb. Keeps the JSON error shape instead of axum's
/// bare 405.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

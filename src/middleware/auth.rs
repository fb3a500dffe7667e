use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{AppState, error::ApiError, utils::verify_token};

/// Checks the bearer token on every protected route and makes the decoded
/// claims available to handlers as a request extension. Requests are stateless:
/// the signature and expiry are all that is checked, there is no revocation
/// list to consult.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::InvalidToken)?;

    let claims =
        verify_token(bearer.token(), &state.config).map_err(|_| ApiError::InvalidToken)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

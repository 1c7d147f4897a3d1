use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use tracing::{error, warn};

use service::auth::{domain::LoginInput, errors::AuthError};

use crate::errors::Outcome;
use crate::observability::record_login;
use crate::state::AppState;

/// Plaintext credential check against the stored admin; nothing is issued on success.
#[utoipa::path(post, path = "/api/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Authentication Successful", body = crate::openapi::OutcomeDoc), (status = 400, description = "Missing username or password", body = crate::openapi::OutcomeDoc), (status = 401, description = "Invalid Credentials", body = crate::openapi::OutcomeDoc)))]
pub async fn login(State(state): State<AppState>, Json(input): Json<LoginInput>) -> Response {
    match state.auth.login(input).await {
        Ok(_) => {
            record_login("success");
            Outcome::ok("Authentication Successful").into_response()
        }
        Err(AuthError::Unauthorized) => {
            record_login("rejected");
            Outcome::fail(StatusCode::UNAUTHORIZED, "Invalid Credentials").into_response()
        }
        Err(e @ AuthError::Validation(_)) => {
            record_login("invalid");
            warn!(code = e.code(), err = %e, "login rejected by validation");
            Outcome::fail(StatusCode::BAD_REQUEST, "Username and password are required.").into_response()
        }
        Err(e @ AuthError::Repository(_)) => {
            record_login("error");
            error!(code = e.code(), err = %e, "login failed");
            Outcome::fail(StatusCode::INTERNAL_SERVER_ERROR, "Server Authentication Error").into_response()
        }
    }
}

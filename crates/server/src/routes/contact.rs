use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, routing::get, Json, Router};
use tracing::{error, info};

use models::contact::ContactMessage;
use service::{contact::ContactService, errors::ServiceError};

use crate::errors::Outcome;
use crate::observability::record_contact;
use crate::routes::content;
use crate::state::AppState;

#[utoipa::path(post, path = "/api/contact", tag = "contact", request_body = crate::openapi::ContactDoc, responses((status = 200, description = "Message stored", body = crate::openapi::OutcomeDoc), (status = 400, description = "Missing required fields", body = crate::openapi::OutcomeDoc)))]
pub async fn submit(State(state): State<AppState>, Json(input): Json<ContactMessage>) -> Response {
    match state.contact.submit(input).await {
        Ok(rec) => {
            record_contact("accepted");
            info!(id = %rec.id, "contact form submitted");
            Outcome::ok("Message sent successfully!").into_response()
        }
        Err(ServiceError::Validation(msg)) => {
            record_contact("invalid");
            Outcome::fail(StatusCode::BAD_REQUEST, msg).into_response()
        }
        Err(e) => {
            record_contact("error");
            error!(err = %e, "contact submission failed");
            Outcome::fail(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message. Please try again later.").into_response()
        }
    }
}

/// Read and delete stored messages; creation only goes through [`submit`].
pub fn inbox_routes<S>(contact: &ContactService) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/contacts", get(content::list::<ContactMessage>))
        .route(
            "/api/contacts/:id",
            get(content::get_one::<ContactMessage>).delete(content::delete::<ContactMessage>),
        )
        .with_state(contact.messages().clone())
}

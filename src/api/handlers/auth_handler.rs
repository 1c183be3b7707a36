//! Signup and login handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::null_as_empty;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_LOGIN_OK, MSG_SIGNUP_OK};
use crate::domain::{institutional_email_message, is_institutional_email};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// User signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Institutional email address
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_institutional_email"))]
    #[schema(example = "01fe21bcs001@kletech.ac.in")]
    pub email: String,
    /// Password (minimum 8 characters, checked after the email)
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "01fe21bcs001@kletech.ac.in")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn validate_institutional_email(email: &str) -> Result<(), ValidationError> {
    if is_institutional_email(email) {
        return Ok(());
    }
    let mut err = ValidationError::new("institutional_email");
    err.message = Some(institutional_email_message().into());
    Err(err)
}

/// Create signup/login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup successful", body = MessageResponse),
        (status = 400, description = "Invalid email, short password, or user already exists")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .signup(payload.email, payload.password)
        .await?;

    Ok(Json(MessageResponse::new(MSG_SIGNUP_OK)))
}

/// Check email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(MessageResponse::new(MSG_LOGIN_OK)))
}

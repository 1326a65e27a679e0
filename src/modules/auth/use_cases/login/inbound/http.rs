use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::auth::core::user::UserProfile;
use crate::modules::auth::use_cases::login::handler::LoginError;
use crate::shared::core::http::Message;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.login_handler.handle(&body.email, &body.password).await {
        Ok((token, user)) => Json(LoginResponse {
            token,
            user: UserProfile::from(&user),
        })
        .into_response(),
        Err(LoginError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(Message::new("Invalid email or password")),
        )
            .into_response(),
        Err(LoginError::Store(err)) => {
            tracing::error!(error = %err, "login failed against the user store");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

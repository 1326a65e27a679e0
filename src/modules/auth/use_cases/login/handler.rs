use crate::modules::auth::core::ports::{SessionStore, UserStore};
use crate::modules::auth::core::user::User;
use crate::shared::core::store::StoreError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct LoginHandler {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    pub async fn handle(&self, email: &str, password: &str) -> Result<(String, User), LoginError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;
        // Passwords are compared as stored; the demo seed ships them plain.
        if user.password != password {
            return Err(LoginError::InvalidCredentials);
        }
        let token = self.sessions.issue(&user.id).await?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok((token, user))
    }
}

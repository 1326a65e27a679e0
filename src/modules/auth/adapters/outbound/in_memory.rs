use crate::modules::auth::core::ports::{SessionStore, UserStore};
use crate::modules::auth::core::user::User;
use crate::shared::core::store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryUserStore {
    rows: RwLock<Vec<User>>,
    is_offline: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("User store offline"));
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn replace_all(&self, users: Vec<User>) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("User store offline"));
        }
        *self.rows.write().await = users;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySessionStore {
    tokens: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn issue(&self, user_id: &str) -> Result<String, StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("Session store offline"));
        }
        let token = Uuid::now_v7().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        Ok(token)
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("Session store offline"));
        }
        Ok(self.tokens.read().await.get(token).cloned())
    }
}

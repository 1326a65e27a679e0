// Ports for the session/identity collaborator. The timesheets module never
// sees these; it only runs behind the authentication gate.

use crate::modules::auth::core::user::User;
use crate::shared::core::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Replaces the whole collection. Used by seeding.
    async fn replace_all(&self, users: Vec<User>) -> Result<(), StoreError>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issues an opaque bearer token for the user.
    async fn issue(&self, user_id: &str) -> Result<String, StoreError>;

    /// Resolves a bearer token to the user id it was issued for.
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError>;
}

use crate::modules::timesheets::adapters::outbound::in_memory::{
    InMemoryEntryStore, InMemoryWeekStore,
};
use crate::modules::auth::adapters::outbound::in_memory::{
    InMemorySessionStore, InMemoryUserStore,
};
use crate::modules::auth::core::ports::SessionStore;
use crate::shell::state::AppState;
use std::sync::Arc;

/// Fresh in-memory state plus a bearer token already resolvable against it.
pub async fn authenticated_state() -> (AppState, String) {
    let state = AppState::in_memory();
    let token = state
        .sessions
        .issue("user-1")
        .await
        .expect("in-memory session issue cannot fail");
    (state, token)
}

/// Like [`authenticated_state`], but with the week store offline so store
/// failures surface as 500s. Sessions keep working.
pub async fn authenticated_offline_state() -> (AppState, String) {
    let mut weeks = InMemoryWeekStore::new();
    weeks.toggle_offline();
    let state = AppState::with_stores(
        Arc::new(weeks),
        Arc::new(InMemoryEntryStore::new()),
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemorySessionStore::new()),
    );
    let token = state
        .sessions
        .issue("user-1")
        .await
        .expect("in-memory session issue cannot fail");
    (state, token)
}

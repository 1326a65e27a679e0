use crate::modules::auth::adapters::outbound::in_memory::{
    InMemorySessionStore, InMemoryUserStore,
};
use crate::modules::auth::core::ports::{SessionStore, UserStore};
use crate::modules::auth::use_cases::login::handler::LoginHandler;
use crate::modules::timesheets::adapters::outbound::in_memory::{
    InMemoryEntryStore, InMemoryWeekStore,
};
use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::use_cases::create_entry::handler::CreateEntryHandler;
use crate::modules::timesheets::use_cases::delete_entry::handler::DeleteEntryHandler;
use crate::modules::timesheets::use_cases::update_entry::handler::UpdateEntryHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub weeks: Arc<dyn WeekStore>,
    pub entries: Arc<dyn EntryStore>,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub login_handler: Arc<LoginHandler>,
    pub create_entry: Arc<CreateEntryHandler>,
    pub update_entry: Arc<UpdateEntryHandler>,
    pub delete_entry: Arc<DeleteEntryHandler>,
}

impl AppState {
    /// Wires handlers onto the given store implementations.
    pub fn with_stores(
        weeks: Arc<dyn WeekStore>,
        entries: Arc<dyn EntryStore>,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            login_handler: Arc::new(LoginHandler::new(users.clone(), sessions.clone())),
            create_entry: Arc::new(CreateEntryHandler::new(weeks.clone(), entries.clone())),
            update_entry: Arc::new(UpdateEntryHandler::new(weeks.clone(), entries.clone())),
            delete_entry: Arc::new(DeleteEntryHandler::new(weeks.clone(), entries.clone())),
            weeks,
            entries,
            users,
            sessions,
        }
    }

    /// Fresh in-memory stores. The binary and most tests start here.
    pub fn in_memory() -> Self {
        Self::with_stores(
            Arc::new(InMemoryWeekStore::new()),
            Arc::new(InMemoryEntryStore::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemorySessionStore::new()),
        )
    }
}

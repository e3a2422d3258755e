use sea_orm::DatabaseConnection;

/// Shared router state. The connection is a pooled handle built once at
/// startup; each request borrows it through a `UnitOfWork`.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

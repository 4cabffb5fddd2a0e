use std::sync::Arc;

use service::singer::{SeaOrmSingerRepository, SingerRepository, SingerService};

/// Shared handler state. The service owns the process-wide database session.
#[derive(Clone)]
pub struct AppState {
    pub singers: Arc<SingerService>,
}

impl AppState {
    pub fn new(singers: SingerService) -> Self {
        Self { singers: Arc::new(singers) }
    }

    pub fn with_repository(repo: Arc<dyn SingerRepository>) -> Self {
        Self::new(SingerService::new(repo))
    }

    pub fn with_database(db: sea_orm::DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmSingerRepository::new(db)))
    }
}

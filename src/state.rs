use crate::session::AttendanceSession;
use crate::storage::FileRecordStore;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    /// Backs the `/attendance` endpoints.
    pub backend: FileRecordStore,
    /// Where the session loads from and saves to.
    pub store: Arc<dyn RecordStore>,
    pub session: Arc<Mutex<AttendanceSession>>,
}

impl AppState {
    pub fn new(
        backend: FileRecordStore,
        store: Arc<dyn RecordStore>,
        session: AttendanceSession,
    ) -> Self {
        Self {
            backend,
            store,
            session: Arc::new(Mutex::new(session)),
        }
    }
}

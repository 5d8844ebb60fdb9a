pub mod app;
pub mod defaults;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod projection;
pub mod records;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use defaults::DEFAULT_COURSES;
pub use projection::{AttendanceProjection, compute_projection};
pub use session::{AttendanceSession, Notification, save_session};
pub use state::AppState;
pub use storage::{FileRecordStore, load_data, resolve_data_path};
pub use store::{HttpRecordStore, RecordStore, StoreError};

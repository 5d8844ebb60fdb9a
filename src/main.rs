use attendance_tracker::{
    AppState, AttendanceSession, DEFAULT_COURSES, FileRecordStore, HttpRecordStore, RecordStore,
    resolve_data_path, router,
};
use std::{env, net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let backend = FileRecordStore::open(data_path).await;
    let store: Arc<dyn RecordStore> = match env::var("ATTENDANCE_API_BASE") {
        Ok(base) if !base.trim().is_empty() => {
            let remote = HttpRecordStore::new(base.trim());
            info!("session store: {}", remote.endpoint());
            Arc::new(remote)
        }
        _ => {
            info!("session store: {}", backend.path().display());
            Arc::new(backend.clone())
        }
    };

    let session = AttendanceSession::start(store.as_ref(), DEFAULT_COURSES).await;
    let app = router(AppState::new(backend, store, session));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

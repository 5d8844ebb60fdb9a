use crate::models::{AttendancePayload, CourseAttendanceRecord};
use crate::store::{RecordStore, StoreError};
use async_trait::async_trait;
use std::{env, path::Path, path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/attendance.json"))
}

pub async fn load_data(path: &Path) -> AttendancePayload {
    match read_data(path).await {
        Ok(data) => data,
        Err(err) => {
            error!("failed to load data file {}: {err}", path.display());
            AttendancePayload::default()
        }
    }
}

async fn read_data(path: &Path) -> Result<AttendancePayload, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AttendancePayload::default()),
        Err(err) => Err(err.into()),
    }
}

pub async fn persist_data(path: &Path, data: &AttendancePayload) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// The JSON file behind the `/attendance` endpoints, cached in memory.
#[derive(Clone)]
pub struct FileRecordStore {
    path: PathBuf,
    data: Arc<Mutex<AttendancePayload>>,
}

impl FileRecordStore {
    pub async fn open(path: PathBuf) -> Self {
        let data = load_data(&path).await;
        Self {
            path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn payload(&self) -> AttendancePayload {
        self.data.lock().await.clone()
    }

    /// Swaps in `payload` and writes it through to disk.
    pub async fn replace(&self, payload: AttendancePayload) -> Result<AttendancePayload, StoreError> {
        let mut data = self.data.lock().await;
        persist_data(&self.path, &payload).await?;
        *data = payload;
        Ok(data.clone())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn load_records(&self) -> Result<Vec<CourseAttendanceRecord>, StoreError> {
        Ok(self.payload().await.subjects)
    }

    async fn save_records(&self, records: &[CourseAttendanceRecord]) -> Result<(), StoreError> {
        self.replace(AttendancePayload {
            subjects: records.to_vec(),
        })
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let data = load_data(&dir.path().join("absent.json")).await;
        assert!(data.subjects.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let data = load_data(&path).await;
        assert!(data.subjects.is_empty());
    }

    #[tokio::test]
    async fn saved_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = FileRecordStore::open(path.clone()).await;
        let records = vec![CourseAttendanceRecord::new("Wireless Sensor Networks", 15, 3)];

        store.save_records(&records).await.unwrap();

        let reopened = FileRecordStore::open(path).await;
        assert_eq!(reopened.load_records().await.unwrap(), records);
    }

    #[tokio::test]
    async fn failed_write_keeps_cached_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("state.json");
        let store = FileRecordStore::open(path).await;

        let result = store
            .save_records(&[CourseAttendanceRecord::new("Full Stack Web Development", 15, 1)])
            .await;

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(store.payload().await.subjects.is_empty());
    }
}

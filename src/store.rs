use crate::models::{AttendancePayload, CourseAttendanceRecord};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored attendance is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("attendance request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("attendance backend answered {0}")]
    Status(reqwest::StatusCode),
}

/// Where the session's course list comes from and goes back to.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load_records(&self) -> Result<Vec<CourseAttendanceRecord>, StoreError>;

    async fn save_records(&self, records: &[CourseAttendanceRecord]) -> Result<(), StoreError>;
}

/// Talks to a backend exposing `GET`/`POST {base}/attendance`.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    endpoint: String,
}

impl HttpRecordStore {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/attendance", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn load_records(&self) -> Result<Vec<CourseAttendanceRecord>, StoreError> {
        let res = self.client.get(&self.endpoint).send().await?;
        if !res.status().is_success() {
            return Err(StoreError::Status(res.status()));
        }
        let payload: AttendancePayload = res.json().await?;
        Ok(payload.subjects)
    }

    async fn save_records(&self, records: &[CourseAttendanceRecord]) -> Result<(), StoreError> {
        let body = AttendancePayload {
            subjects: records.to_vec(),
        };
        let res = self.client.post(&self.endpoint).json(&body).send().await?;
        if !res.status().is_success() {
            return Err(StoreError::Status(res.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let store = HttpRecordStore::new("http://127.0.0.1:9000/");
        assert_eq!(store.endpoint(), "http://127.0.0.1:9000/attendance");
        let store = HttpRecordStore::new("http://example.test/api");
        assert_eq!(store.endpoint(), "http://example.test/api/attendance");
    }
}

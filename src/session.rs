use crate::defaults::{CourseSeed, seed_records};
use crate::models::{CourseAttendanceRecord, CourseStats};
use crate::records::{EditError, Field, adjust_field, set_field};
use crate::stats::{build_course_stats, course_stats};
use crate::store::RecordStore;
use serde::Serialize;
use tracing::{error, info, warn};

/// The course list a single tracker page edits.
#[derive(Debug, Clone, Default)]
pub struct AttendanceSession {
    records: Vec<CourseAttendanceRecord>,
}

impl AttendanceSession {
    pub fn new(records: Vec<CourseAttendanceRecord>) -> Self {
        Self { records }
    }

    /// Loads the stored list, falling back to `defaults` when the store fails
    /// or has nothing saved yet.
    pub async fn start(store: &dyn RecordStore, defaults: &[CourseSeed]) -> Self {
        match store.load_records().await {
            Ok(records) if !records.is_empty() => {
                info!("loaded {} courses from store", records.len());
                Self::new(records)
            }
            Ok(_) => {
                info!("store is empty, using default courses");
                Self::new(seed_records(defaults))
            }
            Err(err) => {
                warn!("failed to load attendance, using default courses: {err}");
                Self::new(seed_records(defaults))
            }
        }
    }

    pub fn records(&self) -> &[CourseAttendanceRecord] {
        &self.records
    }

    pub fn stats(&self) -> Vec<CourseStats> {
        build_course_stats(&self.records)
    }

    pub fn set_field(
        &mut self,
        index: usize,
        field: Field,
        raw_value: &str,
    ) -> Result<CourseStats, EditError> {
        let record = self.record_mut(index)?;
        set_field(record, field, raw_value)?;
        Ok(course_stats(index, record))
    }

    pub fn adjust_field(
        &mut self,
        index: usize,
        field: Field,
        delta: i64,
    ) -> Result<CourseStats, EditError> {
        let record = self.record_mut(index)?;
        adjust_field(record, field, delta)?;
        Ok(course_stats(index, record))
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut CourseAttendanceRecord, EditError> {
        self.records
            .get_mut(index)
            .ok_or(EditError::UnknownCourse(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }
}

/// Pushes a snapshot of the course list to `store`. The outcome only becomes
/// a notification; nothing flows back into the session.
pub async fn save_session(store: &dyn RecordStore, records: &[CourseAttendanceRecord]) -> Notification {
    match store.save_records(records).await {
        Ok(()) => {
            info!("saved {} courses", records.len());
            Notification {
                level: NotificationLevel::Success,
                message: "Attendance saved".to_string(),
            }
        }
        Err(err) => {
            error!("failed to save attendance: {err}");
            Notification {
                level: NotificationLevel::Failure,
                message: "Error saving attendance".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_COURSES;
    use crate::projection::AttendanceProjection;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<CourseAttendanceRecord>>,
        broken: bool,
    }

    impl MemoryStore {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn with(records: Vec<CourseAttendanceRecord>) -> Self {
            Self {
                records: Mutex::new(records),
                broken: false,
            }
        }

        fn fail() -> StoreError {
            StoreError::Io(std::io::Error::other("backend down"))
        }
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn load_records(&self) -> Result<Vec<CourseAttendanceRecord>, StoreError> {
            if self.broken {
                return Err(Self::fail());
            }
            Ok(self.records.lock().unwrap().clone())
        }

        async fn save_records(&self, records: &[CourseAttendanceRecord]) -> Result<(), StoreError> {
            if self.broken {
                return Err(Self::fail());
            }
            *self.records.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_failure_falls_back_to_defaults() {
        let session = AttendanceSession::start(&MemoryStore::broken(), DEFAULT_COURSES).await;
        assert_eq!(session.records().len(), 6);
        assert_eq!(session.records()[0].course_label, "Service Oriented Architecture");
        assert_eq!(session.records()[5], CourseAttendanceRecord::new("Behavioral Psychology", 15, 0));
    }

    #[tokio::test]
    async fn empty_store_falls_back_to_defaults() {
        let session = AttendanceSession::start(&MemoryStore::default(), DEFAULT_COURSES).await;
        assert_eq!(session.records(), seed_records(DEFAULT_COURSES).as_slice());
    }

    #[tokio::test]
    async fn stored_records_win_over_defaults() {
        let stored = vec![CourseAttendanceRecord::new("Compilers", 10, 4)];
        let session = AttendanceSession::start(&MemoryStore::with(stored.clone()), DEFAULT_COURSES).await;
        assert_eq!(session.records(), stored.as_slice());
    }

    #[tokio::test]
    async fn save_failure_notifies_and_keeps_records() {
        let mut session = AttendanceSession::new(seed_records(DEFAULT_COURSES));
        session.adjust_field(2, Field::Absent, 1).unwrap();
        let before = session.records().to_vec();

        let notification = save_session(&MemoryStore::broken(), session.records()).await;

        assert_eq!(notification.level, NotificationLevel::Failure);
        assert_eq!(notification.message, "Error saving attendance");
        assert_eq!(session.records(), before.as_slice());
    }

    #[tokio::test]
    async fn save_success_reaches_store() {
        let store = MemoryStore::default();
        let session = AttendanceSession::new(seed_records(DEFAULT_COURSES));

        let notification = save_session(&store, session.records()).await;

        assert!(notification.is_success());
        assert_eq!(store.load_records().await.unwrap(), session.records());
    }

    #[test]
    fn edits_return_fresh_projection() {
        let mut session = AttendanceSession::new(vec![CourseAttendanceRecord::new("Compilers", 0, 0)]);
        let stats = session.adjust_field(0, Field::Conducted, -1).unwrap();
        assert_eq!(stats.projection, AttendanceProjection::NotApplicable);

        let stats = session.set_field(0, Field::Conducted, "10").unwrap();
        assert_eq!(stats.current, "100.00%");
        let stats = session.set_field(0, Field::Absent, "4").unwrap();
        assert_eq!(stats.status, "Attend 6 classes");
    }

    #[test]
    fn edits_on_unknown_course_fail() {
        let mut session = AttendanceSession::new(Vec::new());
        assert_eq!(
            session.set_field(3, Field::Conducted, "1").unwrap_err(),
            EditError::UnknownCourse(3)
        );
    }

    #[test]
    fn rejected_input_leaves_session_untouched() {
        let mut session = AttendanceSession::new(seed_records(DEFAULT_COURSES));
        let before = session.records().to_vec();
        assert!(session.set_field(0, Field::Absent, "lots").is_err());
        assert_eq!(session.records(), before.as_slice());
    }
}

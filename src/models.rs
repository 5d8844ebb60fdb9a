use crate::projection::AttendanceProjection;
use crate::records::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAttendanceRecord {
    #[serde(rename = "courseCode")]
    pub course_label: String,
    #[serde(rename = "conducted")]
    pub conducted_count: u32,
    #[serde(rename = "absent")]
    pub absent_count: u32,
}

impl CourseAttendanceRecord {
    pub fn new(course_label: impl Into<String>, conducted_count: u32, absent_count: u32) -> Self {
        Self {
            course_label: course_label.into(),
            conducted_count,
            absent_count,
        }
    }
}

/// Body exchanged with the attendance backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttendancePayload {
    #[serde(default)]
    pub subjects: Vec<CourseAttendanceRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub field: Field,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustFieldRequest {
    pub field: Field,
    pub delta: i64,
}

#[derive(Debug, Serialize)]
pub struct CourseStats {
    pub index: usize,
    pub record: CourseAttendanceRecord,
    pub projection: AttendanceProjection,
    pub current: String,
    pub projected: String,
    pub status: String,
    pub below_threshold: bool,
}

use crate::models::CourseAttendanceRecord;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Field {
    #[serde(rename = "courseCode", alias = "course_label")]
    CourseLabel,
    #[serde(rename = "conducted")]
    Conducted,
    #[serde(rename = "absent")]
    Absent,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::CourseLabel => "courseCode",
            Self::Conducted => "conducted",
            Self::Absent => "absent",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no course at index {0}")]
    UnknownCourse(usize),
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} value {value} is too large")]
    OutOfRange { field: &'static str, value: String },
    #[error("{0} is not a count and cannot be adjusted")]
    NotAdjustable(&'static str),
}

/// Writes a raw form value into `record`.
///
/// Count fields must parse as an integer; negatives clamp to zero. On error the
/// record is left untouched.
pub fn set_field(
    record: &mut CourseAttendanceRecord,
    field: Field,
    raw_value: &str,
) -> Result<(), EditError> {
    let slot = match field {
        Field::CourseLabel => {
            record.course_label = raw_value.to_string();
            return Ok(());
        }
        Field::Conducted => &mut record.conducted_count,
        Field::Absent => &mut record.absent_count,
    };

    let trimmed = raw_value.trim();
    let parsed: i128 = trimmed.parse().map_err(|_| EditError::NotANumber {
        field: field.name(),
        value: raw_value.to_string(),
    })?;
    let value = u32::try_from(parsed.max(0)).map_err(|_| EditError::OutOfRange {
        field: field.name(),
        value: trimmed.to_string(),
    })?;

    *slot = value;
    Ok(())
}

/// Applies `delta` to a count field, clamping the result at zero.
pub fn adjust_field(
    record: &mut CourseAttendanceRecord,
    field: Field,
    delta: i64,
) -> Result<u32, EditError> {
    let slot = match field {
        Field::CourseLabel => return Err(EditError::NotAdjustable(field.name())),
        Field::Conducted => &mut record.conducted_count,
        Field::Absent => &mut record.absent_count,
    };

    let next = (i64::from(*slot).saturating_add(delta)).clamp(0, i64::from(u32::MAX));
    *slot = next as u32;
    Ok(*slot)
}

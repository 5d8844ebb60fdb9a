use crate::models::{CourseAttendanceRecord, CourseStats};
use crate::projection::{AttendanceProjection, compute_projection};

const NOT_APPLICABLE: &str = "-";

pub fn build_course_stats(records: &[CourseAttendanceRecord]) -> Vec<CourseStats> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| course_stats(index, record))
        .collect()
}

pub fn course_stats(index: usize, record: &CourseAttendanceRecord) -> CourseStats {
    let projection = compute_projection(record.conducted_count, record.absent_count);
    let (current, projected, status, below_threshold) = match &projection {
        AttendanceProjection::NotApplicable => (
            NOT_APPLICABLE.to_string(),
            NOT_APPLICABLE.to_string(),
            NOT_APPLICABLE.to_string(),
            false,
        ),
        AttendanceProjection::Computed(stats) => {
            let below = stats.classes_needed_to_recover > 0;
            let status = if below {
                format!("Attend {} classes", stats.classes_needed_to_recover)
            } else {
                format!("Can skip {} classes", stats.max_additional_skips)
            };
            (
                format_percentage(stats.current_percentage),
                format_percentage(stats.projected_percentage),
                status,
                below,
            )
        }
    };

    CourseStats {
        index,
        record: record.clone(),
        projection,
        current,
        projected,
        status,
        below_threshold,
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

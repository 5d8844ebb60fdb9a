use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceProjection {
    /// No classes conducted yet, so there is no ratio to project from.
    NotApplicable,
    Computed(ProjectionStats),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionStats {
    pub attended: i64,
    pub current_percentage: f64,
    pub max_additional_skips: u64,
    pub classes_needed_to_recover: u64,
    pub projected_percentage: f64,
}

impl AttendanceProjection {
    pub fn stats(&self) -> Option<&ProjectionStats> {
        match self {
            Self::NotApplicable => None,
            Self::Computed(stats) => Some(stats),
        }
    }
}

/// Projects a course's standing against the fixed 75% attendance threshold.
///
/// Skips are future absences: each one grows `conducted` and leaves `attended`
/// alone. Recovery classes are future attendances and grow both. The engine does
/// not clamp its inputs; `absent > conducted` yields a negative attended count
/// and a negative percentage.
pub fn compute_projection(conducted: u32, absent: u32) -> AttendanceProjection {
    if conducted == 0 {
        return AttendanceProjection::NotApplicable;
    }

    let conducted = i64::from(conducted);
    let absent = i64::from(absent);
    let attended = conducted - absent;

    // attended / (conducted + s) >= 3/4  <=>  s <= (conducted - 4 * absent) / 3
    let skip_margin = conducted - 4 * absent;
    let max_additional_skips = if skip_margin < 0 {
        0
    } else {
        (skip_margin / 3) as u64
    };

    // (attended + n) / (conducted + n) >= 3/4  <=>  n >= 4 * absent - conducted
    let classes_needed_to_recover = (4 * absent - conducted).max(0) as u64;

    AttendanceProjection::Computed(ProjectionStats {
        attended,
        current_percentage: percentage(attended, conducted),
        max_additional_skips,
        classes_needed_to_recover,
        projected_percentage: percentage(attended, conducted + max_additional_skips as i64),
    })
}

fn percentage(attended: i64, conducted: i64) -> f64 {
    attended as f64 / conducted as f64 * 100.0
}

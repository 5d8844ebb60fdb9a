use crate::models::CourseAttendanceRecord;

#[derive(Debug, Clone, Copy)]
pub struct CourseSeed {
    pub label: &'static str,
    pub conducted: u32,
    pub absent: u32,
}

impl CourseSeed {
    pub fn to_record(self) -> CourseAttendanceRecord {
        CourseAttendanceRecord::new(self.label, self.conducted, self.absent)
    }
}

/// Courses shown when the store has nothing to offer.
pub const DEFAULT_COURSES: &[CourseSeed] = &[
    CourseSeed { label: "Service Oriented Architecture", conducted: 17, absent: 1 },
    CourseSeed { label: "Full Stack Web Development", conducted: 15, absent: 1 },
    CourseSeed { label: "Internet of Things", conducted: 15, absent: 3 },
    CourseSeed { label: "Wireless Sensor Networks", conducted: 15, absent: 3 },
    CourseSeed { label: "Semiconductor Packaging Technologies", conducted: 17, absent: 3 },
    CourseSeed { label: "Behavioral Psychology", conducted: 15, absent: 0 },
];

pub fn seed_records(seeds: &[CourseSeed]) -> Vec<CourseAttendanceRecord> {
    seeds.iter().copied().map(CourseSeed::to_record).collect()
}

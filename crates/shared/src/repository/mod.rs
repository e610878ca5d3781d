mod activity;
mod attendance;
mod course;
mod enrollment;
mod profile;

pub use self::activity::ActivityQueryRepository;
pub use self::attendance::AttendanceQueryRepository;
pub use self::course::CourseQueryRepository;
pub use self::enrollment::EnrollmentQueryRepository;
pub use self::profile::{ProfileCommandRepository, ProfileQueryRepository};

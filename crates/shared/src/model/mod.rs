mod activity;
mod attendance;
mod course;
mod enrollment;
mod profile;
mod role;

pub use self::activity::{Activity, ActivityWithCourse};
pub use self::attendance::{Attendance, AttendanceStatus, StatusCount};
pub use self::course::Course;
pub use self::enrollment::{Enrollment, EnrollmentWithCourse};
pub use self::profile::Profile;
pub use self::role::Role;

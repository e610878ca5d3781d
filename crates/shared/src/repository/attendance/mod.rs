mod query;

pub use self::query::AttendanceQueryRepository;

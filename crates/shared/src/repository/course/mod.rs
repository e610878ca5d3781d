mod query;

pub use self::query::CourseQueryRepository;

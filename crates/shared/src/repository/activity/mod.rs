mod query;

pub use self::query::ActivityQueryRepository;

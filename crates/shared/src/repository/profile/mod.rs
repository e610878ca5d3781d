mod command;
mod query;

pub use self::command::ProfileCommandRepository;
pub use self::query::ProfileQueryRepository;

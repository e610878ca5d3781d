mod admin;
mod student;

pub use self::admin::{AdminOverviewDeps, AdminOverviewService};
pub use self::student::{StudentOverviewDeps, StudentOverviewService};

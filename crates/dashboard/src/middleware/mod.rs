pub mod access_gate;
pub mod validate;

pub use self::access_gate::{AuthContext, access_gate};
pub use self::validate::ValidatedJson;

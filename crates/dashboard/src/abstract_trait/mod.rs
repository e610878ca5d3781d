pub mod session;

pub use self::session::{DynSessionStore, SessionStoreTrait};

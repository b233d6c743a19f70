mod common;
pub use self::common::Query;

mod named;
pub use self::named::{LookupMode, NamedQuery};

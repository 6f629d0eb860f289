mod meta;
pub use self::meta::{Pagination, Response};

mod filter;
pub(crate) use self::filter::join_trimmed;
pub use self::filter::FilterSpec;

mod params;
pub use self::params::{ParamValue, QueryParams};

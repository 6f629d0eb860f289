mod client;
mod config;
mod errors;
mod query;
pub mod transport;
pub mod types;
pub use self::client::{Client, BASE_URL};
pub use self::config::{Config, API_TOKEN_VAR, TIMEZONE_VAR};
pub use self::errors::Error;
pub use self::query::{FilterSpec, ParamValue, QueryParams};
pub use self::transport::{HttpTransport, Transport, TransportError};

mod client;
mod config;
mod context;
mod errors;
mod query;
mod resource;
pub mod types;
pub use self::client::Client;
pub use self::config::{ApiConfig, ConfigError};
pub use self::context::RequestContext;
pub use self::errors::Error;
pub use self::query::PageQuery;
pub use self::resource::Resource;

pub mod api;
pub mod config;
pub mod error;
pub mod proxy;
pub mod types;
pub mod upstream;

pub use error::{ProxyError, Result};

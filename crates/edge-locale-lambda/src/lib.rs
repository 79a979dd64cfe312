#![forbid(unsafe_code)]

mod config;
mod error;
mod event;
mod handler;

pub use config::{NegotiationConfig, load_config, load_config_or_default};
pub use error::ConfigError;
pub use event::{first_header_value, request_mut};
pub use handler::Negotiator;

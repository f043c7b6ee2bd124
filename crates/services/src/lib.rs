#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod session_start;
pub mod transport;

pub use iq_core::Clock;
pub use reqwest::StatusCode;

pub use config::ApiConfig;
pub use error::{ConfigError, SessionStartError, TransportError};
pub use session_start::{START_PATH, SessionStartHooks, SessionStartService};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};

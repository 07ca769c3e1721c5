pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::Session;

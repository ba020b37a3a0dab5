pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logger;
pub mod state;

pub use app::{App, LightboxCtx};
pub use error::LightboxError;
pub use state::{LightboxState, Visibility};

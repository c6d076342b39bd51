pub mod config;
pub mod text;
pub mod urls;

pub use config::{ConfigError, LoginConfig};
pub use text::ButtonText;

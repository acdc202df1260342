pub mod app_config;
pub mod json_source;

pub use app_config::Config;
pub use json_source::{parse_orders, JsonFileSource};
